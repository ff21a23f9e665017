use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentHashError {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Truncated varint")]
    TruncatedVarint,

    #[error("Varint overflows u64")]
    VarintOverflow,

    #[error("Unsupported multibase prefix: {0:?}")]
    UnsupportedMultibase(char),

    #[error("Malformed multibase string: {0}")]
    MalformedMultibase(String),

    #[error("Unsupported CID version: {0}")]
    UnsupportedCidVersion(u64),

    #[error("Digest length mismatch: expected {expected}, got {got}")]
    DigestLengthMismatch { expected: usize, got: usize },

    #[error("Invalid CIDv0: {0}")]
    InvalidCidV0(String),

    #[error("Unrecognized CID format: {0}")]
    UnrecognizedCidFormat(String),

    #[error("Unsupported content hash namespace: {0:#x}")]
    UnsupportedNamespace(u64),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid CID: {0}")]
    InvalidCid(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<hex::FromHexError> for ContentHashError {
    fn from(err: hex::FromHexError) -> Self {
        ContentHashError::InvalidHex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentHashError>;
