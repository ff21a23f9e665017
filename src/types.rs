use crate::base::Multibase;
use crate::codec::{DAG_PB, IPFS_NS, IPNS_NS, SHA2_256, SHA2_256_LEN};
use crate::error::{ContentHashError, Result};
use crate::varint::{write_varint_into, U64_LEN};
use std::fmt;

/// Structural version of a CID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V0,
    V1,
}

impl Version {
    pub fn code(&self) -> u64 {
        match self {
            Version::V0 => 0,
            Version::V1 => 1,
        }
    }
}

/// Result of classifying a CID string without fully parsing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CidVersion {
    V0,
    V1,
    Unknown,
}

impl CidVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            CidVersion::V0 => "v0",
            CidVersion::V1 => "v1",
            CidVersion::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hash function code together with the digest it produced
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    pub fn wrap(code: u64, digest: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            digest: digest.into(),
        }
    }

    /// Hash function code
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Digest length in bytes; always equal to `digest().len()`
    pub fn size(&self) -> usize {
        self.digest.len()
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// `<varint code><varint size><digest>`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.digest.len() + 4);
        self.write_into(&mut buf);
        buf
    }

    pub(crate) fn write_into(&self, buf: &mut Vec<u8>) {
        write_varint_into(self.code, buf);
        write_varint_into(self.digest.len() as u64, buf);
        buf.extend_from_slice(&self.digest);
    }

    fn is_cid_v0_compatible(&self) -> bool {
        self.code == SHA2_256 && self.digest.len() == SHA2_256_LEN
    }
}

/// A parsed content identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cid {
    version: Version,
    codec: u64,
    hash: Multihash,
}

impl Cid {
    /// CIDv0: dag-pb codec with a 32-byte sha2-256 multihash.
    pub fn new_v0(hash: Multihash) -> Result<Self> {
        if !hash.is_cid_v0_compatible() {
            return Err(ContentHashError::InvalidCidV0(format!(
                "multihash must be sha2-256/32, got {:#x}/{}",
                hash.code(),
                hash.size()
            )));
        }
        Ok(Self {
            version: Version::V0,
            codec: DAG_PB,
            hash,
        })
    }

    pub fn new_v1(codec: u64, hash: Multihash) -> Self {
        Self {
            version: Version::V1,
            codec,
            hash,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn codec(&self) -> u64 {
        self.codec
    }

    pub fn hash(&self) -> &Multihash {
        &self.hash
    }

    /// Same content, expressed as a CIDv1.
    pub fn to_v1(&self) -> Self {
        Self::new_v1(self.codec, self.hash.clone())
    }

    /// Binary form of the CID as a CIDv1:
    /// `<varint 1><varint codec><varint hash fn><varint hash len><digest>`
    pub fn to_v1_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.hash.size() + 8);
        write_varint_into(Version::V1.code(), &mut buf);
        write_varint_into(self.codec, &mut buf);
        self.hash.write_into(&mut buf);
        buf
    }

    /// Native binary form: the bare multihash for CIDv0, the CIDv1 layout otherwise.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.version {
            Version::V0 => self.hash.to_bytes(),
            Version::V1 => self.to_v1_bytes(),
        }
    }

    /// Render a CIDv1 in the given multibase. CIDv0 has a single textual form.
    pub fn to_string_of_base(&self, base: Multibase) -> Result<String> {
        match self.version {
            Version::V0 if base != Multibase::Base58Btc => Err(ContentHashError::InvalidCidV0(
                "CIDv0 can only be rendered in base58btc".to_string(),
            )),
            Version::V0 => Ok(crate::base::encode_base58(&self.to_bytes())),
            Version::V1 => Ok(base.encode(&self.to_bytes())),
        }
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match self.version {
            Version::V0 => Multibase::Base58Btc,
            Version::V1 => Multibase::Base32Lower,
        };
        let rendered = self.to_string_of_base(base).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// EIP-1577 content hash namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    #[default]
    Ipfs,
    Ipns,
}

impl Namespace {
    pub fn code(&self) -> u64 {
        match self {
            Namespace::Ipfs => IPFS_NS,
            Namespace::Ipns => IPNS_NS,
        }
    }

    pub fn from_code(code: u64) -> Result<Self> {
        match code {
            IPFS_NS => Ok(Namespace::Ipfs),
            IPNS_NS => Ok(Namespace::Ipns),
            other => Err(ContentHashError::UnsupportedNamespace(other)),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Ipfs => write!(f, "ipfs"),
            Namespace::Ipns => write!(f, "ipns"),
        }
    }
}

/// Encoded ENS content hash: `<varint namespace><CIDv1 bytes>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    pub(crate) bytes: Vec<u8>,
}

/// Configuration for CID parsing
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Accept every multibase known to the `multibase` crate, not just `b` and `z`
    pub extended_multibase: bool,

    /// Largest declared digest length accepted
    pub max_digest_length: usize,
}

/// Upper bound on declared digest lengths
pub const DEFAULT_MAX_DIGEST_LENGTH: usize = 128;

/// Version, codec, hash function and digest length varints
pub const MAX_CID_HEADER_LEN: usize = 4 * U64_LEN;

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            extended_multibase: false,
            max_digest_length: DEFAULT_MAX_DIGEST_LENGTH,
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extended_multibase(mut self) -> Self {
        self.extended_multibase = true;
        self
    }

    pub fn with_max_digest_length(mut self, length: usize) -> Self {
        self.max_digest_length = length;
        self
    }

    /// Largest binary CID this configuration can accept
    pub fn max_cid_len(&self) -> usize {
        self.max_digest_length.saturating_add(MAX_CID_HEADER_LEN)
    }
}
