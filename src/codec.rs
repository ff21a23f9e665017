//! Multicodec code tables.
//!
//! Codes follow the multiformats [code table](https://github.com/multiformats/multicodec/blob/master/table.csv).
//! The parser accepts any code that fits a `u64`; the tables below only
//! provide names for the common ones.

/// dag-pb, the codec of every CIDv0
pub const DAG_PB: u64 = 0x70;
pub const RAW: u64 = 0x55;
pub const DAG_CBOR: u64 = 0x71;
pub const DAG_JSON: u64 = 0x0129;
pub const LIBP2P_KEY: u64 = 0x72;

pub const IDENTITY: u64 = 0x00;
pub const SHA2_256: u64 = 0x12;
pub const SHA2_256_LEN: usize = 32;

/// EIP-1577 namespace codes
pub const IPFS_NS: u64 = 0xe3;
pub const IPNS_NS: u64 = 0xe5;

static CODECS: &[(u64, &str)] = &[
    (0x55, "raw"),
    (0x70, "dag-pb"),
    (0x71, "dag-cbor"),
    (0x72, "libp2p-key"),
    (0x78, "git-raw"),
    (0x85, "dag-jose"),
    (0x0129, "dag-json"),
    (0x0200, "json"),
];

static HASHES: &[(u64, &str)] = &[
    (0x00, "identity"),
    (0x11, "sha1"),
    (0x12, "sha2-256"),
    (0x13, "sha2-512"),
    (0x14, "sha3-512"),
    (0x15, "sha3-384"),
    (0x16, "sha3-256"),
    (0x17, "sha3-224"),
    (0x1b, "keccak-256"),
    (0x1e, "blake3"),
    (0xb220, "blake2b-256"),
    (0xb240, "blake2b-512"),
    (0xb260, "blake2s-256"),
];

fn lookup(table: &'static [(u64, &'static str)], code: u64) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Name of a content codec, if known
pub fn codec_name(code: u64) -> Option<&'static str> {
    lookup(CODECS, code)
}

/// Name of a multihash function, if known
pub fn hash_name(code: u64) -> Option<&'static str> {
    lookup(HASHES, code)
}
