use crate::base::{check_base58, decode_base58, decode_multibase};
use crate::codec::{SHA2_256, SHA2_256_LEN};
use crate::error::{ContentHashError, Result};
use crate::types::{Cid, CidVersion, Multihash, ParseConfig, Version};
use crate::varint::read_varint;
use log::{debug, trace};
use std::str::FromStr;

/// Length of a base58btc CIDv0 string
pub const CID_V0_STRING_LEN: usize = 46;
/// Length of a binary CIDv0 (bare sha2-256 multihash)
pub const CID_V0_BYTES_LEN: usize = 2 + SHA2_256_LEN;

const CID_V0_PREFIX: &str = "Qm";

/// Parse a textual CID with the default configuration
pub fn parse_cid(input: &str) -> Result<Cid> {
    parse_cid_with_config(input, &ParseConfig::default())
}

/// Parse a textual CID.
///
/// `Qm...` strings are CIDv0 (base58btc, no multibase prefix). Anything
/// else must start with a multibase prefix and decode to a CIDv1.
pub fn parse_cid_with_config(input: &str, config: &ParseConfig) -> Result<Cid> {
    if input.starts_with(CID_V0_PREFIX) {
        let cid = parse_cid_v0(input)?;
        debug!("parsed CIDv0 {}", input);
        return Ok(cid);
    }

    let code = input
        .chars()
        .next()
        .ok_or_else(|| ContentHashError::UnrecognizedCidFormat("empty input".to_string()))?;
    if multibase::Base::from_code(code).is_err() {
        return Err(ContentHashError::UnrecognizedCidFormat(format!(
            "{:?} is neither a CIDv0 nor a multibase prefix",
            code
        )));
    }

    let (base, bytes) = decode_multibase(input, config)?;
    let cid = parse_cid_v1_bytes(&bytes, config)?;
    debug!(
        "parsed CIDv1 {} (multibase {:?}, codec {:#x}, hash {:#x})",
        input,
        base,
        cid.codec(),
        cid.hash().code()
    );
    Ok(cid)
}

fn parse_cid_v0(input: &str) -> Result<Cid> {
    // Symbols first so a bad character is reported even when the length is wrong
    check_base58(input)?;

    if input.len() != CID_V0_STRING_LEN {
        return Err(ContentHashError::InvalidCidV0(format!(
            "expected {} characters, got {}",
            CID_V0_STRING_LEN,
            input.len()
        )));
    }

    cid_v0_from_bytes(&decode_base58(input)?)
}

fn cid_v0_from_bytes(bytes: &[u8]) -> Result<Cid> {
    match bytes {
        [0x12, 0x20, digest @ ..] if digest.len() == SHA2_256_LEN => {
            Cid::new_v0(Multihash::wrap(SHA2_256, digest))
        }
        _ if bytes.len() != CID_V0_BYTES_LEN => Err(ContentHashError::InvalidCidV0(format!(
            "expected {} bytes, got {}",
            CID_V0_BYTES_LEN,
            bytes.len()
        ))),
        _ => Err(ContentHashError::InvalidCidV0(format!(
            "expected sha2-256 multihash header 1220, got {}",
            hex::encode(&bytes[..2])
        ))),
    }
}

fn parse_cid_v1_bytes(bytes: &[u8], config: &ParseConfig) -> Result<Cid> {
    let (version, mut offset) = read_varint(bytes, 0)?;
    if version != Version::V1.code() {
        return Err(ContentHashError::UnsupportedCidVersion(version));
    }

    let (codec, len) = read_varint(bytes, offset)?;
    offset += len;
    let (hash_fn, len) = read_varint(bytes, offset)?;
    offset += len;
    let (hash_len, len) = read_varint(bytes, offset)?;
    offset += len;
    trace!(
        "CIDv1 header: codec {:#x}, hash {:#x}, length {}",
        codec,
        hash_fn,
        hash_len
    );

    let expected = usize::try_from(hash_len)
        .ok()
        .filter(|&n| n <= config.max_digest_length)
        .ok_or_else(|| {
            ContentHashError::InvalidLength(format!(
                "declared digest length {} exceeds maximum {}",
                hash_len, config.max_digest_length
            ))
        })?;

    let digest = &bytes[offset..];
    if digest.len() != expected {
        return Err(ContentHashError::DigestLengthMismatch {
            expected,
            got: digest.len(),
        });
    }

    Ok(Cid::new_v1(codec, Multihash::wrap(hash_fn, digest)))
}

/// Parse a binary CID.
///
/// A 34-byte `12 20 ...` sequence is a CIDv0; anything else is read as a
/// CIDv1 header followed by the digest.
pub fn parse_cid_bytes(bytes: &[u8]) -> Result<Cid> {
    parse_cid_bytes_with_config(bytes, &ParseConfig::default())
}

pub fn parse_cid_bytes_with_config(bytes: &[u8], config: &ParseConfig) -> Result<Cid> {
    if bytes.len() == CID_V0_BYTES_LEN && bytes.starts_with(&[0x12, 0x20]) {
        return cid_v0_from_bytes(bytes);
    }
    parse_cid_v1_bytes(bytes, config)
}

/// Classify a CID string by its shape. Never fails; anything else is `Unknown`.
///
/// `Qm` followed by 44 more base58btc symbols is a CIDv0. A string with any
/// multibase prefix the `multibase` crate knows whose payload starts with the
/// varint `1` is a CIDv1. The rest of the CID is not validated.
pub fn detect_cid_version(input: &str) -> CidVersion {
    let version = if input.starts_with(CID_V0_PREFIX) {
        if input.len() == CID_V0_STRING_LEN && check_base58(input).is_ok() {
            CidVersion::V0
        } else {
            CidVersion::Unknown
        }
    } else {
        let config = ParseConfig::new().with_extended_multibase();
        match decode_multibase(input, &config).and_then(|(_, bytes)| read_varint(&bytes, 0)) {
            Ok((version, _)) if version == Version::V1.code() => CidVersion::V1,
            _ => CidVersion::Unknown,
        }
    };
    trace!("detected {} for {:?}", version, input);
    version
}

impl FromStr for Cid {
    type Err = ContentHashError;

    fn from_str(s: &str) -> Result<Self> {
        parse_cid(s)
    }
}

impl TryFrom<&[u8]> for Cid {
    type Error = ContentHashError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        parse_cid_bytes(bytes)
    }
}
