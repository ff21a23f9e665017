use crate::error::{ContentHashError, Result};
use crate::parse::{parse_cid, parse_cid_bytes};
use crate::types::{Cid, ContentHash, Namespace};
use crate::varint::{read_varint, write_varint_into};
use log::debug;
use std::fmt;

const HEX_PREFIX: &str = "0x";

/// Encode a CID as an IPFS content hash.
///
/// Layout: `e3 01 <varint 1><varint codec><varint hash fn><varint hash len><digest>`.
/// The leading `e3 01` is the varint form of the ipfs namespace code 0xe3.
/// CIDv0 input is upgraded to the CIDv1 binary shape.
pub fn encode_cid(cid: &Cid) -> Vec<u8> {
    encode_cid_with_namespace(cid, Namespace::Ipfs)
}

pub fn encode_cid_with_namespace(cid: &Cid, namespace: Namespace) -> Vec<u8> {
    let cid_bytes = cid.to_v1_bytes();
    let mut buf = Vec::with_capacity(cid_bytes.len() + 2);
    write_varint_into(namespace.code(), &mut buf);
    buf.extend_from_slice(&cid_bytes);
    buf
}

/// Encode a textual CID as a `0x`-prefixed lowercase hex content hash.
///
/// Empty input yields `"0x"`, the "no content" value. Every other failure
/// is returned to the caller.
pub fn encode_content_hash(cid: &str) -> Result<String> {
    encode_content_hash_with_namespace(cid, Namespace::Ipfs)
}

pub fn encode_content_hash_with_namespace(cid: &str, namespace: Namespace) -> Result<String> {
    if cid.is_empty() {
        return Ok(HEX_PREFIX.to_string());
    }

    let parsed = parse_cid(cid)?;
    let content_hash = ContentHash::with_namespace(&parsed, namespace);
    debug!("encoded {} as {} content hash", cid, namespace);
    Ok(content_hash.to_hex())
}

/// Decode a hex content hash (with or without `0x`) into its namespace and CID.
pub fn decode_content_hash(input: &str) -> Result<(Namespace, Cid)> {
    ContentHash::from_hex(input)?.decode()
}

fn decode_bytes(bytes: &[u8]) -> Result<(Namespace, Cid)> {
    if bytes.is_empty() {
        return Err(ContentHashError::InvalidLength(
            "empty content hash".to_string(),
        ));
    }
    let (code, offset) = read_varint(bytes, 0)?;
    let namespace = Namespace::from_code(code)?;
    let cid = parse_cid_bytes(&bytes[offset..])?;
    Ok((namespace, cid))
}

impl ContentHash {
    /// IPFS content hash of `cid`
    pub fn from_cid(cid: &Cid) -> Self {
        Self::with_namespace(cid, Namespace::Ipfs)
    }

    pub fn with_namespace(cid: &Cid, namespace: Namespace) -> Self {
        Self {
            bytes: encode_cid_with_namespace(cid, namespace),
        }
    }

    /// Wrap raw content hash bytes, checking that they decode.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        decode_bytes(&bytes)?;
        Ok(Self { bytes })
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix(HEX_PREFIX).unwrap_or(input);
        Self::from_bytes(hex::decode(digits)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// `0x`-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        format!("{}{}", HEX_PREFIX, hex::encode(&self.bytes))
    }

    pub fn decode(&self) -> Result<(Namespace, Cid)> {
        decode_bytes(&self.bytes)
    }

    pub fn namespace(&self) -> Result<Namespace> {
        Ok(self.decode()?.0)
    }

    pub fn cid(&self) -> Result<Cid> {
        Ok(self.decode()?.1)
    }
}

impl From<&Cid> for ContentHash {
    fn from(cid: &Cid) -> Self {
        ContentHash::from_cid(cid)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
