//! # ENS Content Hash - Rust Implementation
//!
//! Parse IPFS Content Identifiers and encode them as ENS `contenthash`
//! records, following [EIP-1577](https://eips.ethereum.org/EIPS/eip-1577).
//!
//! ## Features
//!
//! - **CIDv0 and CIDv1**: base58btc `Qm...` strings and multibase-prefixed CIDv1
//! - **Typed codec errors**: base58btc, base32 and LEB128 varints report the offending symbol
//! - **Extended multibase**: every other base via the `multibase` crate, opt-in
//! - **Content hash decoding**: recover the namespace and CID from a record
//! - **Interop**: lossless conversion to and from `cid::Cid`
//!
//! ## Quick Start
//!
//! ```
//! use ens_contenthash::{encode_content_hash, detect_cid_version, CidVersion};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cid = "QmPK1s3pNYLi9ERiq3BDxKa4XosgWwFRQUydHUtz4YgpqB";
//! assert_eq!(detect_cid_version(cid), CidVersion::V0);
//!
//! let record = encode_content_hash(cid)?;
//! assert!(record.starts_with("0xe30101701220"));
//!
//! // Empty input means "no content"
//! assert_eq!(encode_content_hash("")?, "0x");
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding
//!
//! ```
//! use ens_contenthash::{decode_content_hash, Namespace};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (namespace, cid) = decode_content_hash(
//!     "0xe30101701220ea75504603e6d9af89f960fd78c099bab1fb075d8aac195fabedfc16e61b845d",
//! )?;
//! assert_eq!(namespace, Namespace::Ipfs);
//! assert_eq!(
//!     cid.to_string(),
//!     "bafybeihkoviema7g3gxyt6la7v4mbgn2wh5qoxmkvqmv7k7n7qlomg4elu"
//! );
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod codec;
pub mod content_hash;
pub mod error;
pub mod interop;
pub mod parse;
pub mod serialize;
pub mod types;
pub mod varint;

// Re-export commonly used items
pub use base::{decode_base32, decode_base58, encode_base32, encode_base58, Multibase};
pub use content_hash::{
    decode_content_hash, encode_cid, encode_cid_with_namespace, encode_content_hash,
    encode_content_hash_with_namespace,
};
pub use error::{ContentHashError, Result};
pub use parse::{
    detect_cid_version, parse_cid, parse_cid_bytes, parse_cid_bytes_with_config,
    parse_cid_with_config,
};
pub use types::{Cid, CidVersion, ContentHash, Multihash, Namespace, ParseConfig, Version};
pub use varint::{read_varint, write_varint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() -> Result<()> {
        let input = "bafybeihkoviema7g3gxyt6la7v4mbgn2wh5qoxmkvqmv7k7n7qlomg4elu";

        assert_eq!(detect_cid_version(input), CidVersion::V1);

        let cid = parse_cid(input)?;
        let record = encode_content_hash(input)?;
        assert_eq!(record, ContentHash::from_cid(&cid).to_hex());

        let (namespace, decoded) = decode_content_hash(&record)?;
        assert_eq!(namespace, Namespace::Ipfs);
        assert_eq!(decoded, cid);
        assert_eq!(decoded.to_string(), input);

        Ok(())
    }

    #[test]
    fn test_v0_end_to_end() -> Result<()> {
        let input = "QmPK1s3pNYLi9ERiq3BDxKa4XosgWwFRQUydHUtz4YgpqB";
        let record = encode_content_hash(input)?;

        let decoded = decode_content_hash(&record)?.1;
        assert_eq!(decoded.version(), Version::V1);
        assert_eq!(decoded.codec(), codec::DAG_PB);
        assert_eq!(decoded.hash(), parse_cid(input)?.hash());

        Ok(())
    }
}
