//! Multibase text encodings.
//!
//! Base58btc (`bs58`) and base32 lower without padding (`data-encoding`) are
//! the two encodings CIDs use in practice and are always available. Every
//! other multibase prefix is delegated to the `multibase` crate when extended
//! multibase support is enabled in [`ParseConfig`].

use crate::error::{ContentHashError, Result};
use crate::types::ParseConfig;
use data_encoding::{DecodeKind, Encoding};
use data_encoding_macro::{internal_new_encoding, new_encoding};

pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// RFC4648 base32, lowercase, no padding
const BASE32_LOWER: Encoding = new_encoding! {
    symbols: "abcdefghijklmnopqrstuvwxyz234567",
    padding: None,
};

/// Build an `InvalidCharacter` from a byte offset into `input`.
fn invalid_symbol_at(input: &str, index: usize) -> ContentHashError {
    let position = input
        .get(..index)
        .map_or(index, |head| head.chars().count());
    let character = input
        .get(index..)
        .and_then(|tail| tail.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ContentHashError::InvalidCharacter {
        character,
        position,
    }
}

fn reject_non_ascii(input: &str) -> Result<()> {
    match input.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        Some((position, character)) => Err(ContentHashError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Check that every symbol is in the base58btc alphabet, without decoding.
pub fn check_base58(input: &str) -> Result<()> {
    match input
        .chars()
        .enumerate()
        .find(|(_, c)| !BASE58_ALPHABET.contains(*c))
    {
        Some((position, character)) => Err(ContentHashError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Decode a base58btc string (without multibase prefix).
pub fn decode_base58(input: &str) -> Result<Vec<u8>> {
    bs58::decode(input).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { index, .. }
        | bs58::decode::Error::NonAsciiCharacter { index } => invalid_symbol_at(input, index),
        other => ContentHashError::MalformedMultibase(other.to_string()),
    })
}

/// Encode bytes as base58btc (without multibase prefix).
pub fn encode_base58(input: &[u8]) -> String {
    bs58::encode(input).into_string()
}

/// Decode an unpadded lowercase base32 string (without multibase prefix).
pub fn decode_base32(input: &str) -> Result<Vec<u8>> {
    // Positions are reported in characters; below this point they equal bytes
    reject_non_ascii(input)?;

    BASE32_LOWER.decode(input.as_bytes()).map_err(|e| match e.kind {
        DecodeKind::Length => ContentHashError::InvalidLength(format!(
            "base32 input of {} symbols",
            input.len()
        )),
        DecodeKind::Symbol | DecodeKind::Trailing => invalid_symbol_at(input, e.position),
        _ => ContentHashError::MalformedMultibase(e.to_string()),
    })
}

/// Encode bytes as unpadded lowercase base32 (without multibase prefix).
pub fn encode_base32(input: &[u8]) -> String {
    BASE32_LOWER.encode(input)
}

/// A multibase encoding, identified by its prefix character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multibase {
    /// `b`
    Base32Lower,
    /// `z`
    Base58Btc,
    /// Any other base known to the `multibase` crate
    Other(multibase::Base),
}

impl Multibase {
    pub fn code(&self) -> char {
        match self {
            Multibase::Base32Lower => 'b',
            Multibase::Base58Btc => 'z',
            Multibase::Other(base) => base.code(),
        }
    }

    /// Resolve a prefix character.
    pub fn from_code(code: char, config: &ParseConfig) -> Result<Self> {
        match code {
            'b' => Ok(Multibase::Base32Lower),
            'z' => Ok(Multibase::Base58Btc),
            other if config.extended_multibase => multibase::Base::from_code(other)
                .map(Multibase::Other)
                .map_err(|_| ContentHashError::UnsupportedMultibase(other)),
            other => Err(ContentHashError::UnsupportedMultibase(other)),
        }
    }

    /// Upper bound on the payload size, in bytes of text, that encodes `len` bytes.
    pub fn max_encoded_len(&self, len: usize) -> usize {
        match self {
            Multibase::Base32Lower => len.saturating_mul(8).div_ceil(5),
            Multibase::Base58Btc => (len.saturating_mul(138) / 100).saturating_add(1),
            // base2 is the least dense base the multibase crate knows
            Multibase::Other(_) => len.saturating_mul(8),
        }
    }

    /// Decode a payload that has already had its prefix removed.
    pub fn decode(&self, payload: &str) -> Result<Vec<u8>> {
        match self {
            Multibase::Base32Lower => decode_base32(payload),
            Multibase::Base58Btc => decode_base58(payload),
            Multibase::Other(base) => base
                .decode(payload)
                .map_err(|e| ContentHashError::MalformedMultibase(format!("{:?}: {}", base, e))),
        }
    }

    /// Encode bytes, including the prefix character.
    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            Multibase::Base32Lower => format!("b{}", encode_base32(data)),
            Multibase::Base58Btc => format!("z{}", encode_base58(data)),
            Multibase::Other(base) => multibase::encode(*base, data),
        }
    }
}

/// Read the multibase prefix of `input` and decode the rest.
///
/// Payloads too long to hold a CID within `config.max_cid_len()` are
/// rejected before decoding.
pub fn decode_multibase(input: &str, config: &ParseConfig) -> Result<(Multibase, Vec<u8>)> {
    let mut chars = input.chars();
    let code = chars
        .next()
        .ok_or_else(|| ContentHashError::InvalidLength("empty multibase string".to_string()))?;
    let base = Multibase::from_code(code, config)?;
    let payload = chars.as_str();

    let limit = base.max_encoded_len(config.max_cid_len());
    if payload.len() > limit {
        return Err(ContentHashError::InvalidLength(format!(
            "multibase payload of {} bytes exceeds {}",
            payload.len(),
            limit
        )));
    }

    let data = base.decode(payload)?;
    Ok((base, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_base58_leading_zeros() {
        assert_eq!(decode_base58("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_base58("1").unwrap(), vec![0]);
        assert_eq!(decode_base58("11").unwrap(), vec![0, 0]);
        assert_eq!(decode_base58("2").unwrap(), vec![1]);
        assert_eq!(decode_base58("z").unwrap(), vec![57]);
        assert_eq!(decode_base58("21").unwrap(), vec![58]);
        assert_eq!(encode_base58(&[0, 0, 58]), "1121");
    }

    #[test]
    fn test_base58_known_vector() {
        assert_eq!(decode_base58("StV1DL6CwTryKyV").unwrap(), b"hello world");
        assert_eq!(encode_base58(b"hello world"), "StV1DL6CwTryKyV");
    }

    #[test]
    fn test_base58_rejects_ambiguous_symbols() {
        for (input, bad) in [("Qm0", '0'), ("QmO", 'O'), ("QmI", 'I'), ("Qml", 'l')] {
            assert_eq!(
                decode_base58(input),
                Err(ContentHashError::InvalidCharacter {
                    character: bad,
                    position: 2
                })
            );
        }
        assert!(matches!(
            decode_base58("Qmé"),
            Err(ContentHashError::InvalidCharacter { character: 'é', .. })
        ));
    }

    #[test]
    fn test_base32_rfc4648_vectors() {
        // RFC4648 section 10, lowercased and unpadded
        let vectors: [(&str, &[u8]); 7] = [
            ("", b""),
            ("my", b"f"),
            ("mzxq", b"fo"),
            ("mzxw6", b"foo"),
            ("mzxw6yq", b"foob"),
            ("mzxw6ytb", b"fooba"),
            ("mzxw6ytboi", b"foobar"),
        ];
        for (encoded, decoded) in vectors {
            assert_eq!(decode_base32(encoded).unwrap(), decoded);
            assert_eq!(encode_base32(decoded), encoded);
        }
    }

    #[test]
    fn test_base32_rejects_malformed() {
        assert!(matches!(
            decode_base32("mzxw6y"),
            Err(ContentHashError::InvalidLength(_))
        ));
        assert!(matches!(decode_base32("m"), Err(ContentHashError::InvalidLength(_))));
        assert_eq!(
            decode_base32("MZXW6YTB"),
            Err(ContentHashError::InvalidCharacter {
                character: 'M',
                position: 0
            })
        );
        assert_eq!(
            decode_base32("mzxw6yt1"),
            Err(ContentHashError::InvalidCharacter {
                character: '1',
                position: 7
            })
        );
        assert!(matches!(
            decode_base32("my======"),
            Err(ContentHashError::InvalidCharacter { character: '=', .. })
        ));
    }

    #[test]
    fn test_base32_non_ascii_is_a_character_error() {
        // 5 characters but 6 bytes: a byte-length check would call this a bad length
        assert_eq!(
            decode_base32("mzxwé"),
            Err(ContentHashError::InvalidCharacter {
                character: 'é',
                position: 4
            })
        );
    }

    #[test]
    fn test_base32_rejects_nonzero_trailing_bits() {
        assert_eq!(
            decode_base32("mz"),
            Err(ContentHashError::InvalidCharacter {
                character: 'z',
                position: 1
            })
        );
    }

    #[test]
    fn test_check_base58() {
        assert_eq!(check_base58("QmPK1s3p"), Ok(()));
        assert_eq!(
            check_base58("QmPK0s3p"),
            Err(ContentHashError::InvalidCharacter {
                character: '0',
                position: 4
            })
        );
        assert!(matches!(
            check_base58("Qmé"),
            Err(ContentHashError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_oversized_payload_rejected_before_decoding() {
        let config = ParseConfig::default();
        let limit = Multibase::Base58Btc.max_encoded_len(config.max_cid_len());
        let long = format!("z{}", "2".repeat(limit + 1));
        assert!(matches!(
            decode_multibase(&long, &config),
            Err(ContentHashError::InvalidLength(_))
        ));
        let long = format!("b{}", "a".repeat(100_000));
        assert!(matches!(
            decode_multibase(&long, &config),
            Err(ContentHashError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_multibase_prefixes() {
        let config = ParseConfig::default();
        assert_eq!(
            decode_multibase("bmzxw6", &config).unwrap(),
            (Multibase::Base32Lower, b"foo".to_vec())
        );
        assert_eq!(
            decode_multibase("zStV1DL6CwTryKyV", &config).unwrap(),
            (Multibase::Base58Btc, b"hello world".to_vec())
        );
        assert_eq!(
            decode_multibase("f666f6f", &config),
            Err(ContentHashError::UnsupportedMultibase('f'))
        );
        assert!(matches!(
            decode_multibase("", &config),
            Err(ContentHashError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_extended_multibase() {
        let config = ParseConfig::new().with_extended_multibase();
        assert_eq!(
            decode_multibase("f666f6f", &config).unwrap(),
            (Multibase::Other(multibase::Base::Base16Lower), b"foo".to_vec())
        );
        assert_eq!(
            decode_multibase("BMZXW6", &config).unwrap().1,
            b"foo".to_vec()
        );
        assert_eq!(
            decode_multibase("!abc", &config),
            Err(ContentHashError::UnsupportedMultibase('!'))
        );
        assert!(matches!(
            decode_multibase("fxyz", &config),
            Err(ContentHashError::MalformedMultibase(_))
        ));
    }

    #[test]
    fn test_codecs_match_multibase_crate() {
        let data = b"\x00\x01\x70\x12\x20 interop";
        assert_eq!(
            Multibase::Base32Lower.encode(data),
            multibase::encode(multibase::Base::Base32Lower, data)
        );
        assert_eq!(
            Multibase::Base58Btc.encode(data),
            multibase::encode(multibase::Base::Base58Btc, data)
        );
    }

    #[quickcheck]
    fn base58_identity(input: Vec<u8>) -> bool {
        decode_base58(&encode_base58(&input)).as_deref() == Ok(input.as_slice())
    }

    #[quickcheck]
    fn base32_identity(input: Vec<u8>) -> bool {
        decode_base32(&encode_base32(&input)).as_deref() == Ok(input.as_slice())
    }
}
