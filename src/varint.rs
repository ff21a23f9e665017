//! Unsigned LEB128 varints, as used by multicodec and multihash fields.

use crate::error::{ContentHashError, Result};

/// Max size of a u64 varint
pub const U64_LEN: usize = 10;

/// Read a varint starting at `offset`.
///
/// Returns the decoded value and the number of bytes consumed.
pub fn read_varint(bytes: &[u8], offset: usize) -> Result<(u64, usize)> {
    let input = bytes.get(offset..).unwrap_or_default();
    let mut result: u64 = 0;

    for i in 0..U64_LEN {
        let byte = *input.get(i).ok_or(ContentHashError::TruncatedVarint)?;

        // The tenth byte only has room for the top bit of a u64
        if i == U64_LEN - 1 && byte > 1 {
            return Err(ContentHashError::VarintOverflow);
        }

        result |= u64::from(byte & 0b0111_1111) << (i * 7);

        // Last byte has the high bit cleared
        if byte & 0b1000_0000 == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(ContentHashError::VarintOverflow)
}

/// Append the varint encoding of `value` to `buf`.
pub fn write_varint_into(value: u64, buf: &mut Vec<u8>) {
    let mut n = value;
    loop {
        let byte = (n & 0b0111_1111) as u8;
        n >>= 7;
        if n == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0b1000_0000);
    }
}

/// Encode `value` as a varint.
pub fn write_varint(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(U64_LEN);
    write_varint_into(value, &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_single_byte() {
        assert_eq!(read_varint(&[0x01], 0), Ok((1, 1)));
        assert_eq!(read_varint(&[0x70], 0), Ok((0x70, 1)));
        assert_eq!(write_varint(0), vec![0x00]);
        assert_eq!(write_varint(0x7f), vec![0x7f]);
    }

    #[test]
    fn test_multi_byte() {
        // dag-json
        assert_eq!(write_varint(0x0129), vec![0xa9, 0x02]);
        // ipfs namespace
        assert_eq!(write_varint(0xe3), vec![0xe3, 0x01]);
        // blake2b-256
        assert_eq!(read_varint(&[0xa0, 0xe4, 0x02], 0), Ok((0xb220, 3)));
    }

    #[test]
    fn test_offset() {
        let bytes = [0xff, 0x01, 0x70, 0x12];
        assert_eq!(read_varint(&bytes, 0), Ok((0xff, 2)));
        assert_eq!(read_varint(&bytes, 2), Ok((0x70, 1)));
        assert_eq!(read_varint(&bytes, 3), Ok((0x12, 1)));
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            read_varint(&[0x80, 0x80, 0x80], 0),
            Err(ContentHashError::TruncatedVarint)
        );
        assert_eq!(read_varint(&[], 0), Err(ContentHashError::TruncatedVarint));
        assert_eq!(read_varint(&[0x01], 5), Err(ContentHashError::TruncatedVarint));
    }

    #[test]
    fn test_overflow() {
        let max = write_varint(u64::MAX);
        assert_eq!(max.len(), U64_LEN);
        assert_eq!(read_varint(&max, 0), Ok((u64::MAX, U64_LEN)));

        let mut too_big = vec![0xff; U64_LEN - 1];
        too_big.push(0x02);
        assert_eq!(read_varint(&too_big, 0), Err(ContentHashError::VarintOverflow));

        let too_long = vec![0x80; U64_LEN + 1];
        assert_eq!(read_varint(&too_long, 0), Err(ContentHashError::VarintOverflow));
    }

    #[quickcheck]
    fn varint_u64_identity(input: u64) -> bool {
        let encoded = write_varint(input);
        read_varint(&encoded, 0) == Ok((input, encoded.len()))
    }
}
