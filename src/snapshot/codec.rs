//! Snapshot binary format
//!
//! Layout (little-endian):
//! `[magic "WKN1"] [count(u32)] { [key_len(u32)] [key_bytes] [value_count(u32)] [i64 ...] }* [checksum(u64)]`
//!
//! The checksum is the xxhash64 of every byte before it. Entries are written
//! in key order.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::collections::HashSet;
use std::io;
use thiserror::Error;

/// File signature and format version
pub const MAGIC: &[u8; 4] = b"WKN1";

const CHECKSUM_LEN: usize = 8;
const HEADER_LEN: usize = MAGIC.len() + 4;

/// Snapshot decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("not a wkn snapshot (bad magic)")]
    BadMagic,

    #[error("unexpected end of snapshot at byte {0}")]
    Truncated(usize),

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u64, actual: u64 },

    #[error("key at byte {0} is not valid UTF-8")]
    InvalidKey(usize),

    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    #[error("{0} unexpected bytes after the last entry")]
    TrailingBytes(usize),
}

/// Serialize a table with checksum
///
/// Fails if a count or length does not fit its `u32` field.
pub fn encode<'a, I>(entries: I) -> io::Result<Bytes>
where
    I: IntoIterator<Item = (&'a String, &'a Vec<i64>)>,
{
    let mut entries: Vec<_> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut buf = BytesMut::new();
    buf.put_slice(MAGIC);
    buf.put_u32_le(length_field(entries.len(), "entry count")?);

    for (key, values) in entries {
        buf.put_u32_le(length_field(key.len(), "key length")?);
        buf.put_slice(key.as_bytes());
        buf.put_u32_le(length_field(values.len(), "array length")?);
        for value in values {
            buf.put_i64_le(*value);
        }
    }

    let checksum = xxhash_rust::xxh64::xxh64(&buf, 0);
    buf.put_u64_le(checksum);

    Ok(buf.freeze())
}

fn length_field(len: usize, what: &str) -> io::Result<u32> {
    u32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} {} does not fit in a snapshot", what, len),
        )
    })
}

/// Deserialize a table, verifying magic and checksum first
pub fn decode(data: &[u8]) -> Result<Vec<(String, Vec<i64>)>, DecodeError> {
    if !data.starts_with(MAGIC) {
        return Err(DecodeError::BadMagic);
    }
    if data.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(DecodeError::Truncated(data.len()));
    }

    let body_end = data.len() - CHECKSUM_LEN;
    let mut stored = &data[body_end..];
    let expected = stored.get_u64_le();
    let actual = xxhash_rust::xxh64::xxh64(&data[..body_end], 0);
    if expected != actual {
        return Err(DecodeError::ChecksumMismatch { expected, actual });
    }

    let mut cursor = Cursor {
        buf: &data[MAGIC.len()..body_end],
        offset: MAGIC.len(),
    };

    let count = cursor.u32()? as usize;
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for _ in 0..count {
        let key_len = cursor.u32()? as usize;
        let key_at = cursor.offset;
        let raw = cursor.take(key_len)?;
        let key = String::from_utf8(raw.to_vec()).map_err(|_| DecodeError::InvalidKey(key_at))?;

        let value_count = cursor.u32()? as usize;
        let mut raw = cursor.take(value_count.saturating_mul(8))?;
        let mut values = Vec::with_capacity(value_count);
        while raw.has_remaining() {
            values.push(raw.get_i64_le());
        }

        if !seen.insert(key.clone()) {
            return Err(DecodeError::DuplicateKey(key));
        }
        entries.push((key, values));
    }

    if cursor.buf.has_remaining() {
        return Err(DecodeError::TrailingBytes(cursor.buf.remaining()));
    }

    Ok(entries)
}

/// Bounds-checked reader that tracks the absolute byte offset for errors
struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.buf.remaining() < len {
            return Err(DecodeError::Truncated(self.offset));
        }
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        self.offset += len;
        Ok(head)
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        let mut raw = self.take(4)?;
        Ok(raw.get_u32_le())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> HashMap<String, Vec<i64>> {
        let mut table = HashMap::new();
        table.insert("b".to_string(), vec![3, 4]);
        table.insert("a".to_string(), vec![1, -2, i64::MAX]);
        table.insert("empty".to_string(), vec![]);
        table
    }

    /// Re-seal a tampered body with a fresh checksum
    fn reseal(mut body: Vec<u8>) -> Vec<u8> {
        let checksum = xxhash_rust::xxh64::xxh64(&body, 0);
        body.extend_from_slice(&checksum.to_le_bytes());
        body
    }

    #[test]
    fn test_roundtrip_sorted_by_key() {
        let table = sample();
        let bytes = encode(table.iter()).unwrap();
        let decoded = decode(&bytes).unwrap();

        let keys: Vec<&str> = decoded.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "empty"]);
        assert_eq!(decoded[0].1, vec![1, -2, i64::MAX]);
        assert_eq!(decoded[2].1, Vec::<i64>::new());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let table = sample();
        assert_eq!(encode(table.iter()).unwrap(), encode(table.iter()).unwrap());
    }

    #[test]
    fn test_empty_table() {
        let table: HashMap<String, Vec<i64>> = HashMap::new();
        let bytes = encode(table.iter()).unwrap();

        assert_eq!(bytes.len(), HEADER_LEN + CHECKSUM_LEN);
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_length_field_bounds() {
        assert_eq!(length_field(u32::MAX as usize, "key length").unwrap(), u32::MAX);

        let err = length_field(u32::MAX as usize + 1, "key length").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().starts_with("key length 4294967296"));
    }

    #[test]
    fn test_bad_magic() {
        assert_eq!(decode(b""), Err(DecodeError::BadMagic));
        assert_eq!(decode(b"\x0e\xff\x81\x04"), Err(DecodeError::BadMagic));
    }

    #[test]
    fn test_checksum_validation() {
        let table = sample();
        let mut bytes = encode(table.iter()).unwrap().to_vec();

        let len = bytes.len();
        bytes[len - 1] ^= 0xFF;

        let result = decode(&bytes);
        assert!(matches!(result, Err(DecodeError::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_truncated_file() {
        let table = sample();
        let bytes = encode(table.iter()).unwrap();

        assert!(decode(&bytes[..bytes.len() - 3]).is_err());
        assert_eq!(decode(MAGIC), Err(DecodeError::Truncated(4)));
    }

    #[test]
    fn test_count_larger_than_body() {
        let mut body = MAGIC.to_vec();
        body.extend_from_slice(&5u32.to_le_bytes());

        assert_eq!(decode(&reseal(body)), Err(DecodeError::Truncated(8)));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut body = MAGIC.to_vec();
        body.extend_from_slice(&0u32.to_le_bytes());
        body.extend_from_slice(&[1, 2]);

        assert_eq!(decode(&reseal(body)), Err(DecodeError::TrailingBytes(2)));
    }

    #[test]
    fn test_invalid_utf8_key() {
        let mut body = MAGIC.to_vec();
        body.extend_from_slice(&1u32.to_le_bytes());
        body.extend_from_slice(&1u32.to_le_bytes());
        body.push(0xFF);
        body.extend_from_slice(&0u32.to_le_bytes());

        assert_eq!(decode(&reseal(body)), Err(DecodeError::InvalidKey(12)));
    }

    #[test]
    fn test_duplicate_key() {
        let mut body = MAGIC.to_vec();
        body.extend_from_slice(&2u32.to_le_bytes());
        for _ in 0..2 {
            body.extend_from_slice(&1u32.to_le_bytes());
            body.push(b'k');
            body.extend_from_slice(&0u32.to_le_bytes());
        }

        assert_eq!(decode(&reseal(body)), Err(DecodeError::DuplicateKey("k".to_string())));
    }
}
