//! Sequential big-endian reader over an in-memory byte slice.
//!
//! Every read either consumes exactly the width of its type or fails with
//! [`QuillError::TruncatedInput`] and leaves the position unchanged. There is no
//! seeking; decoders walk records strictly front to back.

use crate::error::{QuillError, Result};
use crate::model::{FixedId, FIXED_ID_LEN};
use byteorder::{BigEndian, ByteOrder};

pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < n {
            return Err(QuillError::TruncatedInput {
                offset: self.pos,
                needed: n,
                available,
            });
        }
        let data = self.data;
        let bytes = &data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_i16_be(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    pub fn read_i32_be(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn read_i64_be(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn read_f32_be(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.take(4)?))
    }

    /// One byte, any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take(1)?[0] != 0)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// An `i16` byte count followed by that many bytes of UTF-8 text.
    pub fn read_length_prefixed_string(&mut self) -> Result<String> {
        let offset = self.pos;
        let length = self.read_i16_be()?;
        if length < 0 {
            self.pos = offset;
            return Err(QuillError::NegativeLength { offset, length });
        }
        let text_offset = self.pos;
        let bytes = match self.take(length as usize) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.pos = offset;
                return Err(e);
            }
        };
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|source| QuillError::InvalidText {
                offset: text_offset,
                source,
            })
    }

    /// An identifier pair: a legacy `i16` length prefix, then exactly 36 bytes.
    ///
    /// The prefix is not trusted; 36 bytes are read whatever it says.
    pub fn read_framed_id(&mut self) -> Result<FixedId> {
        let offset = self.pos;
        let declared = self.read_i16_be()?;
        let bytes = match self.take(FIXED_ID_LEN) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.pos = offset;
                return Err(e);
            }
        };
        if declared as usize != FIXED_ID_LEN {
            log::trace!(
                "id at byte {} declares length {}, reading {} bytes",
                offset,
                declared,
                FIXED_ID_LEN
            );
        }
        let mut raw = [0u8; FIXED_ID_LEN];
        raw.copy_from_slice(bytes);
        Ok(FixedId::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_big_endian_primitives() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x0102_0304i32.to_be_bytes());
        data.extend_from_slice(&(-2i16).to_be_bytes());
        data.extend_from_slice(&1_000_000_000_000i64.to_be_bytes());
        data.extend_from_slice(&1.5f32.to_be_bytes());
        data.push(7);

        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_i32_be().unwrap(), 0x0102_0304);
        assert_eq!(cursor.read_i16_be().unwrap(), -2);
        assert_eq!(cursor.read_i64_be().unwrap(), 1_000_000_000_000);
        assert_eq!(cursor.read_f32_be().unwrap(), 1.5);
        assert!(cursor.read_bool().unwrap());
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_short_read_is_truncated_and_does_not_advance() {
        let data = [0u8, 0, 1];
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_i32_be().unwrap_err();
        assert!(matches!(
            err,
            QuillError::TruncatedInput {
                offset: 0,
                needed: 4,
                available: 3
            }
        ));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_i16_be().unwrap(), 0);
    }

    #[test]
    fn test_zero_bool() {
        let mut cursor = ByteCursor::new(&[0]);
        assert!(!cursor.read_bool().unwrap());
    }

    #[test]
    fn test_length_prefixed_string() {
        let mut data = vec![0, 4];
        data.extend_from_slice(b"Test");
        data.push(0xff);
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_length_prefixed_string().unwrap(), "Test");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_empty_string() {
        let mut cursor = ByteCursor::new(&[0, 0]);
        assert_eq!(cursor.read_length_prefixed_string().unwrap(), "");
    }

    #[test]
    fn test_string_shorter_than_prefix_is_truncated() {
        let data = [0u8, 5, b'a', b'b'];
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_length_prefixed_string().unwrap_err();
        assert!(matches!(
            err,
            QuillError::TruncatedInput {
                offset: 2,
                needed: 5,
                available: 2
            }
        ));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_negative_string_length() {
        let data = (-1i16).to_be_bytes();
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_length_prefixed_string().unwrap_err();
        assert!(matches!(
            err,
            QuillError::NegativeLength {
                offset: 0,
                length: -1
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let data = [0u8, 2, 0xc3, 0x28];
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_length_prefixed_string().unwrap_err();
        assert!(matches!(err, QuillError::InvalidText { offset: 2, .. }));
    }

    #[test]
    fn test_framed_id_ignores_declared_length() {
        let mut data = vec![0, 0];
        data.extend_from_slice(&[b'A'; 36]);
        data.extend_from_slice(&[0x7f, 0xff]);
        data.extend_from_slice(&[b'B'; 36]);

        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_framed_id().unwrap().to_string(), "A".repeat(36));
        assert_eq!(cursor.read_framed_id().unwrap().to_string(), "B".repeat(36));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_framed_id_needs_all_36_bytes() {
        let mut data = vec![0, 36];
        data.extend_from_slice(&[b'A'; 35]);
        let mut cursor = ByteCursor::new(&data);
        assert!(matches!(
            cursor.read_framed_id().unwrap_err(),
            QuillError::TruncatedInput { needed: 36, .. }
        ));
    }
}
