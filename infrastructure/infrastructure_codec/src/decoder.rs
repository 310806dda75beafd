//! Decoder Module
//!
//! Consumes an immutable byte buffer and produces one term. Every
//! malformed-input condition is detected and reported without reading
//! past the buffer end, and any failure poisons the whole decode: the
//! error propagates immediately and no partial term is returned.

use entities_term::{big_to_decimal, Term};

use crate::common::DecodeError;
use crate::constants::*;
use crate::reader::Reader;
use crate::stats::TagStats;

/// Largest big-integer magnitude the decoder accepts, in bytes
const MAX_BIG_BYTES: usize = 8;

/// External term format decoder
///
/// Construction performs the first read: an empty buffer or a wrong
/// leading version byte fails before any term parsing begins.
#[derive(Debug)]
pub struct Decoder<'a, 'b> {
    reader: Reader<'a>,
    stats: Option<&'b mut TagStats>,
}

impl<'a, 'b> Decoder<'a, 'b> {
    /// Create a decoder over a buffer, without tag statistics
    ///
    /// # Arguments
    /// * `data` - The encoded bytes, starting with the version magic
    ///
    /// # Returns
    /// * `Ok(Decoder)` - Version byte verified, ready to decode
    /// * `Err(DecodeError)` - Empty buffer or wrong version byte
    pub fn new(data: &'a [u8]) -> Result<Self, DecodeError> {
        Self::build(data, None)
    }

    /// Create a decoder that records per-tag occurrence counts into a
    /// caller-owned [`TagStats`]
    pub fn with_stats(
        data: &'a [u8],
        stats: &'b mut TagStats,
    ) -> Result<Self, DecodeError> {
        Self::build(data, Some(stats))
    }

    fn build(
        data: &'a [u8],
        stats: Option<&'b mut TagStats>,
    ) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(data);
        let version = reader.read_u8()?;
        if version != FORMAT_VERSION {
            return Err(DecodeError::InvalidVersion(version));
        }
        Ok(Self { reader, stats })
    }

    /// Decode one term from the buffer
    ///
    /// Reads one tag byte and dispatches on it. Bytes after the decoded
    /// term are left unread.
    pub fn decode(&mut self) -> Result<Term, DecodeError> {
        let tag = self.reader.read_u8()?;
        if let Some(stats) = self.stats.as_mut() {
            stats.record(tag);
        }

        match tag {
            ERL_SMALL_INTEGER_EXT => Ok(Term::SmallInt(self.reader.read_u8()?)),
            ERL_INTEGER_EXT => Ok(Term::Int32(self.reader.read_i32()?)),
            NEW_FLOAT_EXT => Ok(Term::Float(self.reader.read_f64()?)),
            ERL_ATOM_EXT => {
                let len = usize::from(self.reader.read_u16()?);
                let name = self.reader.read_bytes(len)?;
                Ok(normalize_atom(name))
            }
            ERL_SMALL_ATOM_EXT => {
                let len = usize::from(self.reader.read_u8()?);
                let name = self.reader.read_bytes(len)?;
                Ok(normalize_atom(name))
            }
            ERL_BINARY_EXT => {
                let len = self.reader.read_u32()? as usize;
                Ok(Term::Binary(self.reader.read_bytes(len)?.to_vec()))
            }
            ERL_STRING_EXT => {
                let len = usize::from(self.reader.read_u16()?);
                Ok(Term::Binary(self.reader.read_bytes(len)?.to_vec()))
            }
            ERL_NIL_EXT => Ok(Term::Nil),
            ERL_LIST_EXT => self.decode_list(),
            ERL_MAP_EXT => self.decode_map(),
            ERL_SMALL_BIG_EXT => {
                let arity = usize::from(self.reader.read_u8()?);
                self.decode_big(arity)
            }
            ERL_LARGE_BIG_EXT => {
                let arity = self.reader.read_u32()? as usize;
                self.decode_big(arity)
            }
            other => Err(DecodeError::InvalidTag(other)),
        }
    }

    fn decode_list(&mut self) -> Result<Term, DecodeError> {
        let length = self.reader.read_u32()? as usize;
        let mut elements = Vec::with_capacity(length.min(self.reader.remaining()));
        for _ in 0..length {
            elements.push(self.decode()?);
        }
        // A proper list carries its tail explicitly
        if self.reader.read_u8()? != ERL_NIL_EXT {
            return Err(DecodeError::UnterminatedList);
        }
        Ok(Term::List(elements))
    }

    fn decode_map(&mut self) -> Result<Term, DecodeError> {
        let arity = self.reader.read_u32()? as usize;
        let mut pairs = Vec::with_capacity(arity.min(self.reader.remaining()));
        for _ in 0..arity {
            let key = self.decode()?;
            let value = self.decode()?;
            pairs.push((key, value));
        }
        Ok(Term::Map(pairs))
    }

    /// Decode a big-integer body after its arity has been read
    ///
    /// The magnitude is bounded to [`MAX_BIG_BYTES`]; a larger one is a
    /// hard failure, not a truncation. Magnitudes of up to 4 bytes
    /// return as native 32-bit integers when they fit, or keep the big
    /// form for unsigned values past `i32::MAX`. Larger magnitudes
    /// return as decimal text.
    fn decode_big(&mut self, arity: usize) -> Result<Term, DecodeError> {
        if arity > MAX_BIG_BYTES {
            return Err(DecodeError::BignumTooLarge(arity));
        }
        let sign = self.reader.read_u8()?;
        let bytes = self.reader.read_bytes(arity)?;

        let mut value: u64 = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            value |= u64::from(byte) << (8 * i);
        }

        if arity <= 4 {
            if sign != 0 {
                if value <= u64::from(i32::MIN.unsigned_abs()) {
                    // Magnitude of at most 2^31, so the negation fits i32
                    Ok(Term::Int32(-(value as i64) as i32))
                } else {
                    Ok(Term::big(true, bytes.to_vec()))
                }
            } else if value <= i32::MAX as u64 {
                Ok(Term::Int32(value as i32))
            } else {
                // Unsigned value with bit 31 set; keep it exact
                Ok(Term::big(false, bytes.to_vec()))
            }
        } else {
            let text = big_to_decimal(sign != 0, bytes);
            Ok(Term::Binary(text.into_bytes()))
        }
    }
}

/// Normalize a decoded atom into a term
///
/// `nil` and `null` collapse to nil, `true`/`false` to booleans, and
/// every other atom becomes text.
fn normalize_atom(name: &[u8]) -> Term {
    match name {
        b"nil" | b"null" => Term::Nil,
        b"true" => Term::Bool(true),
        b"false" => Term::Bool(false),
        _ => Term::Binary(name.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &[u8]) -> Result<Term, DecodeError> {
        Decoder::new(data)?.decode()
    }

    #[test]
    fn test_empty_buffer_rejected() {
        assert!(matches!(
            Decoder::new(&[]),
            Err(DecodeError::BufferTooShort)
        ));
    }

    #[test]
    fn test_version_gate() {
        assert!(matches!(
            Decoder::new(&[130, 97, 1]),
            Err(DecodeError::InvalidVersion(130))
        ));
        assert!(matches!(
            Decoder::new(&[0, 106]),
            Err(DecodeError::InvalidVersion(0))
        ));
    }

    #[test]
    fn test_decode_small_integer() {
        assert_eq!(decode(&[131, 97, 42]), Ok(Term::SmallInt(42)));
        assert_eq!(decode(&[131, 97, 255]), Ok(Term::SmallInt(255)));
    }

    #[test]
    fn test_decode_integer() {
        assert_eq!(decode(&[131, 98, 0, 0, 1, 0]), Ok(Term::Int32(256)));
        assert_eq!(
            decode(&[131, 98, 0xFF, 0xFF, 0xFF, 0xD6]),
            Ok(Term::Int32(-42))
        );
    }

    #[test]
    fn test_decode_new_float() {
        let mut data = vec![131, 70];
        data.extend_from_slice(&2.5f64.to_be_bytes());
        assert_eq!(decode(&data), Ok(Term::Float(2.5)));
    }

    #[test]
    fn test_decode_nil_tag() {
        assert_eq!(decode(&[131, 106]), Ok(Term::Nil));
    }

    #[test]
    fn test_decode_binary() {
        assert_eq!(
            decode(&[131, 109, 0, 0, 0, 3, b'a', b'b', b'c']),
            Ok(Term::Binary(b"abc".to_vec()))
        );
    }

    #[test]
    fn test_decode_string_collapses_to_binary() {
        assert_eq!(
            decode(&[131, 107, 0, 2, b'h', b'i']),
            Ok(Term::Binary(b"hi".to_vec()))
        );
    }

    #[test]
    fn test_atom_normalization() {
        assert_eq!(decode(&[131, 115, 3, b'n', b'i', b'l']), Ok(Term::Nil));
        assert_eq!(
            decode(&[131, 115, 4, b'n', b'u', b'l', b'l']),
            Ok(Term::Nil)
        );
        assert_eq!(
            decode(&[131, 115, 4, b't', b'r', b'u', b'e']),
            Ok(Term::Bool(true))
        );
        assert_eq!(
            decode(&[131, 115, 5, b'f', b'a', b'l', b's', b'e']),
            Ok(Term::Bool(false))
        );
        assert_eq!(
            decode(&[131, 115, 5, b'o', b't', b'h', b'e', b'r']),
            Ok(Term::Binary(b"other".to_vec()))
        );
    }

    #[test]
    fn test_two_byte_atom_normalizes_too() {
        assert_eq!(
            decode(&[131, 100, 0, 4, b't', b'r', b'u', b'e']),
            Ok(Term::Bool(true))
        );
        assert_eq!(
            decode(&[131, 100, 0, 2, b'o', b'k']),
            Ok(Term::Binary(b"ok".to_vec()))
        );
    }

    #[test]
    fn test_decode_list() {
        let data = [131, 108, 0, 0, 0, 2, 97, 1, 97, 2, 106];
        assert_eq!(
            decode(&data),
            Ok(Term::List(vec![Term::SmallInt(1), Term::SmallInt(2)]))
        );
    }

    #[test]
    fn test_list_missing_nil_tail() {
        // Trailing byte is a small-integer tag, not nil
        let data = [131, 108, 0, 0, 0, 1, 97, 1, 97];
        assert_eq!(decode(&data), Err(DecodeError::UnterminatedList));
    }

    #[test]
    fn test_zero_length_list_still_needs_tail() {
        assert_eq!(
            decode(&[131, 108, 0, 0, 0, 0, 106]),
            Ok(Term::List(vec![]))
        );
        assert_eq!(
            decode(&[131, 108, 0, 0, 0, 0]),
            Err(DecodeError::BufferTooShort)
        );
    }

    #[test]
    fn test_decode_map_preserves_order() {
        let data = [
            131, 116, 0, 0, 0, 2, //
            115, 1, b'b', 97, 1, //
            115, 1, b'a', 97, 2,
        ];
        assert_eq!(
            decode(&data),
            Ok(Term::Map(vec![
                (Term::Binary(b"b".to_vec()), Term::SmallInt(1)),
                (Term::Binary(b"a".to_vec()), Term::SmallInt(2)),
            ]))
        );
    }

    #[test]
    fn test_small_big_positive() {
        assert_eq!(decode(&[131, 110, 1, 0, 42]), Ok(Term::Int32(42)));
        assert_eq!(
            decode(&[131, 110, 4, 0, 4, 3, 2, 1]),
            Ok(Term::Int32(16_909_060))
        );
    }

    #[test]
    fn test_small_big_negative() {
        assert_eq!(decode(&[131, 110, 1, 1, 42]), Ok(Term::Int32(-42)));
    }

    #[test]
    fn test_small_big_i32_min_exact() {
        // Magnitude 2^31 with the sign byte set
        assert_eq!(
            decode(&[131, 110, 4, 1, 0, 0, 0, 0x80]),
            Ok(Term::Int32(i32::MIN))
        );
    }

    #[test]
    fn test_small_big_unsigned_past_i32() {
        assert_eq!(
            decode(&[131, 110, 4, 0, 0xFF, 0xFF, 0xFF, 0xFF]),
            Ok(Term::Big {
                negative: false,
                magnitude: vec![0xFF, 0xFF, 0xFF, 0xFF],
            })
        );
    }

    #[test]
    fn test_small_big_negative_past_i32_min_keeps_big_form() {
        // Magnitude 2^31 + 1, negated, does not fit i32
        assert_eq!(
            decode(&[131, 110, 4, 1, 1, 0, 0, 0x80]),
            Ok(Term::Big {
                negative: true,
                magnitude: vec![1, 0, 0, 0x80],
            })
        );
    }

    #[test]
    fn test_big_five_to_eight_bytes_becomes_text() {
        assert_eq!(
            decode(&[131, 110, 5, 0, 0, 0, 0, 0, 1]),
            Ok(Term::Binary(b"4294967296".to_vec()))
        );
        assert_eq!(
            decode(&[131, 110, 8, 1, 0, 0, 0, 0, 0, 0, 0, 0x80]),
            Ok(Term::Binary(b"-9223372036854775808".to_vec()))
        );
    }

    #[test]
    fn test_big_too_large() {
        let data = [131, 110, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(decode(&data), Err(DecodeError::BignumTooLarge(9)));
    }

    #[test]
    fn test_large_big_form() {
        assert_eq!(
            decode(&[131, 111, 0, 0, 0, 1, 0, 42]),
            Ok(Term::Int32(42))
        );
        let data = [131, 111, 0, 0, 0, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(decode(&data), Err(DecodeError::BignumTooLarge(9)));
    }

    #[test]
    fn test_big_zero_magnitude() {
        assert_eq!(decode(&[131, 110, 0, 0]), Ok(Term::Int32(0)));
    }

    #[test]
    fn test_invalid_tag() {
        assert_eq!(decode(&[131, 113, 0]), Err(DecodeError::InvalidTag(113)));
        assert_eq!(decode(&[131, 0]), Err(DecodeError::InvalidTag(0)));
    }

    #[test]
    fn test_truncated_fields() {
        assert_eq!(decode(&[131, 97]), Err(DecodeError::BufferTooShort));
        assert_eq!(decode(&[131, 98, 0, 0]), Err(DecodeError::BufferTooShort));
        assert_eq!(
            decode(&[131, 109, 0, 0, 0, 10, 1, 2]),
            Err(DecodeError::BufferTooShort)
        );
        assert_eq!(
            decode(&[131, 110, 4, 0, 1, 2]),
            Err(DecodeError::BufferTooShort)
        );
    }

    #[test]
    fn test_stats_record_every_dispatch() {
        let mut stats = TagStats::new();
        let data = [131, 108, 0, 0, 0, 2, 97, 1, 106, 106];
        let term = Decoder::with_stats(&data, &mut stats)
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(term, Term::List(vec![Term::SmallInt(1), Term::Nil]));
        // One list dispatch, one small integer, one nested nil; the
        // list tail byte is not a dispatch
        assert_eq!(stats.count(108), 1);
        assert_eq!(stats.count(97), 1);
        assert_eq!(stats.count(106), 1);
    }

    #[test]
    fn test_stats_not_required() {
        let mut decoder = Decoder::new(&[131, 97, 5]).unwrap();
        assert_eq!(decoder.decode(), Ok(Term::SmallInt(5)));
    }
}
