//! Term Module
//!
//! Defines the tagged value union exchanged with the host collaborator
//! and the helpers for constructing terms from native integers.

use malachite::Integer;

/// Abstract term exchanged across the codec boundary
///
/// Every wire tag decodes into one of these variants, and every variant
/// has exactly one wire representation on encode. Atoms have no variant
/// of their own: the decoder normalizes `nil`/`null`/`true`/`false`
/// into [`Term::Nil`] and [`Term::Bool`], and every other atom into
/// [`Term::Binary`]. The encoder never emits atoms for arbitrary text.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// The nil/undefined value
    Nil,
    /// Boolean
    Bool(bool),
    /// Integer in 0-255, carried by the single-byte wire form
    SmallInt(u8),
    /// Signed 32-bit integer
    Int32(i32),
    /// Arbitrary-precision integer: explicit sign plus a little-endian
    /// magnitude with no trailing zero bytes
    Big {
        /// True for negative values
        negative: bool,
        /// Magnitude bytes, least significant first
        magnitude: Vec<u8>,
    },
    /// IEEE 754 double, always the fixed 8-byte wire form
    Float(f64),
    /// Text or binary payload; the decoder collapses both the binary
    /// and the 16-bit string wire forms into this variant
    Binary(Vec<u8>),
    /// Ordered sequence, possibly empty
    List(Vec<Term>),
    /// Key/value pairs in insertion order
    Map(Vec<(Term, Term)>),
}

impl Term {
    /// Construct a term from a signed 64-bit integer
    ///
    /// Picks the smallest variant that represents the value exactly:
    /// `SmallInt` for 0-255, `Int32` for the rest of the 32-bit signed
    /// range, `Big` beyond that. `i64::MIN` is handled through
    /// `unsigned_abs`, so the magnitude never overflows.
    pub fn integer(value: i64) -> Self {
        if (0..=255).contains(&value) {
            Term::SmallInt(value as u8)
        } else if value >= i64::from(i32::MIN) && value <= i64::from(i32::MAX) {
            Term::Int32(value as i32)
        } else {
            Term::big(value < 0, magnitude_bytes(value.unsigned_abs()))
        }
    }

    /// Construct a term from an unsigned 64-bit integer
    ///
    /// Values above `i32::MAX` use the big form with sign 0, so an
    /// unsigned 32-bit value that does not fit `Int32` survives intact.
    pub fn unsigned(value: u64) -> Self {
        if value <= 255 {
            Term::SmallInt(value as u8)
        } else if value <= i32::MAX as u64 {
            Term::Int32(value as i32)
        } else {
            Term::big(false, magnitude_bytes(value))
        }
    }

    /// Construct a big-integer term from a sign and little-endian
    /// magnitude bytes
    ///
    /// Trailing zero bytes are stripped. A zero magnitude collapses to
    /// `SmallInt(0)` regardless of sign.
    pub fn big(negative: bool, mut magnitude: Vec<u8>) -> Self {
        while magnitude.last() == Some(&0) {
            magnitude.pop();
        }
        if magnitude.is_empty() {
            Term::SmallInt(0)
        } else {
            Term::Big { negative, magnitude }
        }
    }

    /// Construct a text term from a string slice
    pub fn text(text: &str) -> Self {
        Term::Binary(text.as_bytes().to_vec())
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Bool(value)
    }
}

impl From<u8> for Term {
    fn from(value: u8) -> Self {
        Term::SmallInt(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        if (0..=255).contains(&value) {
            Term::SmallInt(value as u8)
        } else {
            Term::Int32(value)
        }
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::text(value)
    }
}

impl From<Vec<u8>> for Term {
    fn from(value: Vec<u8>) -> Self {
        Term::Binary(value)
    }
}

/// Render a big-integer magnitude as a decimal numeral
///
/// The magnitude is little-endian and unbounded. A nonzero sign on a
/// zero magnitude renders as `0`, not `-0`.
///
/// # Arguments
/// * `negative` - True for negative values
/// * `magnitude` - Magnitude bytes, least significant first
///
/// # Returns
/// * The decimal string, `-`-prefixed when negative and nonzero
pub fn big_to_decimal(negative: bool, magnitude: &[u8]) -> String {
    let mut value = Integer::from(0u32);
    let mut multiplier = Integer::from(1u32);
    for &byte in magnitude {
        value += Integer::from(u64::from(byte)) * &multiplier;
        multiplier *= Integer::from(256u32);
    }
    if negative && value != 0u32 {
        format!("-{}", value)
    } else {
        value.to_string()
    }
}

/// Little-endian bytes of an unsigned magnitude, trailing zeros stripped
fn magnitude_bytes(mut value: u64) -> Vec<u8> {
    let mut bytes = Vec::new();
    while value > 0 {
        bytes.push((value & 0xFF) as u8);
        value >>= 8;
    }
    bytes
}
