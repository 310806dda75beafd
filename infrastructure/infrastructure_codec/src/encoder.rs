//! Encoder Module
//!
//! Consumes one term and produces an owned byte buffer containing the
//! encoded form, version byte first. Nesting is bounded by a
//! recursion-depth budget; any failure aborts the whole encode and
//! leaves the partial buffer meaningless.

use entities_term::Term;

use crate::common::EncodeError;
use crate::constants::*;
use crate::output::OutputBuffer;

/// Default recursion-depth budget for one encode call
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// External term format encoder
///
/// Construction allocates the output buffer and appends the version
/// byte; both can fail with [`EncodeError::AllocationFailed`].
#[derive(Debug)]
pub struct Encoder {
    out: OutputBuffer,
}

impl Encoder {
    /// Create an encoder with the version byte already written
    pub fn new() -> Result<Self, EncodeError> {
        let mut out = OutputBuffer::new()?;
        out.append(&[FORMAT_VERSION])?;
        Ok(Self { out })
    }

    /// Encode one term with the default depth budget
    pub fn encode(&mut self, term: &Term) -> Result<(), EncodeError> {
        self.encode_with_depth(term, DEFAULT_RECURSION_LIMIT)
    }

    /// Encode one term, decrementing `depth` on every recursive call
    ///
    /// # Arguments
    /// * `term` - The term to serialize
    /// * `depth` - Remaining nesting budget; zero fails with `TooDeep`
    pub fn encode_with_depth(
        &mut self,
        term: &Term,
        depth: usize,
    ) -> Result<(), EncodeError> {
        if depth == 0 {
            return Err(EncodeError::TooDeep);
        }

        match term {
            Term::Nil => self.append_small_atom(b"nil"),
            Term::Bool(true) => self.append_small_atom(b"true"),
            Term::Bool(false) => self.append_small_atom(b"false"),
            Term::SmallInt(value) => self.append_small_integer(*value),
            Term::Int32(value) => {
                if (0..=255).contains(value) {
                    self.append_small_integer(*value as u8)
                } else {
                    self.append_integer(*value)
                }
            }
            Term::Big { negative, magnitude } => {
                self.append_big(*negative, magnitude)
            }
            Term::Float(value) => self.append_double(*value),
            Term::Binary(data) => self.append_binary(data),
            Term::List(elements) => {
                if elements.is_empty() {
                    return self.out.append(&[ERL_NIL_EXT]);
                }
                let length = sequence_length(elements.len())
                    .ok_or(EncodeError::TooLong)?;
                self.append_header(ERL_LIST_EXT, length)?;
                for element in elements {
                    self.encode_with_depth(element, depth - 1)?;
                }
                self.out.append(&[ERL_NIL_EXT])
            }
            Term::Map(pairs) => {
                let arity = sequence_length(pairs.len())
                    .ok_or(EncodeError::TooManyEntries)?;
                self.append_header(ERL_MAP_EXT, arity)?;
                for (key, value) in pairs {
                    self.encode_with_depth(key, depth - 1)?;
                    self.encode_with_depth(value, depth - 1)?;
                }
                Ok(())
            }
        }
    }

    /// The written bytes, version byte included
    pub fn output(&self) -> &[u8] {
        self.out.as_slice()
    }

    /// Consume the encoder, transferring ownership of the output
    pub fn into_output(self) -> Vec<u8> {
        self.out.into_bytes()
    }

    fn append_small_atom(&mut self, name: &[u8]) -> Result<(), EncodeError> {
        self.out.append(&[ERL_SMALL_ATOM_EXT, name.len() as u8])?;
        self.out.append(name)
    }

    fn append_small_integer(&mut self, value: u8) -> Result<(), EncodeError> {
        self.out.append(&[ERL_SMALL_INTEGER_EXT, value])
    }

    fn append_integer(&mut self, value: i32) -> Result<(), EncodeError> {
        self.out.append(&[ERL_INTEGER_EXT])?;
        self.out.append(&value.to_be_bytes())
    }

    fn append_double(&mut self, value: f64) -> Result<(), EncodeError> {
        self.out.append(&[NEW_FLOAT_EXT])?;
        self.out.append(&value.to_be_bytes())
    }

    fn append_binary(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        let length = u32::try_from(data.len()).map_err(|_| EncodeError::TooLong)?;
        self.out.append(&[ERL_BINARY_EXT])?;
        self.out.append(&length.to_be_bytes())?;
        self.out.append(data)
    }

    /// Append a big integer, choosing the small or large form by arity
    fn append_big(
        &mut self,
        negative: bool,
        magnitude: &[u8],
    ) -> Result<(), EncodeError> {
        // Constructors keep magnitudes trimmed; re-trim in case the
        // variant was built directly
        let mut arity = magnitude.len();
        while arity > 0 && magnitude[arity - 1] == 0 {
            arity -= 1;
        }
        let sign: u8 = if negative && arity > 0 { 1 } else { 0 };
        if arity <= 255 {
            self.out.append(&[ERL_SMALL_BIG_EXT, arity as u8, sign])?;
        } else {
            let wide = u32::try_from(arity).map_err(|_| EncodeError::TooLong)?;
            self.out.append(&[ERL_LARGE_BIG_EXT])?;
            self.out.append(&wide.to_be_bytes())?;
            self.out.append(&[sign])?;
        }
        self.out.append(&magnitude[..arity])
    }

    fn append_header(&mut self, tag: u8, length: u32) -> Result<(), EncodeError> {
        self.out.append(&[tag])?;
        self.out.append(&length.to_be_bytes())
    }
}

/// Map a sequence length onto the 4-byte wire field
///
/// The field's maximum value is reserved, so exactly `2^32 - 1`
/// elements (and anything larger) is rejected.
fn sequence_length(len: usize) -> Option<u32> {
    let len = u32::try_from(len).ok()?;
    if len == u32::MAX {
        None
    } else {
        Some(len)
    }
}
