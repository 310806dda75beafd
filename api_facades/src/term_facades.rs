//! Term Codec Facades
//!
//! High-level encode/decode entry points. Each call is stateless:
//! buffers and terms are created per call and ownership of the result
//! transfers to the caller.

use entities_term::Term;
use infrastructure_codec::{DecodeError, Decoder, EncodeError, Encoder, TagStats};

/// Encode one term into an owned external-format buffer
///
/// # Arguments
/// * `term` - The term to serialize
///
/// # Returns
/// * `Ok(Vec<u8>)` - The encoded bytes, version magic first
/// * `Err(EncodeError)` - Allocation failure, oversized sequence, or
///   exhausted recursion budget
pub fn term_to_binary(term: &Term) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::new()?;
    encoder.encode(term)?;
    Ok(encoder.into_output())
}

/// Decode one term from an external-format buffer
///
/// An empty buffer is rejected before any parsing begins.
///
/// # Arguments
/// * `data` - The encoded bytes, version magic first
///
/// # Returns
/// * `Ok(Term)` - The decoded term
/// * `Err(DecodeError)` - Any malformed-input condition
pub fn binary_to_term(data: &[u8]) -> Result<Term, DecodeError> {
    Decoder::new(data)?.decode()
}

/// Decode one term, recording per-tag occurrence counts
///
/// The histogram is caller-owned and accumulates across calls; query
/// it as a mapping from tag byte to occurrence count.
pub fn binary_to_term_with_stats(
    data: &[u8],
    stats: &mut TagStats,
) -> Result<Term, DecodeError> {
    Decoder::with_stats(data, stats)?.decode()
}
