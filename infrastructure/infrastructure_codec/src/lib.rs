//! Infrastructure Layer: External Term Format Codec
//!
//! Provides external term format (ETF) encoding and decoding for the
//! abstract term model.
//!
//! ## Overview
//!
//! The `infrastructure_codec` crate is the infrastructure layer of the
//! external term format codec. The decoder consumes an immutable byte
//! buffer and produces one [`Term`](entities_term::Term); the encoder
//! consumes one term and produces an owned byte buffer. The two are
//! independent and stateless between calls, sharing only the wire
//! format constants.
//!
//! Every buffer begins with the version magic byte (131). All
//! multi-byte length and integer fields are big-endian, except
//! big-integer magnitude bytes, which are little-endian.
//!
//! ## Modules
//!
//! - **[`constants`](constants/index.html)**: Tag byte values and the
//!   format version
//! - **[`reader`](reader/index.html)**: Bounds-safe buffer reads
//! - **[`decoder`](decoder/index.html)**: Tag dispatch and term decoding
//! - **[`output`](output/index.html)**: Growable output buffer
//! - **[`encoder`](encoder/index.html)**: Term encoding with a
//!   recursion-depth budget
//! - **[`stats`](stats/index.html)**: Optional per-tag occurrence
//!   counters
//!
//! ## Architecture
//!
//! Decode failures poison the whole decode: every error propagates
//! immediately through `Result`, no partial term is ever returned, and
//! no read ever passes the end of the buffer. Encode failures abort the
//! current encode; partial buffer contents are not meaningful after an
//! error.
//!
//! ## See Also
//!
//! - `entities_term`: the term model this crate serializes
//! - `api_facades`: the host-boundary entry points

mod common;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod output;
pub mod reader;
pub mod stats;

pub use common::{DecodeError, EncodeError};
pub use constants::FORMAT_VERSION;
pub use decoder::Decoder;
pub use encoder::{Encoder, DEFAULT_RECURSION_LIMIT};
pub use output::OutputBuffer;
pub use stats::TagStats;
