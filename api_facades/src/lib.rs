//! API Facades Layer: Term Codec Boundary
//!
//! Provides the host-facing entry points of the external term format
//! codec.
//!
//! ## Overview
//!
//! The `api_facades` crate is the outermost layer of the codec
//! workspace. A host binding converts its native values into
//! [`Term`] and calls [`term_to_binary`]; incoming buffers go through
//! [`binary_to_term`], optionally with a caller-owned tag histogram.
//! Codec failures surface as the inner layers' error enums, for the
//! binding to translate into host-level exceptions.
//!
//! ## Modules
//!
//! - **[`term_facades`](term_facades/index.html)**: `term_to_binary`,
//!   `binary_to_term`, and the statistics-carrying variant
//!
//! ## See Also
//!
//! - `entities_term`: the term model
//! - `infrastructure_codec`: the underlying decoder and encoder

pub mod term_facades;

pub use entities_term::Term;
pub use infrastructure_codec::{DecodeError, EncodeError, TagStats};
pub use term_facades::{binary_to_term, binary_to_term_with_stats, term_to_binary};
