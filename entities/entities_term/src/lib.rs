//! Entities Layer: Term Model
//!
//! Provides the abstract term model exchanged across the external term
//! format codec boundary.
//!
//! ## Overview
//!
//! The `entities_term` crate is the entities layer of the external term
//! format codec. It defines [`Term`], the tagged union that the decoder
//! produces and the encoder consumes, together with range-aware
//! constructors and the decimal rendering used for big integers that
//! exceed the native 32-bit range.
//!
//! The host binding layer converts its own dynamic values into `Term`
//! before calling the codec; the codec itself never inspects a host
//! runtime's numeric representation.
//!
//! ## Modules
//!
//! - **[`term`](term/index.html)**: The `Term` tagged union and its
//!   constructors
//!
//! ## Architecture
//!
//! This crate has no dependency on the wire format. It uses the
//! `malachite` crate for arbitrary-precision decimal rendering of
//! big-integer magnitudes.
//!
//! ## See Also
//!
//! - `infrastructure_codec`: wire-level encoding/decoding of `Term`

pub mod term;

pub use term::{big_to_decimal, Term};
