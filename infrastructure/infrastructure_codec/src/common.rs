//! Common Error Types
//!
//! Shared error enums for the decoding and encoding halves of the
//! codec. Both halves fail synchronously and never retry internally;
//! retry, if desired, is entirely the host's responsibility.

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read would pass the end of the buffer
    BufferTooShort,
    /// The leading byte is not the format version magic
    InvalidVersion(u8),
    /// The tag byte names no term type this codec handles
    InvalidTag(u8),
    /// A list did not end with the nil tag byte
    UnterminatedList,
    /// A big-integer magnitude exceeded the 8-byte bound
    BignumTooLarge(usize),
}

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The recursion-depth budget was exhausted
    TooDeep,
    /// A sequence or binary length cannot be carried by the 4-byte
    /// length field
    TooLong,
    /// A map pair count cannot be carried by the 4-byte arity field
    TooManyEntries,
    /// The output buffer could not be allocated or grown
    AllocationFailed,
}
