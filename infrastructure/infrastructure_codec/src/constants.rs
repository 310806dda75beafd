//! Wire Format Constants
//!
//! Defines the tag constants of the external term format subset this
//! codec handles, and the leading version magic byte.

/// External term format version magic byte, first in every buffer
pub const FORMAT_VERSION: u8 = 131;

/// New float (IEEE 754 double, 8 bytes big-endian)
pub const NEW_FLOAT_EXT: u8 = 70;

/// Small integer (0-255, single byte payload)
pub const ERL_SMALL_INTEGER_EXT: u8 = 97;

/// Integer (32-bit signed, big-endian)
pub const ERL_INTEGER_EXT: u8 = 98;

/// Atom (2-byte length prefix)
pub const ERL_ATOM_EXT: u8 = 100;

/// Nil (empty list, no payload)
pub const ERL_NIL_EXT: u8 = 106;

/// String (2-byte length prefix, raw bytes)
pub const ERL_STRING_EXT: u8 = 107;

/// List (4-byte length, elements, nil tail byte)
pub const ERL_LIST_EXT: u8 = 108;

/// Binary (4-byte length, raw bytes)
pub const ERL_BINARY_EXT: u8 = 109;

/// Small big integer (1-byte arity, sign byte, little-endian magnitude)
pub const ERL_SMALL_BIG_EXT: u8 = 110;

/// Large big integer (4-byte arity, sign byte, little-endian magnitude)
pub const ERL_LARGE_BIG_EXT: u8 = 111;

/// Small atom (1-byte length prefix)
pub const ERL_SMALL_ATOM_EXT: u8 = 115;

/// Map (4-byte pair count, key/value pairs)
pub const ERL_MAP_EXT: u8 = 116;
