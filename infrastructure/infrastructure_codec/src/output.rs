//! Output Buffer Module
//!
//! Provides the growable byte buffer the encoder writes into. Capacity
//! grows by doubling whenever an append would exceed it, and allocation
//! failure is surfaced as an error instead of an abort.

use crate::common::EncodeError;

/// Initial output buffer capacity (1 MiB)
pub const INITIAL_BUFFER_SIZE: usize = 1024 * 1024;

/// Growable, owned output buffer
///
/// Ownership of the written bytes transfers to the caller through
/// [`into_bytes`](OutputBuffer::into_bytes) on success; on any failure
/// path the buffer is simply dropped.
#[derive(Debug)]
pub struct OutputBuffer {
    buf: Vec<u8>,
}

impl OutputBuffer {
    /// Allocate a buffer with the default initial capacity
    pub fn new() -> Result<Self, EncodeError> {
        Self::with_capacity(INITIAL_BUFFER_SIZE)
    }

    /// Allocate a buffer with a specific initial capacity
    pub fn with_capacity(capacity: usize) -> Result<Self, EncodeError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| EncodeError::AllocationFailed)?;
        Ok(Self { buf })
    }

    /// Append raw bytes, doubling capacity as needed
    ///
    /// Growth is never more than doubling per step and never less than
    /// the requested append size.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let needed = self
            .buf
            .len()
            .checked_add(bytes.len())
            .ok_or(EncodeError::AllocationFailed)?;
        if needed > self.buf.capacity() {
            let mut new_capacity = self.buf.capacity().max(1);
            while new_capacity < needed {
                new_capacity = match new_capacity.checked_mul(2) {
                    Some(capacity) => capacity,
                    None => needed,
                };
            }
            self.buf
                .try_reserve_exact(new_capacity - self.buf.len())
                .map_err(|_| EncodeError::AllocationFailed)?;
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current allocated capacity
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The written bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the buffer, transferring ownership of the written bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
