//! Reader Module
//!
//! Provides bounds-safe reads over an immutable byte buffer. Every
//! multi-byte read verifies the remaining length first; no read ever
//! passes the end of the buffer.

use crate::common::DecodeError;

/// Cursor over an immutable byte buffer
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of the buffer
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn check(&self, size: usize) -> Result<(), DecodeError> {
        if size > self.remaining() {
            Err(DecodeError::BufferTooShort)
        } else {
            Ok(())
        }
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.check(1)?;
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Read a 2-byte big-endian unsigned integer
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.check(2)?;
        let value = u16::from_be_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    /// Read a 4-byte big-endian unsigned integer
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.check(4)?;
        let value = u32::from_be_bytes([
            self.buf[self.pos],
            self.buf[self.pos + 1],
            self.buf[self.pos + 2],
            self.buf[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(value)
    }

    /// Read a 4-byte big-endian signed integer
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(self.read_u32()? as i32)
    }

    /// Read an 8-byte big-endian IEEE 754 double
    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        self.check(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(f64::from_be_bytes(bytes))
    }

    /// Read `len` raw bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.check(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
