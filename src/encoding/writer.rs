//! Capacity-bounded big-endian byte writer.
//!
//! Every write checks the remaining capacity before touching the buffer, so
//! an oversized payload fails with [`OrderError::EncodingOverflow`] instead
//! of being truncated.

use tracing::warn;

use crate::error::{OrderError, OrderResult};
use crate::types::Asset;

/// Flag byte written before an asset: native asset, no id follows
pub const NATIVE_ASSET_FLAG: u8 = 0;

/// Flag byte written before an asset: 32-byte id follows
pub const ISSUED_ASSET_FLAG: u8 = 1;

/// Append-only byte buffer with a fixed upper bound on its length.
///
/// ## Example
///
/// ```
/// use matcher_order::encoding::ByteWriter;
///
/// let mut writer = ByteWriter::with_capacity(16);
/// writer.put_u8(1).unwrap();
/// writer.put_u64(0x0102_0304_0506_0708).unwrap();
///
/// assert_eq!(writer.into_bytes(), vec![1, 1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buf: Vec<u8>,
    capacity: usize,
}

impl ByteWriter {
    /// Create an empty writer that refuses to grow past `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append raw bytes as-is
    pub fn put_bytes(&mut self, bytes: &[u8]) -> OrderResult<&mut Self> {
        self.reserve(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(self)
    }

    /// Append a single byte
    pub fn put_u8(&mut self, value: u8) -> OrderResult<&mut Self> {
        self.reserve(1)?;
        self.buf.push(value);
        Ok(self)
    }

    /// Append an unsigned 64-bit integer, big-endian
    pub fn put_u64(&mut self, value: u64) -> OrderResult<&mut Self> {
        self.put_bytes(&value.to_be_bytes())
    }

    /// Append an asset using the presence-flag convention.
    ///
    /// Native asset: `0x00`. Issued asset: `0x01` followed by the 32-byte id.
    pub fn put_asset(&mut self, asset: &Asset) -> OrderResult<&mut Self> {
        match asset {
            Asset::Native => self.put_u8(NATIVE_ASSET_FLAG),
            Asset::Issued(id) => {
                self.put_u8(ISSUED_ASSET_FLAG)?;
                self.put_bytes(id.as_bytes())
            }
        }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Upper bound this writer was created with
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consume the writer, returning exactly the bytes written
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn reserve(&self, additional: usize) -> OrderResult<()> {
        let required = self.buf.len() + additional;
        if required > self.capacity {
            warn!(required, capacity = self.capacity, "encoding overflow");
            return Err(OrderError::EncodingOverflow {
                required,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
