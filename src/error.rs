//! Error types for order decoding and encoding.
//!
//! Every failure is a typed [`OrderError`] variant so callers can tell
//! malformed upstream data (`InvalidEnumValue`, `InvalidBase58`,
//! `InvalidLength`) apart from an encoder whose layout assumptions no
//! longer hold (`EncodingOverflow`).

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// An order type or status arrived with an unrecognised wire string
    #[error("{0}")]
    InvalidEnumValue(String),

    /// The signing payload would exceed the writer's capacity
    #[error("encoded order needs {required} bytes but capacity is {capacity}")]
    EncodingOverflow {
        /// Bytes the payload needs after the failed write
        required: usize,
        /// Upper bound the writer was created with
        capacity: usize,
    },

    /// Text that should be Base58 could not be decoded
    #[error("invalid base58 text: {0}")]
    InvalidBase58(String),

    /// A fixed-size byte field had the wrong length
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Result alias used throughout the crate
pub type OrderResult<T> = Result<T, OrderError>;

// ============================================================================
// Unit Tests
// ============================================================================
