//! Binary encoding of signable entities.
//!
//! ## Wire Convention
//!
//! - Multi-byte integers are big-endian
//! - No padding and no outer length prefix
//! - Assets carry a presence flag: `0x00` for the native asset,
//!   `0x01` followed by the 32-byte id otherwise
//!
//! The bytes produced here are what a signer signs and what the matcher
//! verifies. Any change to the layout breaks every signature already issued.

mod writer;

pub use writer::{ByteWriter, ISSUED_ASSET_FLAG, NATIVE_ASSET_FLAG};

use crate::error::OrderResult;

/// Upper bound on an encoded order, in bytes (1 KiB)
pub const MAX_ORDER_BYTES: usize = 1024;

/// An entity that exposes a canonical payload for signing.
pub trait Signable {
    /// The exact bytes an external signer applies its private key to
    fn signing_bytes(&self) -> OrderResult<Vec<u8>>;
}
