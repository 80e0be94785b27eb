//! # Matcher Order
//!
//! Order entity for the Waves DEX matcher and its two wire forms.
//!
//! ## Architecture
//!
//! - **Types**: Order, OrderType, OrderStatus, assets and public keys
//! - **Encoding**: Capacity-bounded big-endian writer and the signing payload
//! - **Error**: Typed failures for bad wire input and encoding overflow
//!
//! ## Design Principles
//!
//! 1. **Byte Exactness**: The signing payload is stable forever; signatures depend on it
//! 2. **Determinism**: Same fields always give the same bytes, id and JSON body
//! 3. **Immutability**: Orders are built once and never mutated
//! 4. **No Business Rules**: Values are encoded faithfully, not validated
//!
//! ## Example
//!
//! ```
//! use matcher_order::{AssetPair, Order, OrderStatus, OrderType, PublicKey, Signable};
//!
//! let order = Order::new(
//!     OrderType::Sell,
//!     AssetPair::default(),
//!     100_000_000,
//!     300_000_000,
//!     1_577_836_800_000,
//!     0,
//!     OrderStatus::Accepted,
//!     1_577_923_200_000,
//!     300_000,
//!     PublicKey::new([1u8; 32]),
//!     PublicKey::new([2u8; 32]),
//! );
//!
//! let payload = order.signing_bytes().unwrap();   // hand to a signer
//! let body = order.to_field_map();                // REST submission body
//! assert_eq!(payload.len(), 107);
//! assert!(!body.contains_key("status"));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type shared by every module
pub mod error;

/// Core data types: Order, OrderType, OrderStatus, AssetPair, PublicKey
pub mod types;

/// Binary encoding: ByteWriter and the Signable capability
pub mod encoding;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use encoding::{ByteWriter, Signable, MAX_ORDER_BYTES};
pub use error::{OrderError, OrderResult};
pub use types::{Asset, AssetId, AssetPair, Order, OrderId, OrderStatus, OrderType, PublicKey};
