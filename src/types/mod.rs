//! Core data types for matcher orders
//!
//! ## Types
//!
//! - [`Order`]: An order as signed by its owner and tracked by the matcher
//! - [`OrderType`]: Buy or Sell
//! - [`OrderStatus`]: Matcher-reported lifecycle state
//! - [`AssetPair`]: The (amount, price) assets an order trades between
//! - [`PublicKey`]: 32-byte account public key
//!
//! ## Raw Units
//!
//! Amounts, prices and fees are raw `u64` integers in the asset's smallest
//! unit. See [`units`] for decimal conversion.

mod account;
mod asset;
mod order;
mod status;
pub mod units;

// Re-export all types at module level
pub use account::{PublicKey, PUBLIC_KEY_LENGTH};
pub use asset::{Asset, AssetId, AssetPair, ASSET_ID_LENGTH, NATIVE_ASSET_NAME};
pub use order::{Blake2b256, Order, OrderId, OrderType};
pub use status::OrderStatus;
