//! Assets and asset pairs.
//!
//! An asset is either the chain's native asset (no id) or an issued asset
//! identified by 32 bytes. The text form of an id is Base58; the native
//! asset is spelled `WAVES` in text and `null` in JSON.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::error::{OrderError, OrderResult};

/// Length of an issued asset id in bytes
pub const ASSET_ID_LENGTH: usize = 32;

/// Text name of the native asset
pub const NATIVE_ASSET_NAME: &str = "WAVES";

/// 32-byte identifier of an issued asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId([u8; ASSET_ID_LENGTH]);

impl AssetId {
    pub fn new(bytes: [u8; ASSET_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build an id from a slice that must be exactly 32 bytes long
    pub fn from_bytes(bytes: &[u8]) -> OrderResult<Self> {
        let raw: [u8; ASSET_ID_LENGTH] =
            bytes.try_into().map_err(|_| OrderError::InvalidLength {
                expected: ASSET_ID_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }

    /// Parse a Base58-encoded id
    pub fn from_base58(text: &str) -> OrderResult<Self> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|e| OrderError::InvalidBase58(format!("{text}: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ASSET_ID_LENGTH] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

/// Either the native asset or an issued asset.
///
/// ## Example
///
/// ```
/// use matcher_order::types::Asset;
///
/// let waves: Asset = "WAVES".parse().unwrap();
/// assert!(waves.is_native());
/// assert!(waves.to_json().is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Asset {
    /// The chain's default asset; carries no id
    #[default]
    Native,
    /// An issued asset with its 32-byte id
    Issued(AssetId),
}

impl Asset {
    /// Parse text form: `WAVES` or the empty string is native,
    /// anything else must be a Base58 32-byte id
    pub fn from_text(text: &str) -> OrderResult<Self> {
        if text.is_empty() || text == NATIVE_ASSET_NAME {
            Ok(Asset::Native)
        } else {
            AssetId::from_base58(text).map(Asset::Issued)
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// The id of an issued asset, `None` for the native asset
    pub fn id(&self) -> Option<&AssetId> {
        match self {
            Asset::Native => None,
            Asset::Issued(id) => Some(id),
        }
    }

    /// JSON form: `null` for native, Base58 string otherwise
    pub fn to_json(&self) -> Value {
        match self {
            Asset::Native => Value::Null,
            Asset::Issued(id) => Value::String(id.to_base58()),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => f.write_str(NATIVE_ASSET_NAME),
            Asset::Issued(id) => fmt::Display::fmt(id, f),
        }
    }
}

impl FromStr for Asset {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl From<AssetId> for Asset {
    fn from(id: AssetId) -> Self {
        Asset::Issued(id)
    }
}

/// The (amount, price) pair an order trades between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AssetPair {
    amount_asset: Asset,
    price_asset: Asset,
}

impl AssetPair {
    pub fn new(amount_asset: Asset, price_asset: Asset) -> Self {
        Self {
            amount_asset,
            price_asset,
        }
    }

    /// Asset the order amount is denominated in
    pub fn amount_asset(&self) -> &Asset {
        &self.amount_asset
    }

    /// Asset the order price is denominated in
    pub fn price_asset(&self) -> &Asset {
        &self.price_asset
    }

    /// JSON object nested under `assetPair` in the REST body
    pub fn to_json_object(&self) -> Value {
        json!({
            "amountAsset": self.amount_asset.to_json(),
            "priceAsset": self.price_asset.to_json(),
        })
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.amount_asset, self.price_asset)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
