//! The matcher order entity.
//!
//! ## Signing Payload
//!
//! [`Order::signing_bytes`] produces the byte-exact payload an external
//! signer signs. All integers are big-endian:
//!
//! | # | field              | size        |
//! |---|--------------------|-------------|
//! | 1 | sender public key  | 32          |
//! | 2 | matcher public key | 32          |
//! | 3 | amount asset       | 1 or 33     |
//! | 4 | price asset        | 1 or 33     |
//! | 5 | order type ordinal | 1           |
//! | 6 | price              | 8           |
//! | 7 | amount             | 8           |
//! | 8 | timestamp          | 8           |
//! | 9 | expiration         | 8           |
//! | 10| matcher fee        | 8           |
//!
//! A native/native order is therefore 107 bytes, an issued/issued one 171.
//!
//! ## REST Body
//!
//! [`Order::to_field_map`] builds the JSON submission body. `filled` and
//! `status` are server-reported and never sent.

use std::fmt;
use std::str::FromStr;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::encoding::{ByteWriter, Signable, MAX_ORDER_BYTES};
use crate::error::{OrderError, OrderResult};
use crate::types::{AssetPair, OrderStatus, PublicKey};

/// Blake2b with a 256-bit output, the content hash behind order ids
pub type Blake2b256 = Blake2b<U32>;

// ============================================================================
// OrderType enum
// ============================================================================

/// Order side.
///
/// The ordinal is part of the signing payload and must never change:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    /// Decode from wire text, ignoring case (`"BUY"`, `"buy"`, `"Sell"`...)
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` for anything else, the empty string included.
    pub fn from_wire(s: &str) -> OrderResult<Self> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(OrderType::Buy),
            "SELL" => Ok(OrderType::Sell),
            _ => Err(OrderError::InvalidEnumValue(format!(
                "Bad order type value: {s}"
            ))),
        }
    }

    /// Lowercase wire text: `"buy"` or `"sell"`
    pub fn as_wire_str(self) -> &'static str {
        match self {
            OrderType::Buy => "buy",
            OrderType::Sell => "sell",
        }
    }

    /// Byte written into the signing payload
    pub fn ordinal_byte(self) -> u8 {
        match self {
            OrderType::Buy => 0,
            OrderType::Sell => 1,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for OrderType {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}

impl TryFrom<String> for OrderType {
    type Error = OrderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_wire(&value)
    }
}

impl From<OrderType> for &'static str {
    fn from(order_type: OrderType) -> Self {
        order_type.as_wire_str()
    }
}

// ============================================================================
// OrderId
// ============================================================================

/// Content-derived order identifier: Base58 of the payload digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// An order on the matcher.
///
/// Immutable once built: every field is supplied to [`Order::new`] and read
/// back through accessors. Ids and JSON bodies are recomputed on demand.
///
/// ## Example
///
/// ```
/// use matcher_order::encoding::Signable;
/// use matcher_order::types::{AssetPair, Order, OrderStatus, OrderType, PublicKey};
///
/// let order = Order::new(
///     OrderType::Buy,
///     AssetPair::default(),       // WAVES/WAVES
///     100_000_000,                // amount
///     300_000_000,                // price
///     1_577_836_800_000,          // timestamp (ms)
///     0,                          // filled
///     OrderStatus::Accepted,
///     1_577_923_200_000,          // expiration (ms)
///     300_000,                    // matcher fee
///     PublicKey::new([1u8; 32]),  // sender
///     PublicKey::new([2u8; 32]),  // matcher
/// );
///
/// assert_eq!(order.signing_bytes().unwrap().len(), 107);
/// assert_eq!(order.to_field_map()["orderType"], "buy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    order_type: OrderType,
    asset_pair: AssetPair,
    amount: u64,
    price: u64,
    timestamp: u64,
    filled: u64,
    status: OrderStatus,
    expiration: u64,
    matcher_fee: u64,
    sender_public_key: PublicKey,
    matcher_public_key: PublicKey,
}

impl Order {
    /// Create an order from already-validated fields
    ///
    /// Timestamps are epoch milliseconds. No business rule (positive price,
    /// future expiration) is checked here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_type: OrderType,
        asset_pair: AssetPair,
        amount: u64,
        price: u64,
        timestamp: u64,
        filled: u64,
        status: OrderStatus,
        expiration: u64,
        matcher_fee: u64,
        sender_public_key: PublicKey,
        matcher_public_key: PublicKey,
    ) -> Self {
        Self {
            order_type,
            asset_pair,
            amount,
            price,
            timestamp,
            filled,
            status,
            expiration,
            matcher_fee,
            sender_public_key,
            matcher_public_key,
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn asset_pair(&self) -> &AssetPair {
        &self.asset_pair
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Amount filled so far, as reported by the matcher
    pub fn filled(&self) -> u64 {
        self.filled
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    pub fn matcher_fee(&self) -> u64 {
        self.matcher_fee
    }

    pub fn sender_public_key(&self) -> &PublicKey {
        &self.sender_public_key
    }

    pub fn matcher_public_key(&self) -> &PublicKey {
        &self.matcher_public_key
    }

    /// Encode the signing payload against a caller-chosen size bound
    ///
    /// # Errors
    ///
    /// `EncodingOverflow` if the payload does not fit in `capacity` bytes.
    pub fn signing_bytes_with_capacity(&self, capacity: usize) -> OrderResult<Vec<u8>> {
        let mut writer = ByteWriter::with_capacity(capacity);
        writer
            .put_bytes(self.sender_public_key.as_bytes())?
            .put_bytes(self.matcher_public_key.as_bytes())?
            .put_asset(self.asset_pair.amount_asset())?
            .put_asset(self.asset_pair.price_asset())?
            .put_u8(self.order_type.ordinal_byte())?
            .put_u64(self.price)?
            .put_u64(self.amount)?
            .put_u64(self.timestamp)?
            .put_u64(self.expiration)?
            .put_u64(self.matcher_fee)?;

        let bytes = writer.into_bytes();
        debug!(
            len = bytes.len(),
            order_type = %self.order_type,
            pair = %self.asset_pair,
            "encoded order"
        );
        Ok(bytes)
    }

    /// Order id: Base58 of the Blake2b-256 digest of the signing payload
    pub fn id(&self) -> OrderResult<OrderId> {
        self.id_with::<Blake2b256>()
    }

    /// Order id derived with any RustCrypto digest
    pub fn id_with<D: Digest>(&self) -> OrderResult<OrderId> {
        let digest = D::digest(self.signing_bytes()?);
        let id = bs58::encode(digest).into_string();
        trace!(%id, "derived order id");
        Ok(OrderId(id))
    }

    /// REST submission body.
    ///
    /// Exactly nine keys, in insertion order: `senderPublicKey`,
    /// `matcherPublicKey`, `assetPair`, `orderType`, `price`, `amount`,
    /// `timestamp`, `expiration`, `matcherFee`.
    pub fn to_field_map(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            "senderPublicKey".to_string(),
            Value::String(self.sender_public_key.to_base58()),
        );
        data.insert(
            "matcherPublicKey".to_string(),
            Value::String(self.matcher_public_key.to_base58()),
        );
        data.insert("assetPair".to_string(), self.asset_pair.to_json_object());
        data.insert(
            "orderType".to_string(),
            Value::String(self.order_type.as_wire_str().to_string()),
        );
        data.insert("price".to_string(), Value::from(self.price));
        data.insert("amount".to_string(), Value::from(self.amount));
        data.insert("timestamp".to_string(), Value::from(self.timestamp));
        data.insert("expiration".to_string(), Value::from(self.expiration));
        data.insert("matcherFee".to_string(), Value::from(self.matcher_fee));
        data
    }

    /// Submission body with the signer's output attached as Base58 `signature`
    pub fn to_signed_field_map(&self, signature: &[u8]) -> Map<String, Value> {
        let mut data = self.to_field_map();
        data.insert(
            "signature".to_string(),
            Value::String(bs58::encode(signature).into_string()),
        );
        data
    }

    /// Submission body as a JSON value
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_field_map())
    }
}

impl Signable for Order {
    /// Encode the signing payload, bounded by [`MAX_ORDER_BYTES`]
    fn signing_bytes(&self) -> OrderResult<Vec<u8>> {
        self.signing_bytes_with_capacity(MAX_ORDER_BYTES)
    }
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_field_map().serialize(serializer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
