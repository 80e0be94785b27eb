//! Account public keys.

use std::fmt;
use std::str::FromStr;

use crate::error::{OrderError, OrderResult};

/// Length of a raw account public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Raw 32-byte account public key.
///
/// Its text form (used in JSON bodies) is Base58.
///
/// ## Example
///
/// ```
/// use matcher_order::types::PublicKey;
///
/// let key = PublicKey::new([7u8; 32]);
/// let parsed = PublicKey::from_base58(&key.to_base58()).unwrap();
/// assert_eq!(key, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build a key from a slice that must be exactly 32 bytes long
    pub fn from_bytes(bytes: &[u8]) -> OrderResult<Self> {
        let raw: [u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| OrderError::InvalidLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }

    /// Parse a Base58-encoded key
    pub fn from_base58(text: &str) -> OrderResult<Self> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|e| OrderError::InvalidBase58(format!("{text}: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for PublicKey {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
