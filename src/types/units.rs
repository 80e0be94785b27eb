//! Decimal text to raw integer unit conversion.
//!
//! ## Overview
//!
//! An order carries amounts, prices and fees as raw `u64` integers. Humans
//! write them as decimals. Each asset declares how many decimal places its
//! raw unit has (WAVES has 8, so 1 WAVES = 100_000_000 units).
//!
//! ## Matcher Prices
//!
//! The matcher expresses a price as an integer scaled by
//! `10^(8 + price_decimals - amount_decimals)`. [`normalize_price`] applies
//! that scale.
//!
//! ## Examples
//!
//! ```
//! use matcher_order::types::units::{from_units, normalize_price, to_units};
//!
//! assert_eq!(to_units("1.5", 8), Some(150_000_000));
//! assert_eq!(from_units(150_000_000, 8).as_deref(), Some("1.50000000"));
//!
//! // WAVES (8 decimals) priced in a 2-decimal asset
//! assert_eq!(normalize_price("3.25", 8, 2), Some(325));
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Fixed decimal offset the matcher adds to every price scale
pub const PRICE_CONSTANT_DECIMALS: u32 = 8;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert decimal text to raw units of an asset with `decimals` places
///
/// # Returns
///
/// * `Some(u64)` - The raw unit count, rounded to the nearest integer
/// * `None` - If parsing fails, the value is negative or out of range
///
/// # Example
///
/// ```
/// use matcher_order::types::units::to_units;
///
/// assert_eq!(to_units("1", 8), Some(100_000_000));
/// assert_eq!(to_units("0.00000001", 8), Some(1));
/// assert_eq!(to_units("12.34", 2), Some(1234));
/// ```
pub fn to_units(s: &str, decimals: u32) -> Option<u64> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    decimal_to_units(decimal, decimals)
}

/// Convert a Decimal to raw units of an asset with `decimals` places
pub fn decimal_to_units(d: Decimal, decimals: u32) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scale = 10u64.checked_pow(decimals)?;
    let scaled = d.checked_mul(Decimal::from(scale))?;
    scaled.round_dp(0).to_u64()
}

/// Convert raw units to a Decimal
///
/// `None` if `decimals` exceeds what a Decimal can carry (28).
pub fn units_to_decimal(value: u64, decimals: u32) -> Option<Decimal> {
    Decimal::try_from_i128_with_scale(i128::from(value), decimals).ok()
}

/// Convert raw units to text with exactly `decimals` places
///
/// # Example
///
/// ```
/// use matcher_order::types::units::from_units;
///
/// assert_eq!(from_units(300_000, 8).as_deref(), Some("0.00300000"));
/// assert_eq!(from_units(42, 0).as_deref(), Some("42"));
/// ```
pub fn from_units(value: u64, decimals: u32) -> Option<String> {
    let decimal = units_to_decimal(value, decimals)?;
    Some(format!("{:.prec$}", decimal, prec = decimals as usize))
}

/// Convert a decimal price to the matcher's integer price
///
/// The scale is `10^(8 + price_decimals - amount_decimals)`. `None` if the
/// exponent would be negative or the result does not fit a `u64`.
pub fn normalize_price(s: &str, amount_decimals: u32, price_decimals: u32) -> Option<u64> {
    let exponent = (PRICE_CONSTANT_DECIMALS + price_decimals).checked_sub(amount_decimals)?;
    to_units(s, exponent)
}

// ============================================================================
// Unit Tests
// ============================================================================
