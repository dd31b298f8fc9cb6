//! Original/discounted price pair using decimal arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Pricing for a surplus listing.
///
/// Invariant: `discounted <= original`. Constructed values uphold it by
/// clamping; deserialized values are taken as-is since the storage payload
/// is our own serialization of an already-valid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Price before the surplus discount, in the currency's standard unit.
    pub original: Decimal,
    /// Price the consumer actually pays.
    pub discounted: Decimal,
    /// Advertised discount, whole percent (0-100).
    pub discount_percent: u8,
}

impl Pricing {
    /// Create a pricing pair, deriving the advertised discount percentage.
    ///
    /// A `discounted` above `original` is clamped down to `original`
    /// (zero discount) rather than rejected.
    #[must_use]
    pub fn new(original: Decimal, discounted: Decimal) -> Self {
        let discounted = discounted.min(original);
        let discount_percent = if original.is_zero() {
            0
        } else {
            let ratio = (original - discounted) / original * Decimal::from(100);
            ratio.round().to_u8().unwrap_or(0)
        };
        Self {
            original,
            discounted,
            discount_percent,
        }
    }
}
