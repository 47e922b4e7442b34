//! Prices in the storefront's single display currency.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative price, held in the smallest currency unit (cents).
///
/// Catalog feeds express prices as decimals (`12.5`); they are rounded to the
/// nearest cent on the way in so totals are exact integer arithmetic.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build a price from a decimal amount (e.g. `59.99`).
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!("price {amount} is not finite")));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!("price {amount} is negative")));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation(format!("price {amount} is out of range")));
        }
        Ok(Self { cents: cents as u64 })
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.cents.checked_add(other.cents).map(Price::from_cents)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Price> {
        self.cents.checked_mul(u64::from(quantity)).map(Price::from_cents)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}
