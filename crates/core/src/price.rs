//! Unit prices as non-negative decimal money.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative price, stored in the smallest currency unit (cents).
///
/// Negative prices cannot be represented, so every constructor that accepts a
/// signed or textual amount validates it.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Build a price from a decimal amount, rounded to the nearest cent.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("price is too large"));
        }
        Ok(Self(cents as u64))
    }

    /// Price of `quantity` units, saturating at the largest representable amount.
    pub fn saturating_mul(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(self, other: Price) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses `"12"`, `"12.5"` or `"12.50"`. At most two fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(DomainError::validation("price cannot be negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        let malformed = || DomainError::validation(format!("malformed price: {s:?}"));
        let too_large = || DomainError::validation("price is too large");

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        // Only digits remain, so a parse failure is an overflow.
        let units: u64 = whole.parse().map_err(|_| too_large())?;

        let frac_cents = match frac {
            None => 0,
            Some(frac)
                if (1..=2).contains(&frac.len()) && frac.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let digits: u64 = frac.parse().map_err(|_| malformed())?;
                if frac.len() == 1 { digits * 10 } else { digits }
            }
            Some(_) => return Err(malformed()),
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Self)
            .ok_or_else(too_large)
    }
}
