//! Money type for representing prices and totals.
//!
//! Amounts are stored as integer cents, so repeated cart operations never
//! accumulate floating-point drift. Display is always two decimals.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    amount_cents: i64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { amount_cents: 0 };

    /// Create a Money value from cents.
    pub const fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// NaN, infinities and amounts outside the `i64` cent range are rejected.
    ///
    /// ```
    /// use smartone_core::money::Money;
    /// let price = Money::from_decimal(19.99).unwrap();
    /// assert_eq!(price.cents(), 1999);
    /// assert!(Money::from_decimal(f64::NAN).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, StoreError> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(StoreError::InvalidAmount(amount.to_string()));
        }
        Ok(Self::from_cents(cents as i64))
    }

    /// Parse a decimal string such as `"19.99"`, `"$5"` or `"0.5"` exactly.
    ///
    /// At most two fractional digits are accepted.
    pub fn parse(input: &str) -> Result<Self, StoreError> {
        let invalid = || StoreError::InvalidAmount(input.to_string());

        let trimmed = input.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix(CURRENCY_SYMBOL).unwrap_or(rest);
        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self::from_cents(if negative { -cents } else { cents }))
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.amount_cents
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Add, saturating at the numeric bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(self, quantity: u64) -> Money {
        let factor = i64::try_from(quantity).unwrap_or(i64::MAX);
        Money::from_cents(self.amount_cents.saturating_mul(factor))
    }

    /// Format without symbol (e.g., "19.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format with symbol (e.g., "$19.99").
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        match amount.strip_prefix('-') {
            Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
            None => format!("{}{}", CURRENCY_SYMBOL, amount),
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
