//! Money type for representing currency amounts
//!
//! The Actual API reports every amount as an integer number of minor units
//! (cents). Amounts stay as i64 cents until they are formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Display tone of a balance, decided purely by its sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTone {
    Positive,
    Zero,
    Negative,
}

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use actual_widget::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Classify the amount for coloring
    pub const fn tone(&self) -> BalanceTone {
        if self.0 > 0 {
            BalanceTone::Positive
        } else if self.0 < 0 {
            BalanceTone::Negative
        } else {
            BalanceTone::Zero
        }
    }

    /// Format with a currency prefix and suffix
    ///
    /// Negative amounts put the sign in front of the prefix. No digit
    /// grouping is applied.
    ///
    /// ```
    /// use actual_widget::models::Money;
    /// assert_eq!(Money::from_cents(-1234).format("$", ""), "-$12.34");
    /// assert_eq!(Money::from_cents(500).format("", " €"), "5.00 €");
    /// ```
    pub fn format(&self, prefix: &str, suffix: &str) -> String {
        let abs = self.0.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}{}",
            sign,
            prefix,
            abs / 100,
            abs % 100,
            suffix
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("$", ""))
    }
}

// Sums clamp at the i64 bounds instead of overflowing
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
