//! Type-safe price representation in minor currency units.
//!
//! Lumora sells in Indonesian rupiah, which has no circulating subunit, so a
//! price is a plain integer amount of minor units. Arithmetic is saturating:
//! cart totals are sums of small catalog prices and must never panic or wrap.

use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A price in minor currency units (rupiah).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount of minor units.
    #[must_use]
    pub const fn from_minor_units(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Format for display with the rupiah prefix and dot thousands
    /// separators (e.g., "Rp 85.000").
    #[must_use]
    pub fn display(&self) -> String {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if negative {
            format!("-Rp {grouped}")
        } else {
            format!("Rp {grouped}")
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
