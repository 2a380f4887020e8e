//! Monetary amounts of the smoothie menu

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount of money kept as whole cents, so every price has
/// exactly two decimal places.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Creates a price from an amount of cents
    pub const fn from_cents(cents: u64) -> Price {
        Price(cents)
    }

    /// To obtain the amount in cents
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// The amount as a decimal number, e.g. `7.6` for 760 cents
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Price of `count` units at this unit price.
    pub fn times(self, count: usize) -> Price {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        Price(self.0.saturating_mul(count))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
