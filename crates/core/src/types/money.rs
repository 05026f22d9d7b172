//! Currency amounts using decimal arithmetic.
//!
//! All arithmetic happens on unrounded [`Decimal`] values. Rounding to cents
//! happens only when an amount leaves the core, through [`Money::rounded`]
//! or [`Display`](core::fmt::Display).

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A non-rounded currency amount in the facility's currency (US dollars).
///
/// ```
/// use fairway_core::Money;
///
/// let coke = Money::from_cents(350);
/// assert_eq!((coke * 3).to_string(), "$10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount from a decimal value in dollars.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to cents, half away from zero, always with two
    /// decimal places (`10.5` becomes `10.50`).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        cents
    }

    /// Returns `true` if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.rounded())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::new(Decimal::from(3)).to_string(), "$3.00");
    }

    #[test]
    fn test_rounded_half_away_from_zero() {
        // 0.125 -> 0.13, bankers rounding would give 0.12
        let amount = Money::new(Decimal::new(125, 3));
        assert_eq!(amount.rounded(), Decimal::new(13, 2));

        let amount = Money::new(Decimal::new(8399, 4));
        assert_eq!(amount.rounded().to_string(), "0.84");
    }

    #[test]
    fn test_multiply_by_quantity() {
        let price = Money::from_cents(450);
        assert_eq!(price * 3, Money::from_cents(1350));
        assert_eq!(price * 0, Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(350), Money::from_cents(700)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(1050));
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Money::from_cents(1134)).unwrap();
        assert_eq!(json, "\"11.34\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(1134));
    }
}
