//! Order total derivation from a cart.
//!
//! Line totals, subtotal, tax and total are kept unrounded inside a
//! [`Quote`]; rounding to cents happens when the quote is turned into a
//! [`CheckoutHandoff`](crate::handoff::CheckoutHandoff) or displayed.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::{Catalog, ItemLookup};
use crate::types::{ItemId, Money};

/// Errors from building a [`TaxRate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaxRateError {
    #[error("tax rate must be between 0 and 1, got {0}")]
    OutOfRange(Decimal),
    #[error("invalid tax rate {0:?}")]
    Invalid(String),
}

/// Flat sales tax rate applied to the whole subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// 8% sales tax.
    pub const DEFAULT: Self = Self(Decimal::from_parts(8, 0, 0, false, 2));

    /// Create a rate from a fraction (`0.08` for 8%).
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is negative or greater than one.
    pub fn new(rate: Decimal) -> Result<Self, TaxRateError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(TaxRateError::OutOfRange(rate));
        }
        Ok(Self(rate))
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Tax owed on `amount`, unrounded.
    #[must_use]
    pub fn apply(self, amount: Money) -> Money {
        amount * self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = TaxRateError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

impl FromStr for TaxRate {
    type Err = TaxRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate = Decimal::from_str(s.trim()).map_err(|_| TaxRateError::Invalid(s.to_string()))?;
        Self::new(rate)
    }
}

/// A data-integrity problem found while quoting. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteWarning {
    /// The cart holds an id the catalog does not know; priced at zero.
    MissingCatalogItem(ItemId),
}

/// One resolved cart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: ItemId,
    /// Empty when the item is missing from the catalog.
    pub display_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Totals for a cart against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    /// One per cart entry, in cart order.
    pub lines: Vec<LineItem>,
    pub warnings: Vec<QuoteWarning>,
}

impl Quote {
    /// Price every cart line against `catalog` and apply `rate`.
    ///
    /// Ids the catalog does not carry contribute zero and are reported in
    /// [`Quote::warnings`].
    #[must_use]
    pub fn compute(cart: &Cart, catalog: &Catalog, rate: TaxRate) -> Self {
        let mut lines = Vec::with_capacity(cart.len());
        let mut warnings = Vec::new();

        for entry in cart.lines() {
            let lookup = catalog.lookup(&entry.id);
            if let ItemLookup::Missing(id) = lookup {
                tracing::warn!(
                    item = %id,
                    shop = %catalog.shop(),
                    "Cart references an item missing from the catalog"
                );
                warnings.push(QuoteWarning::MissingCatalogItem(id.clone()));
            }

            let quantity = entry.quantity.get();
            let unit_price = lookup.unit_price();
            lines.push(LineItem {
                id: entry.id.clone(),
                display_name: lookup.display_name().to_string(),
                quantity,
                unit_price,
                line_total: unit_price * quantity,
            });
        }

        let subtotal: Money = lines.iter().map(|line| line.line_total).sum();
        let tax = rate.apply(subtotal);

        Self {
            subtotal,
            tax,
            total: subtotal + tax,
            lines,
            warnings,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
