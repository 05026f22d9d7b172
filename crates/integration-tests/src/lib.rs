//! Integration tests for Fairway.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fairway-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `ordering_flow` - Cart mutation and quoting across both shops
//! - `checkout_handoff` - Hand-off through memory and file stores into checkout
//!
//! This library only holds shared fixtures.

use std::str::FromStr;

use fairway_core::{Catalog, CatalogItem, Category, ItemId, Money, Shop};
use rust_decimal::Decimal;

/// Parse an item id known to be valid.
///
/// # Panics
///
/// Panics if `s` is not a valid item id.
#[must_use]
#[allow(clippy::expect_used)]
pub fn item_id(s: &str) -> ItemId {
    ItemId::parse(s).expect("fixture item id should be valid")
}

/// Parse a decimal known to be valid.
///
/// # Panics
///
/// Panics if `s` is not a decimal.
#[must_use]
#[allow(clippy::expect_used)]
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("fixture decimal should be valid")
}

/// A two-drink menu priced like the clubhouse: coke and lemonade at $3.50.
///
/// # Panics
///
/// Panics if the fixture catalog fails validation.
#[must_use]
#[allow(clippy::expect_used)]
pub fn drinks_catalog() -> Catalog {
    let drink = |id: &str, name: &str| CatalogItem {
        id: item_id(id),
        name: name.to_string(),
        description: String::new(),
        price: Money::from_cents(350),
        category: Category::Drinks,
    };
    Catalog::new(
        Shop::Menu,
        vec![drink("coke", "Coca Cola"), drink("lemonade", "Lemonade")],
    )
    .expect("fixture catalog should be valid")
}
