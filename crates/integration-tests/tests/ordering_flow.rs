//! Cart mutation and quoting scenarios.

#![allow(clippy::unwrap_used)]

use fairway_core::{
    Cart, CartState, Catalog, Money, OrderingSession, Quote, QuoteWarning, Shop, TaxRate,
};
use fairway_integration_tests::{dec, drinks_catalog, item_id};

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_coke_and_lemonade_totals() {
    let mut cart = Cart::new();
    cart.increment(&item_id("coke"));
    cart.increment(&item_id("coke"));
    cart.increment(&item_id("lemonade"));

    let quote = Quote::compute(&cart, &drinks_catalog(), TaxRate::DEFAULT);

    assert_eq!(quote.subtotal.rounded(), dec("10.50"));
    assert_eq!(quote.tax.rounded(), dec("0.84"));
    assert_eq!(quote.total.rounded(), dec("11.34"));
}

#[test]
fn test_empty_cart_totals() {
    let quote = Quote::compute(&Cart::new(), &drinks_catalog(), TaxRate::DEFAULT);

    assert_eq!(quote.subtotal.rounded(), dec("0.00"));
    assert_eq!(quote.tax.rounded(), dec("0.00"));
    assert_eq!(quote.total.rounded(), dec("0.00"));
    assert!(quote.lines.is_empty());
}

#[test]
fn test_missing_item_does_not_disturb_other_lines() {
    let mut cart = Cart::new();
    cart.set_quantity(&item_id("coke"), 2);
    cart.set_quantity(&item_id("root-beer"), 4);
    cart.increment(&item_id("lemonade"));

    let quote = Quote::compute(&cart, &drinks_catalog(), TaxRate::DEFAULT);

    assert_eq!(quote.lines.len(), 3);
    let totals: Vec<_> = quote.lines.iter().map(|l| l.line_total.to_string()).collect();
    assert_eq!(totals, ["$7.00", "$0.00", "$3.50"]);
    assert_eq!(quote.subtotal.rounded(), dec("10.50"));
    assert_eq!(
        quote.warnings,
        [QuoteWarning::MissingCatalogItem(item_id("root-beer"))]
    );
}

#[test]
fn test_subtotal_is_sum_of_price_times_quantity() {
    let catalog = Catalog::menu();
    let rate = TaxRate::DEFAULT;

    let carts: [&[(&str, u32)]; 4] = [
        &[("sprite", 1)],
        &[("hot-coffee", 3), ("diet-coke", 2)],
        &[("hamburger-fries", 1), ("chicken-caesar-wrap", 2), ("iced-coffee", 5)],
        &[("lemonade", 7), ("not-on-menu", 2)],
    ];

    for lines in carts {
        let mut cart = Cart::new();
        let mut expected = Money::ZERO;
        for &(id, quantity) in lines {
            let id = item_id(id);
            cart.set_quantity(&id, quantity);
            expected = expected + catalog.lookup(&id).unit_price() * quantity;
        }

        let quote = Quote::compute(&cart, &catalog, rate);
        assert_eq!(quote.subtotal, expected);
        assert_eq!(quote.tax, expected * rate.as_decimal());
        assert_eq!(quote.total, quote.subtotal + quote.tax);
    }
}

#[test]
fn test_configured_tax_rate_applies_flat() {
    let mut cart = Cart::new();
    cart.set_quantity(&item_id("coke"), 4);
    let rate = TaxRate::new(dec("0.10")).unwrap();

    let quote = Quote::compute(&cart, &drinks_catalog(), rate);
    assert_eq!(quote.tax.rounded(), dec("1.40"));
    assert_eq!(quote.total.rounded(), dec("15.40"));
}

// =============================================================================
// Mutation
// =============================================================================

#[test]
fn test_increment_then_decrement_to_empty() {
    let mut cart = Cart::new();
    let coke = item_id("coke");

    assert_eq!(cart.increment(&coke), 1);
    assert_eq!(cart.increment(&coke), 2);
    assert_eq!(cart.state(), CartState::NonEmpty);

    assert_eq!(cart.decrement(&coke), 1);
    assert_eq!(cart.decrement(&coke), 0);
    assert_eq!(cart.state(), CartState::Empty);
    assert_eq!(cart.decrement(&coke), 0);
    assert!(cart.lines().is_empty());
}

#[test]
fn test_session_browsing_and_ordering_both_shops() {
    let mut session = OrderingSession::default();

    session.increment(Shop::Menu, &item_id("coca-cola")).unwrap();
    session.increment(Shop::Menu, &item_id("coca-cola")).unwrap();
    session.increment(Shop::Menu, &item_id("lemonade")).unwrap();
    session.increment(Shop::ProShop, &item_id("golf-tees")).unwrap();

    let menu = session.proceed_to_checkout(Shop::Menu);
    assert_eq!(menu.total, Money::from_cents(1134));
    assert_eq!(menu.lines.len(), 2);

    let pro = session.proceed_to_checkout(Shop::ProShop);
    // 3.50 + 0.28 tax
    assert_eq!(pro.total, Money::from_cents(378));

    session.remove(Shop::Menu, &item_id("lemonade"));
    assert_eq!(session.quote(Shop::Menu).subtotal, Money::from_cents(700));
}
