//! Checkout from a previously written hand-off.
//!
//! # Usage
//!
//! ```bash
//! # Review the order quoted from the menu, for course delivery
//! fairway checkout show --source menu --fulfillment delivery
//!
//! # Place it
//! fairway checkout place --source menu --fulfillment delivery --note "Hole 12"
//! ```

use fairway_core::{Checkout, Fulfillment, OrderConfirmation, Shop};
use tracing::info;

use super::CommandError;
use crate::config::CliConfig;
use crate::store::JsonFileStore;

fn load(config: &CliConfig, source: Shop, fulfillment: Fulfillment) -> (Checkout, JsonFileStore) {
    let store = JsonFileStore::new(&config.handoff_path);
    let checkout =
        Checkout::load(&store, source, fulfillment).with_service_fee(config.service_fee);
    (checkout, store)
}

fn report(checkout: &Checkout) {
    let handoff = checkout.handoff();

    info!("Checkout ({}, {})", checkout.source(), checkout.fulfillment());
    for line in &handoff.lines {
        info!("  {}x {:<26} {:>8}", line.quantity, line.name, line.price.to_string());
    }
    info!("  Subtotal        {}", handoff.subtotal);
    info!("  Sales Tax       {}", handoff.tax);
    info!("  Total           {}", handoff.total);
    info!("  Service Fee     {}", checkout.service_fee());
    info!("  Total Payment   {}", checkout.total_payment());
    info!("  Notes: {}", checkout.note());
}

/// Show the pending order.
///
/// Never fails on a missing or corrupt hand-off; that shows as an empty
/// order.
#[must_use]
pub fn show(config: &CliConfig, source: Shop, fulfillment: Fulfillment) -> Checkout {
    let (checkout, _) = load(config, source, fulfillment);
    report(&checkout);
    checkout
}

/// Place the pending order and clear the hand-off.
///
/// # Errors
///
/// Returns an error if there is no order to place or the hand-off file cannot
/// be cleared.
pub fn place(
    config: &CliConfig,
    source: Shop,
    fulfillment: Fulfillment,
    note: Option<String>,
) -> Result<OrderConfirmation, CommandError> {
    let (mut checkout, mut store) = load(config, source, fulfillment);
    if let Some(note) = note {
        checkout = checkout.with_note(note);
    }
    report(&checkout);

    let confirmation = checkout.place_order(&mut store)?;
    info!(
        "Order {} confirmed: {} charged at {}",
        confirmation.order_id,
        confirmation.amount_charged,
        confirmation.placed_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(confirmation)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fairway_core::handoff::keys;
    use fairway_core::{CheckoutError, HandoffStore, Money};

    use super::*;
    use crate::commands::quote::{self, LineArg};

    fn config_in(dir: &tempfile::TempDir) -> CliConfig {
        CliConfig {
            handoff_path: dir.path().join("handoff.json"),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_show_without_handoff_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let checkout = show(&config_in(&dir), Shop::Menu, Fulfillment::Pickup);
        assert!(checkout.handoff().is_empty());
        assert_eq!(checkout.total_payment(), Money::from_cents(100));
    }

    #[test]
    fn test_quote_then_place() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            service_fee: Money::from_cents(150),
            ..config_in(&dir)
        };
        let lines = vec!["golf-balls=2".parse::<LineArg>().unwrap()];
        quote::run(&config, Shop::ProShop, &lines).unwrap();

        let confirmation = place(
            &config,
            Shop::ProShop,
            Fulfillment::Delivery,
            Some("Hole 12".to_string()),
        )
        .unwrap();

        // 7.00 + 0.56 tax + 1.50 fee
        assert_eq!(confirmation.amount_charged, Money::from_cents(906));
        assert_eq!(confirmation.note, "Hole 12");

        let store = JsonFileStore::new(&config.handoff_path);
        for key in keys::ALL {
            assert_eq!(store.get(key).unwrap(), None);
        }
    }

    #[test]
    fn test_place_twice_fails_second_time() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let lines = vec!["sprite".parse::<LineArg>().unwrap()];
        quote::run(&config, Shop::Menu, &lines).unwrap();

        place(&config, Shop::Menu, Fulfillment::Pickup, None).unwrap();
        let err = place(&config, Shop::Menu, Fulfillment::Pickup, None).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Checkout(CheckoutError::EmptyOrder)
        ));
    }
}
