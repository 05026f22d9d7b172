//! Quoting a cart and handing it off to checkout.
//!
//! # Usage
//!
//! ```bash
//! # Two cokes and a lemonade for delivery
//! fairway quote menu coca-cola=2 lemonade
//! ```
//!
//! The priced snapshot is written to `FAIRWAY_HANDOFF_PATH` for a later
//! `fairway checkout`.

use std::str::FromStr;

use fairway_core::handoff::write_handoff;
use fairway_core::{CheckoutHandoff, ItemId, ItemIdError, OrderingSession, QuoteWarning, Shop};
use thiserror::Error;
use tracing::{info, warn};

use super::CommandError;
use crate::catalog_file::resolve_catalog;
use crate::config::CliConfig;
use crate::store::JsonFileStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineArgError {
    #[error("invalid item id: {0}")]
    Id(#[from] ItemIdError),
    #[error("invalid quantity {0:?}")]
    Quantity(String),
}

/// One `id` or `id=quantity` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineArg {
    pub id: ItemId,
    pub quantity: u32,
}

impl FromStr for LineArg {
    type Err = LineArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once('=') {
            Some((id, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| LineArgError::Quantity(quantity.to_string()))?;
                (id, quantity)
            }
            None => (s, 1),
        };

        Ok(Self {
            id: ItemId::parse(id.trim())?,
            quantity,
        })
    }
}

/// Build a session over the configured catalogs.
///
/// # Errors
///
/// Returns an error if a catalog override cannot be loaded.
pub fn open_session(config: &CliConfig) -> Result<OrderingSession, CommandError> {
    let menu = resolve_catalog(config, Shop::Menu)?;
    let pro_shop = resolve_catalog(config, Shop::ProShop)?;
    Ok(OrderingSession::new(menu, pro_shop, config.tax_rate)?)
}

/// Fill `shop`'s cart from `lines`, print the quote and write the hand-off.
///
/// Repeated ids add up; a `=0` argument removes the item again.
///
/// # Errors
///
/// Returns an error if an id is not sold by `shop` or the hand-off cannot be
/// written.
pub fn run(
    config: &CliConfig,
    shop: Shop,
    lines: &[LineArg],
) -> Result<CheckoutHandoff, CommandError> {
    let mut session = open_session(config)?;

    for line in lines {
        let quantity = if line.quantity == 0 {
            0
        } else {
            session.cart(shop).quantity(&line.id).saturating_add(line.quantity)
        };
        session.set_quantity(shop, &line.id, quantity)?;
    }

    let quote = session.quote(shop);
    for warning in &quote.warnings {
        match warning {
            QuoteWarning::MissingCatalogItem(id) => {
                warn!("{id} is no longer in the {shop} catalog");
            }
        }
    }

    info!("Order Details ({shop})");
    for line in &quote.lines {
        info!(
            "  {}x {:<26} {:>8}",
            line.quantity,
            line.display_name,
            line.line_total.to_string()
        );
    }
    info!("  Subtotal   {}", quote.subtotal);
    info!("  Sales Tax  {}", quote.tax);
    info!("  Total      {}", quote.total);

    let handoff = session.proceed_to_checkout(shop);
    let mut store = JsonFileStore::new(&config.handoff_path);
    write_handoff(&mut store, &handoff)?;
    info!(path = %store.path().display(), "Ready for checkout");

    Ok(handoff)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fairway_core::handoff::{keys, read_handoff};
    use fairway_core::{HandoffStore, Money, SessionError};

    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> CliConfig {
        CliConfig {
            handoff_path: dir.path().join("handoff.json"),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_parse_line_arg() {
        assert_eq!(
            "coca-cola=2".parse::<LineArg>().unwrap(),
            LineArg {
                id: ItemId::parse("coca-cola").unwrap(),
                quantity: 2
            }
        );
        assert_eq!("lemonade".parse::<LineArg>().unwrap().quantity, 1);
        assert!(matches!(
            "sprite=lots".parse::<LineArg>(),
            Err(LineArgError::Quantity(_))
        ));
        assert!(matches!("=2".parse::<LineArg>(), Err(LineArgError::Id(_))));
    }

    #[test]
    fn test_run_writes_handoff() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let lines: Vec<LineArg> = ["coca-cola=2", "lemonade"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let handoff = run(&config, Shop::Menu, &lines).unwrap();
        assert_eq!(handoff.total, Money::from_cents(1134));

        let store = JsonFileStore::new(&config.handoff_path);
        assert_eq!(store.get(keys::ORDER_TOTAL).unwrap().as_deref(), Some("11.34"));
        assert_eq!(read_handoff(&store), handoff);
    }

    #[test]
    fn test_repeated_ids_accumulate_and_zero_removes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let lines: Vec<LineArg> = ["glove", "glove=2", "socks", "socks=0"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let handoff = run(&config, Shop::ProShop, &lines).unwrap();
        assert_eq!(handoff.lines.len(), 1);
        assert_eq!(handoff.lines[0].quantity, 3);
    }

    #[test]
    fn test_run_rejects_item_from_other_shop() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let lines = vec!["glove".parse::<LineArg>().unwrap()];

        let err = run(&config, Shop::Menu, &lines).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Session(SessionError::UnknownItem { .. })
        ));
        assert!(!config.handoff_path.exists());
    }
}
