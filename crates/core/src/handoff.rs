//! Passing a priced order from a shop page to checkout.
//!
//! The preferred path is typed: [`OrderingSession::proceed_to_checkout`]
//! returns a [`CheckoutHandoff`] that is handed straight to
//! [`Checkout::new`]. When the two steps run in different processes the
//! snapshot goes through a [`HandoffStore`], a string key-value store laid
//! out like the browser storage the web client used:
//!
//! | Key | Value |
//! |-----|-------|
//! | `orderSubtotal` | subtotal, two decimals |
//! | `orderTax` | tax, two decimals |
//! | `orderTotal` | total, two decimals |
//! | `cartItems` | JSON array of `{id, name, quantity, price}`, `price` being the line total |
//!
//! [`OrderingSession::proceed_to_checkout`]: crate::session::OrderingSession::proceed_to_checkout
//! [`Checkout::new`]: crate::checkout::Checkout::new

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quote::Quote;
use crate::types::{ItemId, Money};

/// Storage keys of the hand-off snapshot.
pub mod keys {
    pub const ORDER_TOTAL: &str = "orderTotal";
    pub const ORDER_SUBTOTAL: &str = "orderSubtotal";
    pub const ORDER_TAX: &str = "orderTax";
    pub const CART_ITEMS: &str = "cartItems";

    /// Every key written by [`write_handoff`](super::write_handoff).
    pub const ALL: [&str; 4] = [ORDER_TOTAL, ORDER_SUBTOTAL, ORDER_TAX, CART_ITEMS];
}

/// Hand-off store errors.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("hand-off store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("hand-off serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("hand-off value {key} is not an amount: {reason}")]
    InvalidAmount { key: String, reason: String },
}

/// String key-value storage that survives a navigation between ordering and
/// checkout.
pub trait HandoffStore {
    /// Read `key`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, HandoffError>;

    /// Write `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), HandoffError>;

    /// Write several keys as one update.
    ///
    /// The default writes them one at a time; stores that can commit a batch
    /// in one step should override it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written. Some keys
    /// may already be written when the default implementation fails.
    fn set_all(&mut self, entries: Vec<(&str, String)>) -> Result<(), HandoffError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Delete `key`; deleting an unset key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), HandoffError>;
}

/// In-process [`HandoffStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HandoffStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HandoffError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), HandoffError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), HandoffError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One line of the hand-off snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffLine {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    /// Line total (unit price times quantity), rounded to cents.
    pub price: Money,
}

/// Priced order, rounded to cents, as checkout sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutHandoff {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub lines: Vec<HandoffLine>,
}

impl CheckoutHandoff {
    /// A zero-valued order with no lines.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&Quote> for CheckoutHandoff {
    fn from(quote: &Quote) -> Self {
        Self {
            subtotal: Money::new(quote.subtotal.rounded()),
            tax: Money::new(quote.tax.rounded()),
            total: Money::new(quote.total.rounded()),
            lines: quote
                .lines
                .iter()
                .map(|line| HandoffLine {
                    id: line.id.clone(),
                    name: line.display_name.clone(),
                    quantity: line.quantity,
                    price: Money::new(line.line_total.rounded()),
                })
                .collect(),
        }
    }
}

/// Write `handoff` under the [`keys`], replacing any previous snapshot.
///
/// If the store fails part way, the hand-off keys are cleared so a later
/// read never pairs new totals with old lines.
///
/// # Errors
///
/// Returns an error if the lines cannot be serialized or the store rejects a
/// write.
pub fn write_handoff<S>(store: &mut S, handoff: &CheckoutHandoff) -> Result<(), HandoffError>
where
    S: HandoffStore + ?Sized,
{
    let lines = serde_json::to_string(&handoff.lines)?;

    let written = store.set_all(vec![
        (keys::ORDER_TOTAL, handoff.total.rounded().to_string()),
        (keys::ORDER_SUBTOTAL, handoff.subtotal.rounded().to_string()),
        (keys::ORDER_TAX, handoff.tax.rounded().to_string()),
        (keys::CART_ITEMS, lines),
    ]);
    if let Err(e) = written {
        if let Err(clear_err) = clear_handoff(store) {
            tracing::warn!(error = %clear_err, "Failed to clear partial hand-off");
        }
        return Err(e);
    }

    tracing::debug!(lines = handoff.lines.len(), total = %handoff.total, "Hand-off written");
    Ok(())
}

/// Read the snapshot back.
///
/// Unset keys read as zero or as no lines. If the store fails or any value is
/// corrupt the whole snapshot is discarded and an empty order returned, so
/// the totals shown never disagree with the lines shown.
pub fn read_handoff<S>(store: &S) -> CheckoutHandoff
where
    S: HandoffStore + ?Sized,
{
    match try_read_handoff(store) {
        Ok(handoff) => handoff,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable checkout hand-off");
            CheckoutHandoff::empty()
        }
    }
}

/// Remove every hand-off key.
///
/// # Errors
///
/// Returns an error if the store rejects a removal.
pub fn clear_handoff<S>(store: &mut S) -> Result<(), HandoffError>
where
    S: HandoffStore + ?Sized,
{
    for key in keys::ALL {
        store.remove(key)?;
    }
    Ok(())
}

fn try_read_handoff<S>(store: &S) -> Result<CheckoutHandoff, HandoffError>
where
    S: HandoffStore + ?Sized,
{
    let lines = match store.get(keys::CART_ITEMS)? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Vec::new(),
    };

    Ok(CheckoutHandoff {
        subtotal: read_amount(store, keys::ORDER_SUBTOTAL)?,
        tax: read_amount(store, keys::ORDER_TAX)?,
        total: read_amount(store, keys::ORDER_TOTAL)?,
        lines,
    })
}

fn read_amount<S>(store: &S, key: &str) -> Result<Money, HandoffError>
where
    S: HandoffStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Money::ZERO);
    };

    raw.trim()
        .parse::<Decimal>()
        .map(Money::new)
        .map_err(|e| HandoffError::InvalidAmount {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
