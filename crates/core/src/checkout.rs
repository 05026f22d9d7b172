//! Checkout: the last step before an order is placed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::handoff::{
    CheckoutHandoff, HandoffError, HandoffLine, HandoffStore, clear_handoff, read_handoff,
};
use crate::types::{Fulfillment, Money, OrderId, Shop};

/// Flat fee added to every order at checkout.
pub const DEFAULT_SERVICE_FEE: Money = Money::new(Decimal::from_parts(100, 0, 0, false, 2));

/// Note shown to the kitchen or pro shop until the golfer edits it.
pub const DEFAULT_DELIVERY_NOTE: &str = "We are currently starting to tee off on 10th";

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cannot place an order with no items")]
    EmptyOrder,
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// A priced order awaiting placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    source: Shop,
    fulfillment: Fulfillment,
    handoff: CheckoutHandoff,
    service_fee: Money,
    note: String,
}

impl Checkout {
    #[must_use]
    pub fn new(handoff: CheckoutHandoff, source: Shop, fulfillment: Fulfillment) -> Self {
        Self {
            source,
            fulfillment,
            handoff,
            service_fee: DEFAULT_SERVICE_FEE,
            note: DEFAULT_DELIVERY_NOTE.to_string(),
        }
    }

    /// Start checkout from whatever the ordering step left in `store`.
    ///
    /// Never fails: an unreadable snapshot becomes an empty order.
    #[must_use]
    pub fn load<S>(store: &S, source: Shop, fulfillment: Fulfillment) -> Self
    where
        S: HandoffStore + ?Sized,
    {
        Self::new(read_handoff(store), source, fulfillment)
    }

    #[must_use]
    pub fn with_service_fee(mut self, fee: Money) -> Self {
        self.service_fee = fee;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    #[must_use]
    pub const fn source(&self) -> Shop {
        self.source
    }

    #[must_use]
    pub const fn fulfillment(&self) -> Fulfillment {
        self.fulfillment
    }

    #[must_use]
    pub const fn handoff(&self) -> &CheckoutHandoff {
        &self.handoff
    }

    #[must_use]
    pub const fn service_fee(&self) -> Money {
        self.service_fee
    }

    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Order total plus the service fee.
    #[must_use]
    pub fn total_payment(&self) -> Money {
        self.handoff.total + self.service_fee
    }

    /// Place the order and clear the hand-off entries from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyOrder`] if there is nothing to order, or
    /// a hand-off error if the store cannot be cleared.
    pub fn place_order<S>(self, store: &mut S) -> Result<OrderConfirmation, CheckoutError>
    where
        S: HandoffStore + ?Sized,
    {
        if self.handoff.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        clear_handoff(store)?;

        let confirmation = OrderConfirmation {
            order_id: OrderId::generate(),
            placed_at: Utc::now(),
            source: self.source,
            fulfillment: self.fulfillment,
            amount_charged: self.total_payment(),
            subtotal: self.handoff.subtotal,
            tax: self.handoff.tax,
            service_fee: self.service_fee,
            note: self.note,
            lines: self.handoff.lines,
        };

        tracing::info!(
            order_id = %confirmation.order_id,
            source = %confirmation.source,
            fulfillment = %confirmation.fulfillment,
            amount = %confirmation.amount_charged,
            "Order placed"
        );

        Ok(confirmation)
    }
}

/// Receipt for a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub source: Shop,
    pub fulfillment: Fulfillment,
    pub lines: Vec<HandoffLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub service_fee: Money,
    /// Order total plus service fee.
    pub amount_charged: Money,
    pub note: String,
}
