//! Fairway Core - clubhouse ordering library.
//!
//! This crate holds everything the Fairway ordering flow computes:
//! - [`catalog`] - Menu and pro shop items, id lookup, category filters
//! - [`cart`] - Insertion-ordered item quantities with no zero lines
//! - [`quote`] - Subtotal, flat-rate tax and total for a cart
//! - [`handoff`] - The priced snapshot passed from a shop page to checkout
//! - [`checkout`] - Service fee, order placement and confirmation
//! - [`session`] - One golfer's carts across both shops
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no files, no network,
//! no process environment. Storage for the checkout hand-off is abstracted
//! behind [`HandoffStore`]; `fairway-cli` provides a file-backed one.
//!
//! # Example
//!
//! ```
//! use fairway_core::{Checkout, Fulfillment, ItemId, MemoryStore, OrderingSession, Shop};
//! use fairway_core::handoff::write_handoff;
//!
//! let mut session = OrderingSession::default();
//! let coke = ItemId::parse("coca-cola").unwrap();
//! session.increment(Shop::Menu, &coke).unwrap();
//! session.increment(Shop::Menu, &coke).unwrap();
//!
//! let handoff = session.proceed_to_checkout(Shop::Menu);
//! assert_eq!(handoff.total.to_string(), "$7.56");
//!
//! let mut store = MemoryStore::new();
//! write_handoff(&mut store, &handoff).unwrap();
//!
//! let checkout = Checkout::load(&store, Shop::Menu, Fulfillment::Delivery);
//! assert_eq!(checkout.total_payment().to_string(), "$8.56");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod handoff;
pub mod quote;
pub mod session;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogError, CatalogItem, CategoryFilter, ItemLookup};
pub use checkout::{Checkout, CheckoutError, OrderConfirmation};
pub use handoff::{CheckoutHandoff, HandoffError, HandoffLine, HandoffStore, MemoryStore};
pub use quote::{LineItem, Quote, QuoteWarning, TaxRate, TaxRateError};
pub use session::{OrderingSession, SessionError, ShopState};
pub use types::*;
