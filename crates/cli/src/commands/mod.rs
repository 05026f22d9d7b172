//! Subcommand implementations.
//!
//! Each command returns the data it produced so it can be exercised without a
//! terminal; progress and results are reported through `tracing`.

pub mod catalog;
pub mod checkout;
pub mod quote;

use fairway_core::{CheckoutError, HandoffError, SessionError};
use thiserror::Error;

use crate::catalog_file::CatalogFileError;

/// Errors surfaced by any subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    CatalogFile(#[from] CatalogFileError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
