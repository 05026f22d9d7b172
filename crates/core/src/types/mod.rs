//! Core types for Fairway.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::{ItemId, ItemIdError, OrderId};
pub use money::Money;
pub use status::*;
