//! Client-side shopping cart.
//!
//! A cart maps item ids to quantities in the order items were first added.
//! Quantities are [`NonZeroU32`], so a line that would drop to zero is
//! removed rather than stored.

use std::num::NonZeroU32;

use crate::types::{CartState, ItemId};

/// One cart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ItemId,
    pub quantity: NonZeroU32,
}

/// Item id to quantity mapping, insertion ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one of `id`, creating the line if needed. Returns the new quantity.
    pub fn increment(&mut self, id: &ItemId) -> u32 {
        let quantity = if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine {
                id: id.clone(),
                quantity: NonZeroU32::MIN,
            });
            NonZeroU32::MIN
        };

        let quantity = quantity.get();
        tracing::debug!(item = %id, quantity, "cart increment");
        quantity
    }

    /// Take one of `id` away, dropping the line when it reaches zero.
    /// Returns the remaining quantity; absent ids stay absent.
    pub fn decrement(&mut self, id: &ItemId) -> u32 {
        let Some(position) = self.position(id) else {
            return 0;
        };
        let Some(line) = self.lines.get_mut(position) else {
            return 0;
        };

        let remaining = line.quantity.get() - 1;
        match NonZeroU32::new(remaining) {
            Some(quantity) => line.quantity = quantity,
            None => {
                self.lines.remove(position);
            }
        }

        tracing::debug!(item = %id, quantity = remaining, "cart decrement");
        remaining
    }

    /// Set the quantity of `id` directly. Zero removes the line; an existing
    /// line keeps its position.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) {
        match NonZeroU32::new(quantity) {
            Some(quantity) => {
                if let Some(line) = self.line_mut(id) {
                    line.quantity = quantity;
                } else {
                    self.lines.push(CartLine {
                        id: id.clone(),
                        quantity,
                    });
                }
            }
            None => {
                self.remove(id);
            }
        }
    }

    /// Drop the line for `id` whatever its quantity. Returns `true` if a line
    /// was removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        before != self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity of `id`, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.id == id)
            .map_or(0, |line| line.quantity.get())
    }

    /// Sum of all quantities (the badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity.get()))
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.id == id)
    }

    fn line_mut(&mut self, id: &ItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.id == id)
    }
}
