//! Ordering session: the carts and catalogs of one golfer's visit.
//!
//! The session is owned by the caller and passed where it is needed; there
//! is no global cart.

use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::{Catalog, CatalogItem, CategoryFilter};
use crate::handoff::CheckoutHandoff;
use crate::quote::{Quote, TaxRate};
use crate::types::{ItemId, Shop};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("the {shop} does not sell {id}")]
    UnknownItem { shop: Shop, id: ItemId },
    #[error("expected a {expected} catalog, got a {found} catalog")]
    CatalogMismatch { expected: Shop, found: Shop },
}

/// Per-shop state: what is for sale, what is selected, what is in the cart.
#[derive(Debug, Clone)]
pub struct ShopState {
    catalog: Catalog,
    cart: Cart,
    filter: CategoryFilter,
}

impl ShopState {
    fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            filter: CategoryFilter::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub const fn filter_mut(&mut self) -> &mut CategoryFilter {
        &mut self.filter
    }

    /// Items passing the current category filter.
    pub fn visible_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.catalog.filter(self.filter.selected())
    }
}

#[derive(Debug, Clone)]
pub struct OrderingSession {
    menu: ShopState,
    pro_shop: ShopState,
    tax_rate: TaxRate,
}

impl Default for OrderingSession {
    fn default() -> Self {
        Self {
            menu: ShopState::new(Catalog::menu()),
            pro_shop: ShopState::new(Catalog::pro_shop()),
            tax_rate: TaxRate::DEFAULT,
        }
    }
}

impl OrderingSession {
    /// Start a session over the given catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CatalogMismatch`] if a catalog belongs to the
    /// other shop.
    pub fn new(menu: Catalog, pro_shop: Catalog, tax_rate: TaxRate) -> Result<Self, SessionError> {
        for (expected, catalog) in [(Shop::Menu, &menu), (Shop::ProShop, &pro_shop)] {
            if catalog.shop() != expected {
                return Err(SessionError::CatalogMismatch {
                    expected,
                    found: catalog.shop(),
                });
            }
        }

        Ok(Self {
            menu: ShopState::new(menu),
            pro_shop: ShopState::new(pro_shop),
            tax_rate,
        })
    }

    #[must_use]
    pub const fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    #[must_use]
    pub const fn shop(&self, shop: Shop) -> &ShopState {
        match shop {
            Shop::Menu => &self.menu,
            Shop::ProShop => &self.pro_shop,
        }
    }

    pub const fn shop_mut(&mut self, shop: Shop) -> &mut ShopState {
        match shop {
            Shop::Menu => &mut self.menu,
            Shop::ProShop => &mut self.pro_shop,
        }
    }

    #[must_use]
    pub const fn cart(&self, shop: Shop) -> &Cart {
        self.shop(shop).cart()
    }

    #[must_use]
    pub const fn catalog(&self, shop: Shop) -> &Catalog {
        self.shop(shop).catalog()
    }

    /// Plus button on an item card.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownItem`] if `shop` does not sell `id`.
    pub fn increment(&mut self, shop: Shop, id: &ItemId) -> Result<u32, SessionError> {
        let state = self.shop_mut(shop);
        if !state.catalog.contains(id) {
            return Err(SessionError::UnknownItem {
                shop,
                id: id.clone(),
            });
        }
        Ok(state.cart.increment(id))
    }

    /// Minus button on an item card.
    pub fn decrement(&mut self, shop: Shop, id: &ItemId) -> u32 {
        self.shop_mut(shop).cart.decrement(id)
    }

    /// Set a line's quantity outright; zero removes it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownItem`] if `shop` does not sell `id`.
    pub fn set_quantity(
        &mut self,
        shop: Shop,
        id: &ItemId,
        quantity: u32,
    ) -> Result<(), SessionError> {
        let state = self.shop_mut(shop);
        if quantity > 0 && !state.catalog.contains(id) {
            return Err(SessionError::UnknownItem {
                shop,
                id: id.clone(),
            });
        }
        state.cart.set_quantity(id, quantity);
        Ok(())
    }

    /// Trash button in the order summary.
    pub fn remove(&mut self, shop: Shop, id: &ItemId) -> bool {
        self.shop_mut(shop).cart.remove(id)
    }

    /// Current totals for `shop`'s cart.
    #[must_use]
    pub fn quote(&self, shop: Shop) -> Quote {
        let state = self.shop(shop);
        Quote::compute(&state.cart, &state.catalog, self.tax_rate)
    }

    /// Price `shop`'s cart for checkout. The cart itself is left alone until
    /// the order is placed.
    #[must_use]
    pub fn proceed_to_checkout(&self, shop: Shop) -> CheckoutHandoff {
        let quote = self.quote(shop);
        let handoff = CheckoutHandoff::from(&quote);
        tracing::info!(
            %shop,
            lines = handoff.lines.len(),
            total = %handoff.total,
            "Proceeding to checkout"
        );
        handoff
    }

    /// Empty both carts, as after a placed order.
    pub fn clear_all(&mut self) {
        self.menu.cart.clear();
        self.pro_shop.cart.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CartState, Category, Money};

    fn id(s: &str) -> ItemId {
        ItemId::parse(s).unwrap()
    }

    #[test]
    fn test_carts_are_independent_per_shop() {
        let mut session = OrderingSession::default();
        session.increment(Shop::Menu, &id("sprite")).unwrap();
        session.increment(Shop::ProShop, &id("glove")).unwrap();

        assert_eq!(session.cart(Shop::Menu).quantity(&id("sprite")), 1);
        assert_eq!(session.cart(Shop::Menu).quantity(&id("glove")), 0);
        assert_eq!(session.cart(Shop::ProShop).quantity(&id("glove")), 1);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut session = OrderingSession::default();
        let err = session.increment(Shop::Menu, &id("glove")).unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownItem {
                shop: Shop::Menu,
                id: id("glove")
            }
        );
        assert_eq!(session.cart(Shop::Menu).state(), CartState::Empty);
    }

    #[test]
    fn test_set_quantity_zero_allowed_for_unknown() {
        let mut session = OrderingSession::default();
        assert!(session.set_quantity(Shop::Menu, &id("ghost"), 0).is_ok());
        assert!(session.set_quantity(Shop::Menu, &id("ghost"), 2).is_err());
    }

    #[test]
    fn test_proceed_to_checkout_rounds_totals() {
        let mut session = OrderingSession::default();
        session.set_quantity(Shop::ProShop, &id("golf-balls"), 3).unwrap();
        session.increment(Shop::ProShop, &id("divot-tool")).unwrap();

        let handoff = session.proceed_to_checkout(Shop::ProShop);
        // 3 * 3.50 + 4.50 = 15.00, tax 1.20
        assert_eq!(handoff.subtotal, Money::from_cents(1500));
        assert_eq!(handoff.tax, Money::from_cents(120));
        assert_eq!(handoff.total, Money::from_cents(1620));
        assert_eq!(session.cart(Shop::ProShop).len(), 2);
    }

    #[test]
    fn test_clear_all_empties_both_carts() {
        let mut session = OrderingSession::default();
        session.increment(Shop::Menu, &id("lemonade")).unwrap();
        session.increment(Shop::ProShop, &id("socks")).unwrap();
        session.clear_all();
        assert!(session.cart(Shop::Menu).is_empty());
        assert!(session.cart(Shop::ProShop).is_empty());
    }

    #[test]
    fn test_catalog_mismatch_rejected() {
        let result = OrderingSession::new(Catalog::pro_shop(), Catalog::menu(), TaxRate::DEFAULT);
        assert!(matches!(
            result,
            Err(SessionError::CatalogMismatch {
                expected: Shop::Menu,
                found: Shop::ProShop
            })
        ));
    }

    #[test]
    fn test_visible_items_follow_filter() {
        let mut session = OrderingSession::default();
        session
            .shop_mut(Shop::Menu)
            .filter_mut()
            .toggle(Category::Food);
        let visible: Vec<_> = session
            .shop(Shop::Menu)
            .visible_items()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(visible, ["chicken-caesar-wrap", "hamburger-fries"]);
    }
}
