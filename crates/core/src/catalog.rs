//! Orderable reference data for the clubhouse menu and the pro shop.
//!
//! A [`Catalog`] is immutable once built. Lookups return an [`ItemLookup`]
//! so callers handle an unknown id as an explicit branch instead of getting
//! a silent zero price.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, ItemId, Money, Shop};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog item: {0}")]
    DuplicateId(ItemId),
    #[error("catalog item {0} has a negative price")]
    NegativePrice(ItemId),
    #[error("catalog item {id} is priced at {price}, which is not a whole number of cents")]
    FractionalCents { id: ItemId, price: Decimal },
    #[error("catalog item {id} is in category {category}, which the {shop} does not sell")]
    WrongShop {
        id: ItemId,
        category: Category,
        shop: Shop,
    },
}

/// A single orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    /// Name shown on the item card and in the order summary.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Money,
    pub category: Category,
}

/// Result of looking an id up in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLookup<'a> {
    Found(&'a CatalogItem),
    Missing(&'a ItemId),
}

impl ItemLookup<'_> {
    /// Unit price, zero when the item is missing.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        match self {
            Self::Found(item) => item.price,
            Self::Missing(_) => Money::ZERO,
        }
    }

    /// Display name, empty when the item is missing.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Found(item) => &item.name,
            Self::Missing(_) => "",
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// The items one shop sells, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    shop: Shop,
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog for `shop`.
    ///
    /// # Errors
    ///
    /// Returns an error if two items share an id, an item's price is negative
    /// or not a whole number of cents, or an item's category belongs to the
    /// other shop.
    pub fn new(shop: Shop, items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.price.is_negative() {
                return Err(CatalogError::NegativePrice(item.id.clone()));
            }
            if item.price.rounded() != item.price.amount() {
                return Err(CatalogError::FractionalCents {
                    id: item.id.clone(),
                    price: item.price.amount(),
                });
            }
            if item.category.shop() != shop {
                return Err(CatalogError::WrongShop {
                    id: item.id.clone(),
                    category: item.category,
                    shop,
                });
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { shop, items, index })
    }

    /// The clubhouse menu served on the course.
    #[must_use]
    pub fn menu() -> Self {
        Self::builtin(
            Shop::Menu,
            &[
                (
                    "coca-cola",
                    "Coca Cola",
                    "Classic refreshing cola served ice cold",
                    350,
                    Category::Drinks,
                ),
                (
                    "diet-coke",
                    "Diet Coke",
                    "Zero-calorie cola with the same great taste",
                    350,
                    Category::Drinks,
                ),
                (
                    "sprite",
                    "Sprite",
                    "Refreshing lemon-lime soda",
                    450,
                    Category::Drinks,
                ),
                (
                    "lemonade",
                    "Lemonade",
                    "Freshly squeezed lemon juice with sugar",
                    350,
                    Category::Drinks,
                ),
                (
                    "hot-coffee",
                    "Hot Coffee",
                    "Rich and flavorful coffee served hot",
                    450,
                    Category::Drinks,
                ),
                (
                    "iced-coffee",
                    "Iced Coffee",
                    "Cool and refreshing iced coffee",
                    450,
                    Category::Drinks,
                ),
                (
                    "chicken-caesar-wrap",
                    "Chicken Caesar Wrap",
                    "Grilled chicken, romaine and parmesan in a flour wrap",
                    1295,
                    Category::Food,
                ),
                (
                    "hamburger-fries",
                    "Hamburger w/French Fries",
                    "Quarter-pound burger with a side of fries",
                    1595,
                    Category::Food,
                ),
            ],
        )
    }

    /// The pro shop's counter stock.
    #[must_use]
    pub fn pro_shop() -> Self {
        Self::builtin(
            Shop::ProShop,
            &[
                (
                    "golf-balls",
                    "Golf Balls (12pk)",
                    "Premium quality golf balls for maximum performance",
                    350,
                    Category::Equipment,
                ),
                (
                    "golf-tees",
                    "Golf Tees (25pk)",
                    "Durable wooden tees in various lengths",
                    350,
                    Category::Accessories,
                ),
                (
                    "glove",
                    "Glove (RH)",
                    "Premium leather glove for enhanced grip",
                    450,
                    Category::Accessories,
                ),
                (
                    "socks",
                    "Pair White Socks",
                    "Comfortable cotton blend golf socks",
                    350,
                    Category::Merch,
                ),
                (
                    "divot-tool",
                    "Divot Tool",
                    "Sturdy metal divot repair tool",
                    450,
                    Category::Equipment,
                ),
                (
                    "head-cover",
                    "Head Cover",
                    "Protective cover for your club heads",
                    450,
                    Category::Accessories,
                ),
            ],
        )
    }

    /// The built-in catalog for `shop`.
    #[must_use]
    pub fn for_shop(shop: Shop) -> Self {
        match shop {
            Shop::Menu => Self::menu(),
            Shop::ProShop => Self::pro_shop(),
        }
    }

    fn builtin(shop: Shop, rows: &[(&'static str, &str, &str, i64, Category)]) -> Self {
        let items: Vec<CatalogItem> = rows
            .iter()
            .map(|&(id, name, description, cents, category)| CatalogItem {
                id: ItemId::from_static(id),
                name: name.to_string(),
                description: description.to_string(),
                price: Money::from_cents(cents),
                category,
            })
            .collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        Self { shop, items, index }
    }

    #[must_use]
    pub const fn shop(&self) -> Shop {
        self.shop
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// Look up `id`, keeping the miss as a value.
    #[must_use]
    pub fn lookup<'a>(&'a self, id: &'a ItemId) -> ItemLookup<'a> {
        self.get(id)
            .map_or(ItemLookup::Missing(id), ItemLookup::Found)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Items in `category`, or every item when no category is selected.
    pub fn filter(&self, category: Option<Category>) -> impl Iterator<Item = &CatalogItem> {
        self.items
            .iter()
            .filter(move |item| category.is_none_or(|c| item.category == c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Category chip selection on a shop page.
///
/// Selecting the active category again clears the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilter(Option<Category>);

impl CategoryFilter {
    pub fn toggle(&mut self, category: Category) {
        self.0 = if self.0 == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Category> {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64, category: Category) -> CatalogItem {
        CatalogItem {
            id: ItemId::parse(id).unwrap(),
            name: id.to_uppercase(),
            description: String::new(),
            price: Money::from_cents(cents),
            category,
        }
    }

    #[test]
    fn test_builtin_catalogs_are_valid() {
        for shop in Shop::ALL {
            let builtin = Catalog::for_shop(shop);
            assert_eq!(builtin.shop(), shop);
            let rebuilt = Catalog::new(shop, builtin.items().to_vec());
            assert!(rebuilt.is_ok(), "{shop} catalog failed validation");
        }
    }

    #[test]
    fn test_lookup_found_and_missing() {
        let catalog = Catalog::menu();
        let coke = ItemId::parse("coca-cola").unwrap();
        let ghost = ItemId::parse("root-beer").unwrap();

        let found = catalog.lookup(&coke);
        assert!(!found.is_missing());
        assert_eq!(found.unit_price(), Money::from_cents(350));
        assert_eq!(found.display_name(), "Coca Cola");

        let missing = catalog.lookup(&ghost);
        assert_eq!(missing, ItemLookup::Missing(&ghost));
        assert_eq!(missing.unit_price(), Money::ZERO);
        assert_eq!(missing.display_name(), "");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(
            Shop::Menu,
            vec![
                item("sprite", 450, Category::Drinks),
                item("sprite", 500, Category::Drinks),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.as_str() == "sprite"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(Shop::Menu, vec![item("refund", -100, Category::Snacks)]);
        assert!(matches!(result, Err(CatalogError::NegativePrice(_))));
    }

    #[test]
    fn test_fractional_cent_price_rejected() {
        let mut half_cent = item("penny-candy", 0, Category::Snacks);
        half_cent.price = Money::new(Decimal::new(5, 3));

        let result = Catalog::new(Shop::Menu, vec![half_cent]);
        assert!(matches!(
            result,
            Err(CatalogError::FractionalCents { ref id, .. }) if id.as_str() == "penny-candy"
        ));
    }

    #[test]
    fn test_trailing_zero_precision_accepted() {
        let mut pretzels = item("pretzels", 0, Category::Snacks);
        pretzels.price = Money::new(Decimal::new(2250, 3));

        assert!(Catalog::new(Shop::Menu, vec![pretzels]).is_ok());
    }

    #[test]
    fn test_category_from_other_shop_rejected() {
        let result = Catalog::new(Shop::Menu, vec![item("glove", 450, Category::Accessories)]);
        assert!(matches!(
            result,
            Err(CatalogError::WrongShop {
                shop: Shop::Menu,
                ..
            })
        ));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::pro_shop();
        let accessories: Vec<_> = catalog
            .filter(Some(Category::Accessories))
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(accessories, ["golf-tees", "glove", "head-cover"]);
        assert_eq!(catalog.filter(None).count(), catalog.len());
    }

    #[test]
    fn test_category_filter_toggle() {
        let mut filter = CategoryFilter::default();
        filter.toggle(Category::Drinks);
        assert_eq!(filter.selected(), Some(Category::Drinks));
        filter.toggle(Category::Food);
        assert_eq!(filter.selected(), Some(Category::Food));
        filter.toggle(Category::Food);
        assert_eq!(filter.selected(), None);
    }

    #[test]
    fn test_deserialize_item_from_json() {
        let json = r#"{"id":"sprite","name":"Sprite","price":"4.50","category":"Drinks"}"#;
        let parsed: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.price, Money::from_cents(450));
        assert!(parsed.description.is_empty());
    }
}
