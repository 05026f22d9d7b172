//! Catalog browsing.
//!
//! # Usage
//!
//! ```bash
//! # Everything the pro shop sells
//! fairway catalog pro-shop
//!
//! # Only drinks from the menu
//! fairway catalog menu --category drinks
//! ```

use fairway_core::{CatalogItem, Category, Shop};
use tracing::info;

use super::CommandError;
use crate::catalog_file::resolve_catalog;
use crate::config::CliConfig;

/// List `shop`'s items, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if a configured catalog file cannot be loaded.
pub fn list(
    config: &CliConfig,
    shop: Shop,
    category: Option<Category>,
) -> Result<Vec<CatalogItem>, CommandError> {
    let catalog = resolve_catalog(config, shop)?;
    let items: Vec<CatalogItem> = catalog.filter(category).cloned().collect();

    match category {
        Some(category) => info!("{shop}: {category} ({} items)", items.len()),
        None => info!("{shop} ({} items)", items.len()),
    }
    for item in &items {
        info!(
            "  {:<22} {:>8}  {}",
            item.id.as_str(),
            item.price.to_string(),
            item.name
        );
    }

    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filters_by_category() {
        let config = CliConfig::default();
        let drinks = list(&config, Shop::Menu, Some(Category::Drinks)).unwrap();
        assert_eq!(drinks.len(), 6);
        assert!(drinks.iter().all(|item| item.category == Category::Drinks));

        let all = list(&config, Shop::ProShop, None).unwrap();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_list_category_with_no_items() {
        let snacks = list(&CliConfig::default(), Shop::Menu, Some(Category::Snacks)).unwrap();
        assert!(snacks.is_empty());
    }
}
