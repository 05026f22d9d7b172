//! YAML catalog files.
//!
//! A catalog file replaces a shop's built-in catalog:
//!
//! ```yaml
//! items:
//!   - id: coca-cola
//!     name: Coca Cola
//!     description: Classic refreshing cola served ice cold
//!     price: "3.50"
//!     category: Drinks
//! ```

use std::path::Path;

use fairway_core::{Catalog, CatalogError, CatalogItem, Shop};
use serde::Deserialize;
use thiserror::Error;

use crate::config::CliConfig;

#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<CatalogItem>,
}

/// Parse and validate a catalog for `shop` from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the items fail catalog
/// validation.
pub fn parse_catalog(shop: Shop, yaml: &str) -> Result<Catalog, CatalogFileError> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    Ok(Catalog::new(shop, file.items)?)
}

/// Read a catalog for `shop` from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(shop: Shop, path: &Path) -> Result<Catalog, CatalogFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = parse_catalog(shop, &content)?;
    tracing::debug!(%shop, path = %path.display(), items = catalog.len(), "Loaded catalog file");
    Ok(catalog)
}

/// The configured catalog for `shop`: the override file if set, otherwise
/// the built-in one.
///
/// # Errors
///
/// Returns an error if an override file is configured but unusable.
pub fn resolve_catalog(config: &CliConfig, shop: Shop) -> Result<Catalog, CatalogFileError> {
    config
        .catalog_path(shop)
        .map_or_else(|| Ok(Catalog::for_shop(shop)), |path| load_catalog(shop, path))
}
