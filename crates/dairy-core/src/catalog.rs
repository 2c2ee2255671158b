//! Loading a caller-supplied product list from YAML.

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::products::{default_products, Product};
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Load and validate a product list from a YAML file.
///
/// Duplicate identifiers are accepted as-is.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&catalog)?;

    tracing::debug!(
        path = %path.display(),
        products = catalog.products.len(),
        "loaded catalog file"
    );

    Ok(catalog)
}

/// Returns the supplied list, or the built-in catalog when it is empty.
#[must_use]
pub fn resolve_products(supplied: Vec<Product>) -> Arc<[Product]> {
    if supplied.is_empty() {
        default_products()
    } else {
        Arc::from(supplied)
    }
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), ConfigError> {
    for product in &catalog.products {
        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have a non-empty name",
                product.id
            )));
        }

        if product.category.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have a non-empty category",
                product.name
            )));
        }

        if product.price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "product '{}' has negative price {}",
                product.name, product.price
            )));
        }
    }

    Ok(())
}
