//! Catalog listing commands.
//!
//! Both commands resolve the product list the same way the server does: the
//! `--catalog` flag wins, then `DAIRY_CATALOG_PATH`, then the built-in list.

use std::path::Path;
use std::sync::Arc;

use dairy_core::{
    format_price, truncate_description, AppConfig, CatalogView, CategoryFilter, FilterState,
    Product,
};

/// Load the product list for a command run.
///
/// # Errors
///
/// Returns an error if a catalog file is configured but cannot be loaded.
pub(crate) fn load_products(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> anyhow::Result<Arc<[Product]>> {
    let path = override_path.or(config.catalog_path.as_deref());
    let supplied = match path {
        Some(path) => dairy_core::load_catalog(path)?.products,
        None => Vec::new(),
    };
    Ok(dairy_core::resolve_products(supplied))
}

/// Render the product table for a filtered view.
pub(crate) fn product_table(view: &CatalogView, config: &AppConfig) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<6}{:<20}{:<10}{:<10}DESCRIPTION",
        "ID", "NAME", "CATEGORY", "PRICE"
    )];
    for product in view.visible() {
        lines.push(format!(
            "{:<6}{:<20}{:<10}{:<10}{}",
            product.id,
            product.name,
            product.category,
            format_price(product.price, &config.currency_symbol),
            truncate_description(&product.description, config.description_max_chars),
        ));
    }
    lines
}

/// List products matching `query` within `category`.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub(crate) fn run_products(
    config: &AppConfig,
    catalog: Option<&Path>,
    query: &str,
    category: &str,
) -> anyhow::Result<()> {
    let mut view = CatalogView::new(load_products(config, catalog)?);
    view.apply(FilterState::new(query, CategoryFilter::parse(category)));

    if view.is_empty_result() {
        println!("No products found matching your criteria.");
        return Ok(());
    }

    for line in product_table(&view, config) {
        println!("{line}");
    }
    Ok(())
}

/// List category tabs in display order, `all` first.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub(crate) fn run_categories(config: &AppConfig, catalog: Option<&Path>) -> anyhow::Result<()> {
    let view = CatalogView::new(load_products(config, catalog)?);
    for category in view.categories() {
        println!("{category}");
    }
    Ok(())
}
