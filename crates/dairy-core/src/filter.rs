//! Catalog filtering and category derivation.
//!
//! Both are linear scans that preserve the input order.

use std::collections::HashSet;

use crate::products::{CategoryFilter, Product, ALL_CATEGORIES};

/// Returns the products matching both the category selection and the query.
///
/// The query is a case-insensitive substring of the name or description; an
/// empty query matches everything. No match yields an empty vec.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(&p.category) && p.matches_query(&needle))
        .collect()
}

/// First product with identifier `id`. Identifiers are not required to be unique.
#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Returns `[All, <distinct categories in first-occurrence order>]`.
///
/// A product literally labelled `"all"` folds into the sentinel. Every other
/// label, the empty string included, gets its own entry.
#[must_use]
pub fn derive_categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];

    for product in products {
        if product.category == ALL_CATEGORIES {
            continue;
        }
        if seen.insert(product.category.as_str()) {
            categories.push(CategoryFilter::Only(product.category.clone()));
        }
    }

    categories
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
