//! Catalog view-model: the filter state a catalog page owns, plus the card
//! presentation records rendered from it.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::app_config::AppConfig;
use crate::catalog::resolve_products;
use crate::filter::{derive_categories, filter_products, find_product};
use crate::products::{CategoryFilter, Product};

/// Free-text query plus selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// `true` when neither the query nor the category narrows the list.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }
}

/// Owns the displayed product list, its derived categories, and the filter state.
#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Arc<[Product]>,
    categories: Vec<CategoryFilter>,
    state: FilterState,
}

impl CatalogView {
    /// Builds a view over `products`, or over the built-in catalog when empty.
    #[must_use]
    pub fn new(products: Arc<[Product]>) -> Self {
        let products = if products.is_empty() {
            resolve_products(Vec::new())
        } else {
            products
        };
        let categories = derive_categories(&products);
        Self {
            products,
            categories,
            state: FilterState::default(),
        }
    }

    /// Replaces the product list and re-derives the category tabs.
    ///
    /// The filter state is kept; a category that vanished simply matches nothing.
    pub fn set_products(&mut self, products: Arc<[Product]>) {
        let state = std::mem::take(&mut self.state);
        *self = Self::new(products);
        self.state = state;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
    }

    pub fn apply(&mut self, state: FilterState) {
        self.state = state;
    }

    /// Clears the query and selects "all" in one update.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    /// Products passing the current filter, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.state.query, &self.state.category)
    }

    /// `true` when the current filter hides every product.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.visible().is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        find_product(&self.products, id)
    }
}

type ProductHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Optional "view details" and "add to cart" handlers.
///
/// Both receive the product identifier. A missing handler does nothing.
#[derive(Default)]
pub struct CardActions {
    view_details: Option<ProductHandler>,
    add_to_cart: Option<ProductHandler>,
}

impl CardActions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_view_details(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.view_details = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_add_to_cart(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.add_to_cart = Some(Box::new(handler));
        self
    }

    pub fn view_details(&self, product_id: &str) {
        if let Some(handler) = &self.view_details {
            handler(product_id);
        }
    }

    pub fn add_to_cart(&self, product_id: &str) {
        if let Some(handler) = &self.add_to_cart {
            handler(product_id);
        }
    }
}

impl std::fmt::Debug for CardActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardActions")
            .field("view_details", &self.view_details.is_some())
            .field("add_to_cart", &self.add_to_cart.is_some())
            .finish()
    }
}

/// How card prices and descriptions are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFormat {
    pub currency_symbol: String,
    pub description_max_chars: usize,
}

impl Default for CardFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            description_max_chars: 80,
        }
    }
}

impl CardFormat {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            description_max_chars: config.description_max_chars,
        }
    }
}

/// A product as shown on a catalog card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub is_new: bool,
}

impl ProductCard {
    #[must_use]
    pub fn from_product(product: &Product, format: &CardFormat) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: format_price(product.price, &format.currency_symbol),
            category: product.category.clone(),
            description: truncate_description(&product.description, format.description_max_chars),
            image: product.image.clone(),
            is_new: false,
        }
    }
}

/// Formats a price with two decimal places, e.g. `$2.99`.
#[must_use]
pub fn format_price(price: Decimal, currency_symbol: &str) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{currency_symbol}{rounded}")
}

/// Cuts `text` to at most `max_chars` characters, ending with an ellipsis when cut.
#[must_use]
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
