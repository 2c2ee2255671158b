use std::sync::{Arc, LazyLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// A single sellable dairy item shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Assumed unique within a catalog; never checked.
    pub id: String,
    pub name: String,
    /// Non-negative, currency-agnostic.
    pub price: Decimal,
    pub description: String,
    /// Free-form label, e.g. `"yogurt"`.
    pub category: String,
    /// Image URI.
    pub image: String,
}

impl Product {
    /// Returns `true` if `needle` occurs in the name or description.
    ///
    /// `needle` must already be lowercased; the product text is folded here.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Category selection for the catalog: either the "all" sentinel or one label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a raw selection. Empty input and `"all"` both mean no filter.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }

    /// Category labels are compared exactly.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(selected) => selected,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        CategoryFilter::parse(raw)
    }
}

fn product(
    id: &str,
    name: &str,
    cents: i64,
    description: &str,
    category: &str,
    image: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        description: description.to_string(),
        category: category.to_string(),
        image: image.to_string(),
    }
}

static DEFAULT_PRODUCTS: LazyLock<Arc<[Product]>> = LazyLock::new(|| {
    Arc::from(vec![
        product(
            "1",
            "Fresh Milk",
            299,
            "Farm-fresh whole milk, pasteurized and ready to drink.",
            "milk",
            "https://images.unsplash.com/photo-1563636619-e9143da7973b?w=400&q=80",
        ),
        product(
            "2",
            "Greek Yogurt",
            349,
            "Creamy Greek yogurt made with traditional techniques.",
            "yogurt",
            "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=400&q=80",
        ),
        product(
            "3",
            "Cheddar Cheese",
            499,
            "Aged cheddar cheese with rich, sharp flavor.",
            "cheese",
            "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d?w=400&q=80",
        ),
        product(
            "4",
            "Butter",
            249,
            "Creamy butter made from pure cow milk.",
            "butter",
            "https://images.unsplash.com/photo-1589985270958-bf087b2d451d?w=400&q=80",
        ),
        product(
            "5",
            "Paneer",
            599,
            "Fresh homemade paneer, perfect for Indian dishes.",
            "cheese",
            "https://images.unsplash.com/photo-1631452180519-c014fe946bc7?w=400&q=80",
        ),
        product(
            "6",
            "Flavored Yogurt",
            199,
            "Delicious fruit-flavored yogurt with real fruit pieces.",
            "yogurt",
            "https://images.unsplash.com/photo-1570696516188-ade861b84a49?w=400&q=80",
        ),
    ])
});

/// The built-in six-item sample catalog, used when no product list is supplied.
#[must_use]
pub fn default_products() -> Arc<[Product]> {
    Arc::clone(&DEFAULT_PRODUCTS)
}
