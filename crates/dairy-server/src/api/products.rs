use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use dairy_core::{
    format_price, truncate_description, CardFormat, CategoryFilter, FilterState, Product,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ProductItem {
    id: String,
    name: String,
    price: Decimal,
    price_display: String,
    description: String,
    description_short: String,
    category: String,
    image: String,
}

impl ProductItem {
    fn new(product: &Product, format: &CardFormat) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            price_display: format_price(product.price, &format.currency_symbol),
            description: product.description.clone(),
            description_short: truncate_description(
                &product.description,
                format.description_max_chars,
            ),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// `?q=` and `?category=` as sent by the catalog search box and tabs.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    pub(crate) fn into_filter(self) -> FilterState {
        FilterState::new(
            self.q.unwrap_or_default(),
            CategoryFilter::parse(self.category.as_deref().unwrap_or_default()),
        )
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CartSummary {
    item_count: usize,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CatalogQuery>,
) -> Json<ApiResponse<Vec<ProductItem>>> {
    let view = state.catalog_view(query.into_filter());
    let data = view
        .visible()
        .into_iter()
        .map(|p| ProductItem::new(p, &state.card_format))
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductItem>>, ApiError> {
    let Some(product) = state.find_product(&id) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("product '{id}' not found"),
        ));
    };

    Ok(Json(ApiResponse::new(
        ProductItem::new(product, &state.card_format),
        req_id.0,
    )))
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let view = state.catalog_view(FilterState::default());
    let data = view.categories().iter().map(ToString::to_string).collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn cart_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CartSummary>> {
    Json(ApiResponse::new(
        CartSummary {
            item_count: state.cart_item_count(),
        },
        req_id.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_query_defaults_to_unfiltered() {
        let filter = CatalogQuery::default().into_filter();
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn catalog_query_maps_fields() {
        let filter = CatalogQuery {
            q: Some("milk".to_string()),
            category: Some("butter".to_string()),
        }
        .into_filter();
        assert_eq!(filter.query, "milk");
        assert_eq!(filter.category, CategoryFilter::parse("butter"));
    }

    #[test]
    fn product_item_serializes_display_fields() {
        let products = dairy_core::default_products();
        let item = ProductItem::new(&products[1], &CardFormat::default());
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["price"], "3.49");
        assert_eq!(json["price_display"], "$3.49");
        assert_eq!(json["category"], "yogurt");
    }
}
