mod products;
mod stores;

pub(crate) use products::CatalogQuery;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use dairy_core::{
    AppConfig, CardActions, CardFormat, CatalogView, FilterState, NavbarState, Product,
    StoreDirectory,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

/// Shared, read-only catalog data plus the in-memory cart counter.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<[Product]>,
    pub stores: StoreDirectory,
    pub card_format: CardFormat,
    pub maps_base_url: Arc<str>,
    pub actions: Arc<CardActions>,
    cart_items: Arc<AtomicUsize>,
}

impl AppState {
    #[must_use]
    pub fn from_app_config(products: Arc<[Product]>, config: &AppConfig) -> Self {
        Self::new(
            products,
            CardFormat::from_app_config(config),
            config.maps_base_url.as_str(),
        )
    }

    /// Wires the card actions: details views are logged, cart adds bump the counter.
    #[must_use]
    pub fn new(products: Arc<[Product]>, card_format: CardFormat, maps_base_url: &str) -> Self {
        let cart_items = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cart_items);

        let actions = CardActions::new()
            .on_view_details(|product_id| {
                tracing::info!(product_id, "product details viewed");
            })
            .on_add_to_cart(move |product_id| {
                let cart_items = counter.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::info!(product_id, cart_items, "product added to cart");
            });

        Self {
            products,
            stores: StoreDirectory::default(),
            card_format,
            maps_base_url: Arc::from(maps_base_url),
            actions: Arc::new(actions),
            cart_items,
        }
    }

    /// A fresh catalog view over the shared products with `filter` applied.
    #[must_use]
    pub fn catalog_view(&self, filter: FilterState) -> CatalogView {
        let mut view = CatalogView::new(Arc::clone(&self.products));
        view.apply(filter);
        view
    }

    #[must_use]
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        dairy_core::find_product(&self.products, id)
    }

    #[must_use]
    pub fn cart_item_count(&self) -> usize {
        self.cart_items.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn navbar(&self) -> NavbarState {
        NavbarState::with_cart_items(self.cart_item_count())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/{id}", get(products::get_product))
        .route("/api/v1/categories", get(products::list_categories))
        .route("/api/v1/cart", get(products::cart_summary))
        .route("/api/v1/stores", get(stores::list_stores))
        .route(
            "/api/v1/stores/{id}/directions",
            get(stores::get_directions),
        )
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(crate::pages::router())
        .merge(api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse::new(HealthData { status: "ok" }, req_id.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::LOCATION, Request};
    use dairy_core::default_products;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_app(test_state())
    }

    fn test_state() -> AppState {
        AppState::new(
            default_products(),
            CardFormat::default(),
            "https://maps.google.com/",
        )
    }

    async fn send(app: Router, method: &str, uri: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = send(app, "GET", uri).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    fn names(json: &serde_json::Value) -> Vec<String> {
        json["data"]
            .as_array()
            .expect("data array")
            .iter()
            .map(|p| p["name"].as_str().expect("name").to_string())
            .collect()
    }

    #[test]
    fn api_error_not_found_maps_to_404() {
        let response = ApiError::new("req-1", "not_found", "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_unknown_code_maps_to_500() {
        let response = ApiError::new("req-1", "boom", "unexpected").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn catalog_view_applies_filter() {
        let state = test_state();
        let view = state.catalog_view(FilterState::new(
            "",
            dairy_core::CategoryFilter::parse("butter"),
        ));
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn find_product_by_id() {
        let state = test_state();
        assert_eq!(state.find_product("4").map(|p| p.name.as_str()), Some("Butter"));
        assert!(state.find_product("44").is_none());
    }

    #[tokio::test]
    async fn health_returns_ok_with_request_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "req-abc")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "req-abc"
        );
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["meta"]["request_id"], "req-abc");
    }

    #[tokio::test]
    async fn request_id_generated_when_missing() {
        let response = send(test_app(), "GET", "/api/v1/health").await;
        let id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn list_products_unfiltered_returns_full_catalog() {
        let (status, json) = get_json(test_app(), "/api/v1/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            names(&json),
            vec![
                "Fresh Milk",
                "Greek Yogurt",
                "Cheddar Cheese",
                "Butter",
                "Paneer",
                "Flavored Yogurt"
            ]
        );
    }

    #[tokio::test]
    async fn list_products_by_query() {
        let (status, json) = get_json(test_app(), "/api/v1/products?q=YoGuRt&category=all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&json), vec!["Greek Yogurt", "Flavored Yogurt"]);
    }

    #[tokio::test]
    async fn list_products_by_category() {
        let (status, json) = get_json(test_app(), "/api/v1/products?category=cheese").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&json), vec!["Cheddar Cheese", "Paneer"]);
        assert_eq!(json["data"][0]["price"], "4.99");
        assert_eq!(json["data"][0]["price_display"], "$4.99");
    }

    #[tokio::test]
    async fn list_products_no_match_is_empty_not_error() {
        let (status, json) = get_json(test_app(), "/api/v1/products?q=zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"].as_array().expect("data array").is_empty());
    }

    #[tokio::test]
    async fn get_product_by_id() {
        let (status, json) = get_json(test_app(), "/api/v1/products/5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["name"], "Paneer");
        assert_eq!(json["data"]["category"], "cheese");
    }

    #[tokio::test]
    async fn get_product_unknown_is_404() {
        let (status, json) = get_json(test_app(), "/api/v1/products/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn list_categories_starts_with_all() {
        let (status, json) = get_json(test_app(), "/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"],
            serde_json::json!(["all", "milk", "yogurt", "cheese", "butter"])
        );
    }

    #[tokio::test]
    async fn list_stores_ignores_search_query() {
        let (status, json) = get_json(test_app(), "/api/v1/stores?q=54321").await;
        assert_eq!(status, StatusCode::OK);
        let stores = json["data"].as_array().expect("data array");
        assert_eq!(stores.len(), 3);
        assert_eq!(stores[0]["name"], "Mayank Dairy - Main Store");
        assert!(stores[0]["directions_url"]
            .as_str()
            .unwrap()
            .starts_with("https://maps.google.com/?q=123%20Dairy%20Lane"));
    }

    #[tokio::test]
    async fn store_directions_json() {
        let (status, json) = get_json(test_app(), "/api/v1/stores/2/directions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["store_id"], 2);
        assert_eq!(
            json["data"]["address"],
            "456 Cheese Street, Milk City, MC 12346"
        );
    }

    #[tokio::test]
    async fn store_directions_unknown_store_is_404() {
        let (status, json) = get_json(test_app(), "/api/v1/stores/77/directions").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "not_found");
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
    }

    #[tokio::test]
    async fn add_to_cart_keeps_filter_and_counts() {
        let app = test_app();

        let response = post_form(
            app.clone(),
            "/products/2/cart",
            "return_to=%2Fproducts%3Fcategory%3Dyogurt%26q%3Dgreek",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/products?category=yogurt&q=greek"
        );

        let (_, json) = get_json(app, "/api/v1/cart").await;
        assert_eq!(json["data"]["item_count"], 1);
    }

    #[tokio::test]
    async fn add_to_cart_without_form_lands_on_catalog() {
        let response = send(test_app(), "POST", "/products/2/cart").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/products");
    }

    #[tokio::test]
    async fn add_to_cart_ignores_off_site_return_url() {
        let response = post_form(
            test_app(),
            "/products/2/cart",
            "return_to=https%3A%2F%2Fevil.example%2F",
        )
        .await;
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/products");
    }

    #[tokio::test]
    async fn add_unknown_product_to_cart_is_404() {
        let app = test_app();
        let response = send(app.clone(), "POST", "/products/404/cart").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let (_, json) = get_json(app, "/api/v1/cart").await;
        assert_eq!(json["data"]["item_count"], 0);
    }

    #[tokio::test]
    async fn directions_page_redirects_to_maps() {
        let response = send(test_app(), "GET", "/stores/3/directions").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://maps.google.com/?q=789%20Yogurt%20Avenue%2C%20Cream%20Valley%2C%20CV%2054321"
        );
    }
}
