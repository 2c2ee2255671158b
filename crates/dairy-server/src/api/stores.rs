use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use dairy_core::{directions_url, Store};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct StoreItem {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub phone: String,
    pub hours: String,
    pub latitude: f64,
    pub longitude: f64,
    pub directions_url: String,
}

impl StoreItem {
    fn new(store: &Store, maps_base_url: &str) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            address: store.address.clone(),
            city: store.city.clone(),
            region: store.region.clone(),
            postal_code: store.postal_code.clone(),
            phone: store.phone.clone(),
            hours: store.hours.clone(),
            latitude: store.coordinates.latitude,
            longitude: store.coordinates.longitude,
            directions_url: directions_url(store, maps_base_url),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DirectionsItem {
    pub store_id: u32,
    pub address: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct StoreQuery {
    pub q: Option<String>,
}

pub(super) async fn list_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<StoreQuery>,
) -> Json<ApiResponse<Vec<StoreItem>>> {
    let stores = match query.q.as_deref() {
        Some(q) => state.stores.search(q),
        None => state.stores.stores(),
    };

    let data = stores
        .iter()
        .map(|s| StoreItem::new(s, &state.maps_base_url))
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn get_directions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<DirectionsItem>>, ApiError> {
    let store = state.stores.find(id).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("store {id} not found"),
        )
    })?;

    let data = DirectionsItem {
        store_id: store.id,
        address: store.full_address(),
        url: directions_url(store, &state.maps_base_url),
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}
