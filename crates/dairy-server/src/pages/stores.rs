use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use dairy_core::{Store, StoreLocatorView, StoreTab};
use serde::Deserialize;

use super::{encode_query_value, escape_html, layout, not_found_page, BRAND_NAME};
use crate::api::AppState;

const MAP_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1569336415962-a4bd9f69c07a?w=800&q=80";

#[derive(Debug, Default, Deserialize)]
pub(super) struct StorePageQuery {
    pub q: Option<String>,
    pub view: Option<String>,
}

impl StorePageQuery {
    fn into_view(self) -> StoreLocatorView {
        let mut locator = StoreLocatorView::default();
        if let Some(q) = self.q {
            locator.set_search_query(q);
        }
        locator.select_tab(StoreTab::parse(self.view.as_deref().unwrap_or_default()));
        locator
    }
}

/// Renders the locator: search form, list/map tabs, and the selected tab body.
pub(super) fn render_store_locator(locator: &StoreLocatorView, stores: &[Store]) -> String {
    let query = escape_html(&locator.search_query);
    let encoded_query = encode_query_value(&locator.search_query);

    let tab = |target: StoreTab, label: &str| {
        let class = if locator.tab == target { "tab active" } else { "tab" };
        format!(
            r#"<a class="{class}" href="/stores?view={}&amp;q={encoded_query}">{label}</a>"#,
            target.as_str()
        )
    };

    let content = match locator.tab {
        StoreTab::List => stores.iter().map(render_store).collect::<String>(),
        StoreTab::Map => format!(
            r#"<div class="map-placeholder">
<img src="{MAP_PLACEHOLDER}" alt="Map placeholder">
<p>Interactive map would be displayed here with store locations marked.</p>
</div>"#
        ),
    };

    format!(
        r#"<section class="store-locator" id="stores">
<div class="section-heading">
<h2>Find a {BRAND_NAME} Store</h2>
<p>Locate our stores to purchase fresh dairy products near you</p>
</div>
<form class="store-search" method="get" action="/stores">
<input type="text" name="q" placeholder="Enter zip code or city" value="{query}">
<input type="hidden" name="view" value="{view}">
<button type="submit">Search</button>
</form>
<nav class="tabs" role="tablist">{list_tab}{map_tab}</nav>
<div class="tab-content">{content}</div>
<div class="store-help">
<h3>Can't find a store near you?</h3>
<p>Contact us to inquire about delivery options or to suggest a new store location.</p>
<a class="button outline" href="/contact">Contact Us</a>
</div>
</section>"#,
        view = locator.tab.as_str(),
        list_tab = tab(StoreTab::List, "List View"),
        map_tab = tab(StoreTab::Map, "Map View"),
    )
}

fn render_store(store: &Store) -> String {
    format!(
        r#"<article class="store-card">
<div>
<h3>{name}</h3>
<p class="address">{address}</p>
<p class="hours">{hours}</p>
<p class="phone">{phone}</p>
</div>
<a class="button outline" href="/stores/{id}/directions" target="_blank" rel="noopener">Get Directions</a>
</article>"#,
        name = escape_html(&store.name),
        address = escape_html(&store.full_address()),
        hours = escape_html(&store.hours),
        phone = escape_html(&store.phone),
        id = store.id,
    )
}

pub(super) async fn stores_page(
    State(state): State<AppState>,
    Query(query): Query<StorePageQuery>,
) -> Html<String> {
    let has_search = query.q.is_some();
    let locator = query.into_view();
    let stores = if has_search {
        locator.submit_search(&state.stores)
    } else {
        state.stores.stores()
    };

    let body = render_store_locator(&locator, stores);
    Html(layout("Store Locator", &state.navbar(), &body))
}

/// The "get directions" action: hands the browser off to the map service.
pub(super) async fn open_directions(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.stores.find(id) {
        Some(store) => {
            let url = dairy_core::directions_url(store, &state.maps_base_url);
            tracing::info!(store_id = id, %url, "opening directions");
            Redirect::to(&url).into_response()
        }
        None => not_found_page(&state.navbar(), &format!("No store with id {id}.")),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use dairy_core::StoreDirectory;

    use super::*;
    use crate::pages::tests::get_html;

    #[test]
    fn query_maps_to_locator_view() {
        let locator = StorePageQuery {
            q: Some("Milk City".to_string()),
            view: Some("map".to_string()),
        }
        .into_view();
        assert_eq!(locator.search_query, "Milk City");
        assert_eq!(locator.tab, StoreTab::Map);
    }

    #[test]
    fn list_tab_renders_every_store() {
        let directory = StoreDirectory::default();
        let html = render_store_locator(&StoreLocatorView::default(), directory.stores());
        assert_eq!(html.matches("store-card").count(), 3);
        assert!(html.contains("123 Dairy Lane, Milk City, MC 12345"));
        assert!(html.contains(r#"href="/stores/3/directions" target="_blank""#));
        assert!(!html.contains("map-placeholder"));
    }

    #[test]
    fn map_tab_renders_placeholder_only() {
        let directory = StoreDirectory::default();
        let mut locator = StoreLocatorView::default();
        locator.select_tab(StoreTab::Map);
        let html = render_store_locator(&locator, directory.stores());
        assert!(html.contains("map-placeholder"));
        assert!(!html.contains("store-card"));
    }

    #[tokio::test]
    async fn search_does_not_narrow_the_list() {
        let (status, html) = get_html("/stores?q=54321").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("store-card").count(), 3);
        assert!(html.contains(r#"value="54321""#));
    }

    #[tokio::test]
    async fn unknown_store_directions_is_404() {
        let (status, _) = get_html("/stores/9/directions").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
