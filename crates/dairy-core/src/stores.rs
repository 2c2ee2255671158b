//! Physical store directory and the store locator's local state.

use std::sync::{Arc, LazyLock};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A retail location. Coordinates are carried for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub name: String,
    /// Street line, e.g. `"123 Dairy Lane"`.
    pub address: String,
    pub city: String,
    /// State or region code.
    pub region: String,
    pub postal_code: String,
    pub phone: String,
    /// Free text, e.g. `"Daily: 8AM-9PM"`.
    pub hours: String,
    pub coordinates: Coordinates,
}

impl Store {
    /// `<address>, <city>, <region> <postal code>`
    #[must_use]
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.region, self.postal_code
        )
    }
}

/// Builds the map-service link for a store's address.
///
/// The address is percent-encoded into the `q` parameter; nothing is validated.
#[must_use]
pub fn directions_url(store: &Store, maps_base_url: &str) -> String {
    let encoded = utf8_percent_encode(&store.full_address(), NON_ALPHANUMERIC).to_string();
    let separator = if maps_base_url.contains('?') { '&' } else { '?' };
    format!("{maps_base_url}{separator}q={encoded}")
}

#[allow(clippy::too_many_arguments)]
fn store(
    id: u32,
    name: &str,
    address: &str,
    city: &str,
    region: &str,
    postal_code: &str,
    phone: &str,
    hours: &str,
    coordinates: (f64, f64),
) -> Store {
    Store {
        id,
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        postal_code: postal_code.to_string(),
        phone: phone.to_string(),
        hours: hours.to_string(),
        coordinates: Coordinates {
            latitude: coordinates.0,
            longitude: coordinates.1,
        },
    }
}

static DEFAULT_STORES: LazyLock<Arc<[Store]>> = LazyLock::new(|| {
    Arc::from(vec![
        store(
            1,
            "Mayank Dairy - Main Store",
            "123 Dairy Lane",
            "Milk City",
            "MC",
            "12345",
            "(555) 123-4567",
            "Mon-Sat: 8AM-8PM, Sun: 9AM-6PM",
            (40.7128, -74.006),
        ),
        store(
            2,
            "Mayank Dairy - Downtown",
            "456 Cheese Street",
            "Milk City",
            "MC",
            "12346",
            "(555) 987-6543",
            "Mon-Fri: 7AM-9PM, Sat-Sun: 8AM-7PM",
            (40.7145, -74.0083),
        ),
        store(
            3,
            "Mayank Dairy - Westside",
            "789 Yogurt Avenue",
            "Cream Valley",
            "CV",
            "54321",
            "(555) 456-7890",
            "Daily: 8AM-9PM",
            (40.7193, -74.012),
        ),
    ])
});

#[must_use]
pub fn default_stores() -> Arc<[Store]> {
    Arc::clone(&DEFAULT_STORES)
}

/// Read-only list of stores.
#[derive(Debug, Clone)]
pub struct StoreDirectory {
    stores: Arc<[Store]>,
}

impl Default for StoreDirectory {
    fn default() -> Self {
        Self {
            stores: default_stores(),
        }
    }
}

impl StoreDirectory {
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Records the search and returns every store.
    ///
    /// Narrowing by postal code or city is not implemented; the query is only logged.
    #[must_use]
    pub fn search(&self, query: &str) -> &[Store] {
        tracing::info!(query, "store search requested; returning unfiltered store list");
        &self.stores
    }
}

/// Which store locator tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreTab {
    #[default]
    List,
    /// Static placeholder image; no map integration.
    Map,
}

impl StoreTab {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "map" => StoreTab::Map,
            _ => StoreTab::List,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StoreTab::List => "list",
            StoreTab::Map => "map",
        }
    }
}

/// Local state of the store locator: search box text and selected tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreLocatorView {
    pub search_query: String,
    pub tab: StoreTab,
}

impl StoreLocatorView {
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn select_tab(&mut self, tab: StoreTab) {
        self.tab = tab;
    }

    /// Submits the current search box text against `directory`.
    #[must_use]
    pub fn submit_search<'a>(&self, directory: &'a StoreDirectory) -> &'a [Store] {
        directory.search(&self.search_query)
    }
}
