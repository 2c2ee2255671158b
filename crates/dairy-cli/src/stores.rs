//! Store directory commands.

use dairy_core::{directions_url, AppConfig, StoreDirectory, StoreLocatorView};

/// Render the store table.
pub(crate) fn store_table(stores: &[dairy_core::Store]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<4}{:<26}{:<16}{:<32}ADDRESS",
        "ID", "NAME", "PHONE", "HOURS"
    )];
    for store in stores {
        lines.push(format!(
            "{:<4}{:<26}{:<16}{:<32}{}",
            store.id,
            store.name,
            store.phone,
            store.hours,
            store.full_address()
        ));
    }
    lines
}

pub(crate) fn run_stores(search: Option<&str>) {
    let directory = StoreDirectory::default();
    let stores = match search {
        Some(search) => {
            let mut locator = StoreLocatorView::default();
            locator.set_search_query(search);
            locator.submit_search(&directory)
        }
        None => directory.stores(),
    };

    for line in store_table(stores) {
        println!("{line}");
    }
}

/// The `--maps-base-url` flag when given, checked like `DAIRY_MAPS_BASE_URL`;
/// otherwise the configured base.
///
/// # Errors
///
/// Returns an error if the flag is not an http(s) URL.
pub(crate) fn maps_base_url<'a>(
    flag: Option<&'a str>,
    config: &'a AppConfig,
) -> anyhow::Result<&'a str> {
    match flag {
        Some(url) => {
            dairy_core::validate_maps_base_url("--maps-base-url", url)?;
            Ok(url)
        }
        None => Ok(&config.maps_base_url),
    }
}

/// Print the directions URL for store `id`.
///
/// # Errors
///
/// Returns an error if no store has the given id.
pub(crate) fn run_directions(id: u32, maps_base_url: &str) -> anyhow::Result<()> {
    let directory = StoreDirectory::default();
    let store = directory
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("store {id} not found; run `stores` to list ids"))?;

    println!("{}", directions_url(store, maps_base_url));
    Ok(())
}
