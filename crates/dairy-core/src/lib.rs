pub mod app_config;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod navbar;
pub mod products;
pub mod stores;
pub mod view;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, resolve_products, CatalogFile};
pub use config::{load_app_config, load_app_config_from_env, validate_maps_base_url};
pub use filter::{derive_categories, filter_products, find_product};
pub use navbar::{NavLink, NavbarState, NAV_LINKS};
pub use products::{default_products, CategoryFilter, Product, ALL_CATEGORIES};
pub use stores::{
    default_stores, directions_url, Coordinates, Store, StoreDirectory, StoreLocatorView, StoreTab,
};
pub use view::{
    format_price, truncate_description, CardActions, CardFormat, CatalogView, FilterState,
    ProductCard,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
