use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML product list. `None` serves the built-in sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Base of the "get directions" link, e.g. `https://maps.google.com/`.
    pub maps_base_url: String,
    pub currency_symbol: String,
    /// Product card descriptions are cut to this many characters.
    pub description_max_chars: usize,
}
