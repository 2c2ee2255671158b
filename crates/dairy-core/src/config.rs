use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("DAIRY_ENV", "development"))?;

    let bind_addr = or_default("DAIRY_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("DAIRY_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("DAIRY_LOG_LEVEL", "info");

    let catalog_path = lookup("DAIRY_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let maps_base_url = or_default("DAIRY_MAPS_BASE_URL", "https://maps.google.com/");
    validate_maps_base_url("DAIRY_MAPS_BASE_URL", &maps_base_url)?;

    let currency_symbol = or_default("DAIRY_CURRENCY_SYMBOL", "$");

    let description_max_chars = or_default("DAIRY_DESCRIPTION_MAX_CHARS", "80")
        .parse::<usize>()
        .map_err(|e| invalid("DAIRY_DESCRIPTION_MAX_CHARS", e.to_string()))?;
    if description_max_chars == 0 {
        return Err(invalid(
            "DAIRY_DESCRIPTION_MAX_CHARS",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        maps_base_url,
        currency_symbol,
        description_max_chars,
    })
}

/// Reject a directions base that is not an http(s) URL. `source` names where
/// the value came from and is reported as the error's `var`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` when the scheme is missing or not http(s).
pub fn validate_maps_base_url(source: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: source.to_string(),
            reason: format!("expected an http(s) URL, got '{url}'"),
        })
    }
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DAIRY_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
