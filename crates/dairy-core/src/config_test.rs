use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "DAIRY_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.catalog_path.is_none());
    assert_eq!(cfg.maps_base_url, "https://maps.google.com/");
    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.description_max_chars, 80);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("DAIRY_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAIRY_BIND_ADDR"),
        "expected InvalidEnvVar(DAIRY_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_misspelled_env() {
    let mut map = HashMap::new();
    map.insert("DAIRY_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAIRY_ENV"),
        "expected InvalidEnvVar(DAIRY_ENV), got: {result:?}"
    );
}

#[test]
fn catalog_path_override() {
    let mut map = HashMap::new();
    map.insert("DAIRY_CATALOG_PATH", "./config/products.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.catalog_path.as_deref(),
        Some(std::path::Path::new("./config/products.yaml"))
    );
}

#[test]
fn blank_catalog_path_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("DAIRY_CATALOG_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn maps_base_url_override() {
    let mut map = HashMap::new();
    map.insert("DAIRY_MAPS_BASE_URL", "https://www.openstreetmap.org/search");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.maps_base_url, "https://www.openstreetmap.org/search");
}

#[test]
fn maps_base_url_without_scheme_fails() {
    let mut map = HashMap::new();
    map.insert("DAIRY_MAPS_BASE_URL", "maps.google.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAIRY_MAPS_BASE_URL"),
        "expected InvalidEnvVar(DAIRY_MAPS_BASE_URL), got: {result:?}"
    );
}

#[test]
fn currency_symbol_override() {
    let mut map = HashMap::new();
    map.insert("DAIRY_CURRENCY_SYMBOL", "₹");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.currency_symbol, "₹");
}

#[test]
fn description_max_chars_override() {
    let mut map = HashMap::new();
    map.insert("DAIRY_DESCRIPTION_MAX_CHARS", "120");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.description_max_chars, 120);
}

#[test]
fn description_max_chars_invalid() {
    let mut map = HashMap::new();
    map.insert("DAIRY_DESCRIPTION_MAX_CHARS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAIRY_DESCRIPTION_MAX_CHARS"),
        "expected InvalidEnvVar(DAIRY_DESCRIPTION_MAX_CHARS), got: {result:?}"
    );
}

#[test]
fn description_max_chars_zero_fails() {
    let mut map = HashMap::new();
    map.insert("DAIRY_DESCRIPTION_MAX_CHARS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAIRY_DESCRIPTION_MAX_CHARS"),
        "expected InvalidEnvVar(DAIRY_DESCRIPTION_MAX_CHARS), got: {result:?}"
    );
}

#[test]
fn validate_maps_base_url_reports_its_source() {
    assert!(validate_maps_base_url("--maps-base-url", "http://localhost:8080/maps").is_ok());
    let result = validate_maps_base_url("--maps-base-url", "ftp://maps.example");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "--maps-base-url"),
        "expected InvalidEnvVar(--maps-base-url), got: {result:?}"
    );
}
