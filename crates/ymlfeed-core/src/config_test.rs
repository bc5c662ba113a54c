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
fn build_app_config_applies_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");
    assert!(cfg.graphql_endpoint.is_none());
    assert_eq!(cfg.shop_name, "Demo Shop");
    assert_eq!(cfg.shop_company, "Company");
    assert_eq!(cfg.shop_url, "https://demo.beseller.com");
    assert_eq!(cfg.currency, "BYN");
    assert_eq!(cfg.status_id, 1);
    assert_eq!(cfg.output_path, PathBuf::from("export.yml"));
    assert_eq!(cfg.http_timeout, Duration::from_secs(30));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.fetch_max_attempts, 3);
    assert_eq!(cfg.fetch_backoff_secs, 1);
    assert_eq!(cfg.products_page_size, 100);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("GRAPHQL_ENDPOINT", "https://api.example/graphql?token=abc");
    map.insert("SHOP_NAME", "Sneaker Hub");
    map.insert("CURRENCY", "USD");
    map.insert("STATUS_ID", "2");
    map.insert("OUTPUT_PATH", "/tmp/feed.yml");
    map.insert("HTTP_TIMEOUT", "45s");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.graphql_endpoint.as_deref(),
        Some("https://api.example/graphql?token=abc")
    );
    assert_eq!(cfg.shop_name, "Sneaker Hub");
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.status_id, 2);
    assert_eq!(cfg.output_path, PathBuf::from("/tmp/feed.yml"));
    assert_eq!(cfg.http_timeout, Duration::from_secs(45));
}

#[test]
fn build_app_config_treats_empty_values_as_unset() {
    let mut map = HashMap::new();
    map.insert("GRAPHQL_ENDPOINT", "");
    map.insert("SHOP_NAME", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.graphql_endpoint.is_none());
    assert_eq!(cfg.shop_name, "Demo Shop");
}

#[test]
fn build_app_config_fails_with_invalid_status_id() {
    let mut map = HashMap::new();
    map.insert("STATUS_ID", "new");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STATUS_ID"),
        "expected InvalidEnvVar(STATUS_ID), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("HTTP_TIMEOUT", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HTTP_TIMEOUT"),
        "expected InvalidEnvVar(HTTP_TIMEOUT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_attempts() {
    let mut map = HashMap::new();
    map.insert("FETCH_MAX_ATTEMPTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FETCH_MAX_ATTEMPTS"),
        "expected InvalidEnvVar(FETCH_MAX_ATTEMPTS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_endpoint() {
    let mut map = HashMap::new();
    map.insert("GRAPHQL_ENDPOINT", "https://api.example/graphql?token=secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn export_request_carries_shop_metadata() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let req = cfg.export_request();
    assert_eq!(req.status_id, 1);
    assert_eq!(req.shop.url, "https://demo.beseller.com");
    assert_eq!(req.shop.currency, "BYN");
    assert!(req.validate().is_ok());
}

#[test]
fn parse_timeout_accepts_bare_seconds_and_suffixes() {
    assert_eq!(parse_timeout("45"), Ok(Duration::from_secs(45)));
    assert_eq!(parse_timeout("30s"), Ok(Duration::from_secs(30)));
    assert_eq!(parse_timeout("500ms"), Ok(Duration::from_millis(500)));
    assert_eq!(parse_timeout("2m"), Ok(Duration::from_secs(120)));
}

#[test]
fn parse_timeout_rejects_garbage_and_zero() {
    assert!(parse_timeout("").is_err());
    assert!(parse_timeout("10h").is_err());
    assert!(parse_timeout("abc").is_err());
    assert!(parse_timeout("0").is_err());
}
