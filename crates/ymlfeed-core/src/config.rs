use std::path::PathBuf;
use std::time::Duration;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load exporter configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load exporter configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Empty values count as unset. Every variable has a default except
/// `GRAPHQL_ENDPOINT`, which the CLI may still supply.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let get = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.is_empty()) };

    let or_default = |var: &str, default: &str| -> String {
        get(var).unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_i32 = |var: &str, default: &str| -> Result<i32, ConfigError> {
        or_default(var, default)
            .parse::<i32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let graphql_endpoint = get("GRAPHQL_ENDPOINT");
    let shop_name = or_default("SHOP_NAME", "Demo Shop");
    let shop_company = or_default("SHOP_COMPANY", "Company");
    let shop_url = or_default("SHOP_URL", "https://demo.beseller.com");
    let currency = or_default("CURRENCY", "BYN");
    let status_id = parse_i32("STATUS_ID", "1")?;
    let output_path = PathBuf::from(or_default("OUTPUT_PATH", "export.yml"));
    let http_timeout =
        parse_timeout(&or_default("HTTP_TIMEOUT", "30")).map_err(|e| invalid("HTTP_TIMEOUT", e))?;
    let log_level = or_default("LOG_LEVEL", "info");

    let fetch_max_attempts = parse_u32("FETCH_MAX_ATTEMPTS", "3")?;
    if fetch_max_attempts == 0 {
        return Err(invalid(
            "FETCH_MAX_ATTEMPTS",
            "must be at least 1".to_string(),
        ));
    }
    let fetch_backoff_secs = parse_u64("FETCH_BACKOFF_SECS", "1")?;
    let products_page_size = parse_u32("PRODUCTS_PAGE_SIZE", "100")?;

    Ok(AppConfig {
        graphql_endpoint,
        shop_name,
        shop_company,
        shop_url,
        currency,
        status_id,
        output_path,
        http_timeout,
        log_level,
        fetch_max_attempts,
        fetch_backoff_secs,
        products_page_size,
    })
}

/// Parse a timeout given as bare seconds (`"45"`) or with a unit suffix
/// (`"500ms"`, `"30s"`, `"2m"`).
///
/// # Errors
///
/// Returns a human-readable reason when the value is not a whole number
/// with an optional known suffix, or is zero.
pub fn parse_timeout(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let split = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);
    let value = digits
        .parse::<u64>()
        .map_err(|_| format!("'{raw}' is not a duration (expected e.g. 30, 30s, 500ms, 2m)"))?;

    let duration = match unit {
        "" | "s" => Duration::from_secs(value),
        "ms" => Duration::from_millis(value),
        "m" => Duration::from_secs(value.saturating_mul(60)),
        other => return Err(format!("unknown duration unit '{other}' in '{raw}'")),
    };

    if duration.is_zero() {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(duration)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
