use crate::app_config::AppConfig;
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
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    // Multipliers and blend weights must be finite and non-negative.
    let parse_weight = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(
                var,
                format!("must be a finite, non-negative number (got {value})"),
            ));
        }
        Ok(value)
    };

    let log_level = or_default("SOV_LOG_LEVEL", "info");
    let brands_path = PathBuf::from(or_default("SOV_BRANDS_PATH", "./config/brands.yaml"));
    let query = or_default("SOV_QUERY", "smart ceiling fan india");
    let country_code = or_default("SOV_COUNTRY_CODE", "IN");
    let apify_api_token = lookup("APIFY_API_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());

    let max_results = parse_usize("SOV_MAX_RESULTS", "20")?;
    if max_results == 0 {
        return Err(invalid("SOV_MAX_RESULTS", "must be at least 1".to_string()));
    }

    let request_timeout_secs = parse_u64("SOV_REQUEST_TIMEOUT_SECS", "120")?;
    let max_retries = parse_u32("SOV_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("SOV_RETRY_BACKOFF_BASE_MS", "1000")?;

    let video_multiplier = parse_weight("SOV_VIDEO_MULTIPLIER", "1.0")?;
    let web_multiplier = parse_weight("SOV_WEB_MULTIPLIER", "1.5")?;
    let mention_weight = parse_weight("SOV_MENTION_WEIGHT", "0.5")?;
    if mention_weight > 1.0 {
        return Err(invalid(
            "SOV_MENTION_WEIGHT",
            format!("must be within [0, 1] (got {mention_weight})"),
        ));
    }

    Ok(AppConfig {
        log_level,
        brands_path,
        query,
        max_results,
        country_code,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        video_multiplier,
        web_multiplier,
        mention_weight,
        apify_api_token,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
