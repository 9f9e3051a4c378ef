use anyhow::{Context, Result, anyhow};
use std::{str::FromStr, time::Duration};

use crate::view::DEFAULT_PAGE_SIZE;

/// Where and how the upstream commerce API is reached.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Prefix for relative asset paths returned by the API.
    pub image_url: String,
    pub timeout: Duration,
    /// Retries for idempotent reads; zero disables retrying.
    pub max_retries: usize,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            image_url: base_url.clone(),
            base_url,
            timeout: Duration::from_secs(15),
            max_retries: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub otel_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub page_size: usize,
    pub api: ApiConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let base_url =
            std::env::var("API_BASE_URL").context("Missing environment variable: API_BASE_URL")?;

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let mut api = ApiConfig::new(base_url);

        if let Some(image_url) = optional_var("IMAGE_URL") {
            api.image_url = image_url;
        }

        let timeout_secs: u64 = parse_var("API_TIMEOUT_SECS", 15)?;
        api.timeout = Duration::from_secs(timeout_secs);
        api.max_retries = parse_var("API_MAX_RETRIES", 2)?;

        let page_size: usize = parse_var("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(anyhow!("PAGE_SIZE must be greater than zero"));
        }

        let log = LogConfig {
            dev_mode: flag_var("DEV_MODE"),
            enable_file_log: flag_var("ENABLE_FILE_LOG"),
            otel_endpoint: optional_var("OTEL_ENDPOINT"),
        };

        Ok(Self {
            port,
            page_size,
            api,
            log,
        })
    }
}

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag_var(key: &str) -> bool {
    optional_var(key).is_some_and(|v| v == "true" || v == "1")
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_var(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_trims_trailing_slash_and_defaults_image_host() {
        let api = ApiConfig::new("https://api.shop.test/api/");
        assert_eq!(api.base_url, "https://api.shop.test/api");
        assert_eq!(api.image_url, "https://api.shop.test/api");
        assert_eq!(api.max_retries, 2);
    }
}
