use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::domain::entities::page::DEFAULT_PAGE_SIZE;
use crate::domain::entities::theme::Theme;
use crate::usecase::services::sample_service::FallbackSource;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings. Defaults below, each overridable from the environment
/// (a `.env` file is honoured).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend root every endpoint path is appended to.
    pub api_base_url: String,
    pub page_size: usize,
    pub request_timeout: Duration,
    pub fallback: FallbackSource,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Forces the initial theme when nothing is stored yet.
    pub theme_default: Option<Theme>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            fallback: FallbackSource::Disabled,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            theme_default: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup("PHARMA_DASH_API_URL").filter(|v| !v.trim().is_empty()) {
            cfg.api_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup("PHARMA_DASH_PAGE_SIZE") {
            let page_size: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("PHARMA_DASH_PAGE_SIZE is not a number: {raw}"))?;
            if page_size == 0 {
                bail!("PHARMA_DASH_PAGE_SIZE must be greater than zero")
            }
            cfg.page_size = page_size;
        }

        if let Some(raw) = lookup("PHARMA_DASH_TIMEOUT_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("PHARMA_DASH_TIMEOUT_MS is not a number: {raw}"))?;
            cfg.request_timeout = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("PHARMA_DASH_FALLBACK") {
            cfg.fallback = parse_fallback(&raw);
        }

        if let Some(raw) = lookup("PHARMA_DASH_THEME") {
            let theme = raw
                .parse::<Theme>()
                .with_context(|| format!("PHARMA_DASH_THEME must be light or dark: {raw}"))?;
            cfg.theme_default = Some(theme);
        }

        cfg.log_filter = lookup("PHARMA_DASH_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(cfg)
    }
}

/// `off` / `builtin`, anything else is a directory of CSV samples.
pub fn parse_fallback(raw: &str) -> FallbackSource {
    match raw.trim() {
        "" => FallbackSource::Disabled,
        value => match value.to_ascii_lowercase().as_str() {
            "off" | "none" | "disabled" | "false" | "0" => FallbackSource::Disabled,
            "builtin" | "built-in" | "demo" | "sample" => FallbackSource::BuiltIn,
            _ => FallbackSource::Directory(PathBuf::from(value)),
        },
    }
}
