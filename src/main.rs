mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::AppConfig;
use crate::infra::http::client::HttpRegistryApi;
use crate::infra::sqlite::repo::SqlitePreferenceRepo;
use crate::platform::desktop::appearance::detect_system_theme;
use crate::platform::desktop::paths::{default_db_path, default_webview_data_dir};
use crate::ui::state::app_state::AppServices;
use crate::usecase::ports::repo::PreferenceRepository;
use crate::usecase::services::sample_service::SampleData;
use crate::usecase::services::theme_service::ThemeSettings;

fn main() -> Result<()> {
    let cfg = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_filter))
        .init();

    info!(api = %cfg.api_base_url, page_size = cfg.page_size, "starting pharma-dash");

    let repo = SqlitePreferenceRepo {
        db_path: default_db_path().context("resolve preference database path")?,
    };
    if let Err(err) = repo.init() {
        warn!(error = %err, "preference store unavailable; theme changes will not persist");
    }
    let system_theme = cfg.theme_default.unwrap_or_else(detect_system_theme);
    let theme = ThemeSettings::initialize(Arc::new(repo), system_theme);

    let api = HttpRegistryApi::new(&cfg.api_base_url, cfg.request_timeout)?;
    let samples = SampleData::load(&cfg.fallback)?;

    let services = AppServices {
        config: Arc::new(cfg),
        api: Arc::new(api),
        samples: Arc::new(samples),
        theme: Arc::new(Mutex::new(theme)),
    };

    let webview_data_dir = default_webview_data_dir().context("resolve webview data directory")?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Pharma Dash"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(services)
        .launch(App);

    Ok(())
}
