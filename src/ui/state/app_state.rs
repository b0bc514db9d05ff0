use std::sync::{Arc, Mutex};

use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::domain::entities::theme::Theme;
use crate::usecase::ports::api::RegistryApi;
use crate::usecase::services::sample_service::SampleData;
use crate::usecase::services::theme_service::ThemeSettings;

/// Long-lived collaborators handed to the component tree as root context.
#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub api: Arc<dyn RegistryApi>,
    pub samples: Arc<SampleData>,
    pub theme: Arc<Mutex<ThemeSettings>>,
}

impl AppServices {
    pub fn current_theme(&self) -> Theme {
        self.theme
            .lock()
            .map(|settings| settings.current())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Medicines,
    Manufacturers,
    Prices,
    Distribution,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Medicines,
        Tab::Manufacturers,
        Tab::Prices,
        Tab::Distribution,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Medicines => "Medicines",
            Tab::Manufacturers => "Manufacturers",
            Tab::Prices => "Prices",
            Tab::Distribution => "Distribution",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: Signal<Theme>,
    pub active_tab: Signal<Tab>,
    pub open_dropdown: Signal<Option<&'static str>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
}

impl AppState {
    pub fn new(initial_theme: Theme) -> Self {
        Self {
            theme: use_signal(|| initial_theme),
            active_tab: use_signal(|| Tab::Overview),
            open_dropdown: use_signal(|| None::<&'static str>),
            dropdown_pos: use_signal(|| None::<(f64, f64)>),
        }
    }
}
