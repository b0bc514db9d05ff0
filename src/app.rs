use dioxus::prelude::*;
use tracing::{info, warn};

use crate::ui::state::app_state::{AppServices, AppState, Tab};
use crate::ui::style::{button_style, colors, page_style};
use crate::ui::views::distribution::DistributionView;
use crate::ui::views::manufacturers::ManufacturersView;
use crate::ui::views::medicines::MedicinesView;
use crate::ui::views::overview::OverviewView;
use crate::ui::views::prices::PricesView;

#[component]
pub fn App() -> Element {
    let services = use_context::<AppServices>();
    let initial_theme = services.current_theme();
    let app = AppState::new(initial_theme);
    use_context_provider(|| app);
    let AppState {
        mut theme,
        mut active_tab,
        mut open_dropdown,
        ..
    } = app;

    let current_theme = theme();
    let c = colors(current_theme);
    let toggle_label = if current_theme.is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };
    let toggle_style = button_style(current_theme, true);
    let root_style = page_style(current_theme);
    let api_base = services.config.api_base_url.clone();

    let settings = services.theme.clone();
    let toggle_theme = move |_: MouseEvent| {
        let next = match settings.lock() {
            Ok(mut settings) => {
                let next = settings.current().toggled();
                if let Err(err) = settings.set(next) {
                    warn!(error = %err, "failed to persist theme");
                }
                next
            }
            Err(_) => theme().toggled(),
        };
        info!(theme = next.as_str(), "theme changed");
        theme.set(next);
    };

    rsx! {
        div {
            onclick: move |_| {
                open_dropdown.set(None);
            },
            style: "{root_style}",

            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
                h2 { style: "margin: 0;", "Pharma Dash" }
                span { style: "color: {c.muted}; font-size: 12px;", "{api_base}" }
                div { style: "flex: 1;" }
                button {
                    style: "{toggle_style}",
                    onclick: toggle_theme,
                    "{toggle_label}"
                }
            }

            div {
                style: "display: flex; gap: 4px; margin-bottom: 12px; border-bottom: 1px solid {c.border};",
                {Tab::ALL.iter().map(|&tab| {
                    let selected = active_tab() == tab;
                    let border = if selected { c.accent } else { "transparent" };
                    let weight = if selected { "600" } else { "400" };
                    let label = tab.label();
                    rsx!(
                        button {
                            key: "{label}",
                            style: "border: none; border-bottom: 2px solid {border}; background: transparent; color: {c.text}; padding: 8px 14px; cursor: pointer; font-weight: {weight};",
                            onclick: move |_| active_tab.set(tab),
                            "{label}"
                        }
                    )
                })}
            }

            {match active_tab() {
                Tab::Overview => rsx! { OverviewView {} },
                Tab::Medicines => rsx! { MedicinesView {} },
                Tab::Manufacturers => rsx! { ManufacturersView {} },
                Tab::Prices => rsx! { PricesView {} },
                Tab::Distribution => rsx! { DistributionView {} },
            }}
        }
    }
}
