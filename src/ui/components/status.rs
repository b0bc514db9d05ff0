use dioxus::prelude::*;

use crate::domain::entities::theme::Theme;
use crate::domain::entities::view_state::{LoadStatus, ViewState};
use crate::ui::style::colors;

/// Snapshot of a `ViewState` the status line needs, detached from its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub status: LoadStatus,
    pub loaded_label: Option<String>,
    pub from_sample: bool,
}

impl StatusLine {
    pub fn of<T>(state: &ViewState<T>, from_sample: bool) -> Self {
        Self {
            status: state.status.clone(),
            loaded_label: state.loaded_label(),
            from_sample,
        }
    }
}

#[component]
pub fn StatusBar(theme: Theme, line: StatusLine) -> Element {
    let c = colors(theme);
    let badge = "display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: 12px;";

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; min-height: 22px; margin: 6px 0; color: {c.muted}; font-size: 13px;",
            {match &line.status {
                LoadStatus::Loading => rsx! {
                    span { style: "{badge} background: {c.accent_soft}; color: {c.accent};", "Loading…" }
                },
                LoadStatus::Idle | LoadStatus::Loaded => rsx! {},
                LoadStatus::Error(message) => rsx! {
                    span {
                        style: "{badge} border: 1px solid {c.danger}; color: {c.danger};",
                        title: "{message}",
                        "Request failed: {message}"
                    }
                },
            }}
            if line.from_sample {
                span {
                    style: "{badge} border: 1px dashed {c.border}; color: {c.text};",
                    "Sample data"
                }
            }
            if let Some(label) = &line.loaded_label {
                span { "Updated {label}" }
            }
        }
    }
}
