use dioxus::prelude::*;

use crate::domain::entities::theme::Theme;
use crate::ui::style::colors;

#[component]
pub fn StatCard(theme: Theme, title: String, value: String) -> Element {
    let c = colors(theme);
    rsx! {
        div {
            style: "flex: 1 1 180px; background: {c.surface}; border: 1px solid {c.border}; border-radius: 8px; padding: 12px 16px;",
            div { style: "color: {c.muted}; font-size: 12px; text-transform: uppercase; letter-spacing: 0.04em;", "{title}" }
            div { style: "font-size: 24px; font-weight: 600; margin-top: 4px;", "{value}" }
        }
    }
}
