use crate::domain::entities::table::Alignment;
use crate::domain::entities::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub danger: &'static str,
}

pub fn colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => ThemeColors {
            background: "#f4f6f9",
            surface: "#ffffff",
            text: "#1f2933",
            muted: "#6b7785",
            border: "#d5dbe3",
            accent: "#2f6fde",
            accent_soft: "#eef4ff",
            danger: "#c23b3b",
        },
        Theme::Dark => ThemeColors {
            background: "#11161d",
            surface: "#1a222c",
            text: "#e4e9ef",
            muted: "#8d99a8",
            border: "#2c3745",
            accent: "#6ea2ff",
            accent_soft: "#223552",
            danger: "#ff7a7a",
        },
    }
}

pub fn page_style(theme: Theme) -> String {
    let c = colors(theme);
    format!(
        "min-height: 100vh; background: {}; color: {}; font-family: system-ui, sans-serif; padding: 16px; box-sizing: border-box;",
        c.background, c.text
    )
}

pub fn panel_style(theme: Theme) -> String {
    let c = colors(theme);
    format!(
        "background: {}; border: 1px solid {}; border-radius: 8px; padding: 12px; margin-bottom: 16px;",
        c.surface, c.border
    )
}

pub fn button_style(theme: Theme, enabled: bool) -> String {
    let c = colors(theme);
    let (cursor, opacity) = if enabled {
        ("pointer", "1")
    } else {
        ("default", "0.45")
    };
    format!(
        "border: 1px solid {}; background: {}; color: {}; padding: 4px 10px; border-radius: 6px; cursor: {cursor}; opacity: {opacity};",
        c.border, c.surface, c.text
    )
}

pub fn table_container_style(theme: Theme) -> String {
    let c = colors(theme);
    format!(
        "overflow-x: auto; border: 1px solid {}; border-radius: 6px;",
        c.border
    )
}

pub fn table_header_cell_style(theme: Theme, align: Alignment) -> String {
    let c = colors(theme);
    format!(
        "text-align: {}; padding: 6px 10px; border-bottom: 1px solid {}; background: {}; position: sticky; top: 0; white-space: nowrap;",
        align.css(),
        c.border,
        c.accent_soft
    )
}

pub fn table_cell_style(theme: Theme, align: Alignment) -> String {
    let c = colors(theme);
    format!(
        "text-align: {}; padding: 6px 10px; border-bottom: 1px solid {};",
        align.css(),
        c.border
    )
}
