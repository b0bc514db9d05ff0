use crate::domain::entities::theme::Theme;

/// Best-effort guess at the desktop's light/dark setting from the
/// environment; anything unrecognised is light.
pub fn detect_system_theme() -> Theme {
    system_theme_from(
        std::env::var("GTK_THEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

pub fn system_theme_from(gtk_theme: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if gtk_theme
        .map(|name| name.to_ascii_lowercase().contains("dark"))
        .unwrap_or(false)
    {
        return Theme::Dark;
    }

    // "fg;bg" or "fg;default;bg": the last field is the background colour index.
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(bg) if bg <= 6 || bg == 8 => Theme::Dark,
        _ => Theme::Light,
    }
}
