use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::theme::Theme;
use crate::usecase::ports::repo::{PreferenceRepository, RepoError};

pub const THEME_KEY: &str = "theme";

/// Light/dark preference, read once at startup and persisted on change.
pub struct ThemeSettings {
    repo: Arc<dyn PreferenceRepository>,
    current: Theme,
}

impl ThemeSettings {
    /// Uses the stored value when it parses, otherwise `system_default`.
    /// A store that cannot be read also falls back to `system_default`.
    pub fn initialize(repo: Arc<dyn PreferenceRepository>, system_default: Theme) -> Self {
        let current = match repo.load_preference(THEME_KEY) {
            Ok(Some(stored)) => match stored.parse::<Theme>() {
                Ok(theme) => theme,
                Err(err) => {
                    warn!(%err, "ignoring stored theme");
                    system_default
                }
            },
            Ok(None) => system_default,
            Err(err) => {
                warn!(%err, "failed to read theme preference");
                system_default
            }
        };
        info!(theme = %current, "theme initialised");
        Self { repo, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// The in-memory value changes even when persisting fails.
    pub fn set(&mut self, theme: Theme) -> Result<(), RepoError> {
        self.current = theme;
        self.repo.upsert_preference(THEME_KEY, theme.as_str())
    }

    pub fn toggle(&mut self) -> Result<Theme, RepoError> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
