use std::fmt::Display;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Remote data of one view plus where its last request stands.
///
/// A failed request keeps the previous payload; stale-but-valid data stays
/// visible next to the error.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub status: LoadStatus,
    pub data: T,
    pub has_data: bool,
    pub loaded_at: Option<DateTime<Local>>,
}

impl<T: Default> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
            data: T::default(),
            has_data: false,
            loaded_at: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn settle<E: Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.has_data = true;
                self.loaded_at = Some(Local::now());
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                self.status = LoadStatus::Error(err.to_string());
            }
        }
    }

    /// A fetch is in flight, or none has run yet. Tables show a spinner
    /// instead of "no rows" while this holds and they have nothing to show.
    pub fn is_loading(&self) -> bool {
        match self.status {
            LoadStatus::Loading => true,
            LoadStatus::Idle => !self.has_data,
            LoadStatus::Loaded | LoadStatus::Error(_) => false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn loaded_label(&self) -> Option<String> {
        self.loaded_at
            .map(|at| at.format("%H:%M:%S").to_string())
    }
}
