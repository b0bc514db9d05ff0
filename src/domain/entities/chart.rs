use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::entities::theme::Theme;

const LIGHT_COLORS: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

const DARK_COLORS: [&str; 10] = [
    "#8cb4e8", "#ffb36b", "#ff8a8c", "#a5e0db", "#8fd67f", "#ffe27a", "#d9a6cc", "#ffc4cb",
    "#c9a38c", "#ddd6d2",
];

/// How a category picks its palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBinding {
    /// Index modulo palette length; a category recolours when order shifts.
    Positional,
    /// Stable hash of the category key.
    #[default]
    Hashed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
    binding: ColorBinding,
}

impl Palette {
    pub fn new(colors: Vec<String>, binding: ColorBinding) -> Self {
        let colors = if colors.is_empty() {
            vec!["#888888".to_string()]
        } else {
            colors
        };
        Self { colors, binding }
    }

    pub fn for_theme(theme: Theme) -> Self {
        let colors = match theme {
            Theme::Light => LIGHT_COLORS,
            Theme::Dark => DARK_COLORS,
        };
        Self::new(
            colors.iter().map(|color| color.to_string()).collect(),
            ColorBinding::default(),
        )
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn color(&self, index: usize, key: &str) -> &str {
        let slot = match self.binding {
            ColorBinding::Positional => index % self.colors.len(),
            ColorBinding::Hashed => stable_slot(key, self.colors.len()),
        };
        &self.colors[slot]
    }
}

/// Palette slot derived from the first eight bytes of SHA-256(key).
pub fn stable_slot(key: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let digest = Sha256::digest(key.as_bytes());
    let mut prefix = [0_u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % len as u64) as usize
}

/// Pie/donut slice in the `{id, label, value, color}` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Column/bar point in the `{name, y, color}` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub name: String,
    pub y: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapNode {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobePoint {
    pub lat: f64,
    pub lng: f64,
    pub size: f64,
    pub color: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeArc {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub stroke: f64,
    pub color: String,
    pub label: String,
}
