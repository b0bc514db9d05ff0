//! Reshapes fetched aggregates into chart props. Nothing here aggregates raw
//! records; the only ordering applied is the explicit top-N ranking.

use crate::domain::entities::chart::{
    BarPoint, GlobeArc, GlobePoint, LineChart, LineSeries, Palette, PieSlice, TreemapNode,
};
use crate::domain::entities::payload::ChartPayload;
use crate::domain::entities::record::{CategoryCount, CountryVolume, ManufacturerRecord, TradeRoute};

pub const DEFAULT_TOP_N: usize = 10;
const MIN_ARC_STROKE: f64 = 0.3;
const MAX_ARC_STROKE: f64 = 2.0;

/// Stable descending ranking by `value`; ties keep input order, NaN sorts last.
pub fn top_n_by<T, F>(rows: &[T], n: usize, value: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let key = |row: &T| {
        let v = value(row);
        if v.is_nan() {
            f64::NEG_INFINITY
        } else {
            v
        }
    };
    let mut ranked: Vec<&T> = rows.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked.into_iter().take(n).cloned().collect()
}

pub fn top_n_by_value(rows: &[CategoryCount], n: usize) -> Vec<CategoryCount> {
    top_n_by(rows, n, |row| row.value)
}

pub fn pie_slices(rows: &[CategoryCount], palette: &Palette) -> Vec<PieSlice> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| PieSlice {
            id: row.category.clone(),
            label: row.category.clone(),
            value: row.value,
            color: palette.color(idx, &row.category).to_string(),
        })
        .collect()
}

pub fn bar_points(rows: &[CategoryCount], palette: &Palette) -> Vec<BarPoint> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| BarPoint {
            name: row.category.clone(),
            y: row.value,
            color: palette.color(idx, &row.category).to_string(),
        })
        .collect()
}

pub fn manufacturer_bars(rows: &[ManufacturerRecord], n: usize, palette: &Palette) -> Vec<BarPoint> {
    top_n_by(rows, n, |row| row.product_count as f64)
        .into_iter()
        .enumerate()
        .map(|(idx, row)| BarPoint {
            color: palette.color(idx, &row.manufacturer).to_string(),
            y: row.product_count as f64,
            name: row.manufacturer,
        })
        .collect()
}

/// Two-level treemap: one parent per country (first-seen order), one leaf
/// per manufacturer.
pub fn treemap_nodes(rows: &[ManufacturerRecord], palette: &Palette) -> Vec<TreemapNode> {
    let mut parents: Vec<TreemapNode> = Vec::new();
    let mut leaves = Vec::with_capacity(rows.len());

    for row in rows {
        if !parents.iter().any(|parent| parent.id == row.country) {
            let idx = parents.len();
            parents.push(TreemapNode {
                id: row.country.clone(),
                parent: None,
                name: row.country.clone(),
                value: None,
                color: Some(palette.color(idx, &row.country).to_string()),
            });
        }
        leaves.push(TreemapNode {
            id: format!("{}/{}", row.country, row.manufacturer),
            parent: Some(row.country.clone()),
            name: row.manufacturer.clone(),
            value: Some(row.product_count as f64),
            color: None,
        });
    }

    parents.extend(leaves);
    parents
}

pub fn line_chart(payload: &ChartPayload, palette: &Palette) -> LineChart {
    LineChart {
        categories: payload.labels.clone(),
        series: payload
            .series
            .iter()
            .enumerate()
            .map(|(idx, series)| LineSeries {
                name: series.name.clone(),
                color: palette.color(idx, &series.name).to_string(),
                data: series.data.clone(),
            })
            .collect(),
    }
}

/// Point size is the country's share of the largest volume, in `[0, 1]`.
pub fn globe_points(rows: &[CountryVolume], palette: &Palette) -> Vec<GlobePoint> {
    let max = rows.iter().map(|row| row.count).fold(0.0_f64, f64::max);
    rows.iter()
        .enumerate()
        .map(|(idx, row)| GlobePoint {
            lat: row.lat,
            lng: row.lng,
            size: if max > 0.0 { row.count / max } else { 0.0 },
            color: palette.color(idx, &row.country).to_string(),
            label: format!("{}: {}", row.country, format_number(row.count)),
        })
        .collect()
}

pub fn globe_arcs(routes: &[TradeRoute], palette: &Palette) -> Vec<GlobeArc> {
    let max = routes.iter().map(|route| route.volume).fold(0.0_f64, f64::max);
    routes
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            let ratio = if max > 0.0 { route.volume / max } else { 0.0 };
            GlobeArc {
                start_lat: route.from_lat,
                start_lng: route.from_lng,
                end_lat: route.to_lat,
                end_lng: route.to_lng,
                stroke: MIN_ARC_STROKE + (MAX_ARC_STROKE - MIN_ARC_STROKE) * ratio,
                color: palette.color(idx, &route.from_country).to_string(),
                label: format!(
                    "{} → {}: {}",
                    route.from_country,
                    route.to_country,
                    format_number(route.volume)
                ),
            }
        })
        .collect()
}

/// Thousands separators; fractional values keep two decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let negative = value < 0.0;
    let cents_total = (value.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if cents > 0 {
        grouped.push_str(&format!(".{cents:02}"));
    }
    if negative && cents_total > 0 {
        grouped.insert(0, '-');
    }
    grouped
}
