//! SVG renderings of the chart props built in `chart_service`.

use std::f64::consts::PI;

use dioxus::prelude::*;

use crate::domain::entities::chart::{BarPoint, GlobeArc, GlobePoint, LineChart, PieSlice, TreemapNode};
use crate::domain::entities::theme::Theme;
use crate::ui::style::colors;
use crate::usecase::services::chart_service::format_number;

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 280.0;
const MAP_WIDTH: f64 = 720.0;
const MAP_HEIGHT: f64 = 360.0;

/// Equirectangular projection onto a `width` x `height` canvas.
pub fn project(lat: f64, lng: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (lng.clamp(-180.0, 180.0) + 180.0) / 360.0 * width;
    let y = (90.0 - lat.clamp(-90.0, 90.0)) / 180.0 * height;
    (x, y)
}

/// SVG path of a ring segment between two angles (radians, clockwise from 12 o'clock).
pub fn wedge_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full circle collapses to a zero-length arc.
    let end = if end - start >= 2.0 * PI { start + 2.0 * PI - 1e-6 } else { end };
    let point = |r: f64, angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let large = if end - start > PI { 1 } else { 0 };
    let (ox1, oy1) = point(outer, start);
    let (ox2, oy2) = point(outer, end);
    let (ix2, iy2) = point(inner, end);
    let (ix1, iy1) = point(inner, start);
    format!(
        "M {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox2:.2} {oy2:.2} L {ix2:.2} {iy2:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
    )
}

/// Start and end angle of every slice; non-positive values get no sweep.
pub fn slice_angles(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    let mut cursor = 0.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = if total > 0.0 {
                slice.value.max(0.0) / total * 2.0 * PI
            } else {
                0.0
            };
            let span = (cursor, cursor + sweep);
            cursor += sweep;
            span
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreemapRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Slice-and-dice layout: parents split the width, their leaves split the height.
pub fn treemap_rects(nodes: &[TreemapNode], width: f64, height: f64) -> Vec<TreemapRect> {
    let parents: Vec<&TreemapNode> = nodes.iter().filter(|n| n.parent.is_none()).collect();
    let leaves_of = |id: &str| -> Vec<&TreemapNode> {
        nodes
            .iter()
            .filter(|n| n.parent.as_deref() == Some(id))
            .collect()
    };
    let weight = |leaves: &[&TreemapNode]| -> f64 {
        leaves.iter().map(|n| n.value.unwrap_or(0.0).max(0.0)).sum()
    };

    let grand_total: f64 = parents.iter().map(|p| weight(&leaves_of(&p.id))).sum();
    if grand_total <= 0.0 {
        return Vec::new();
    }

    let mut rects = Vec::new();
    let mut x = 0.0;
    for parent in parents {
        let leaves = leaves_of(&parent.id);
        let parent_total = weight(&leaves);
        if parent_total <= 0.0 {
            continue;
        }
        let column = parent_total / grand_total * width;
        let color = parent.color.clone().unwrap_or_else(|| "#888888".to_string());
        let mut y = 0.0;
        for leaf in leaves {
            let value = leaf.value.unwrap_or(0.0).max(0.0);
            let row = value / parent_total * height;
            rects.push(TreemapRect {
                label: leaf.name.clone(),
                value,
                x,
                y,
                width: column,
                height: row,
                color: leaf.color.clone().unwrap_or_else(|| color.clone()),
            });
            y += row;
        }
        x += column;
    }
    rects
}

#[component]
pub fn ChartFrame(theme: Theme, title: String, children: Element) -> Element {
    let c = colors(theme);
    rsx! {
        div {
            style: "flex: 1 1 520px; background: {c.surface}; border: 1px solid {c.border}; border-radius: 8px; padding: 12px;",
            div { style: "font-weight: 600; margin-bottom: 8px;", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn BarChart(theme: Theme, title: String, points: Vec<BarPoint>) -> Element {
    let c = colors(theme);
    let max = points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    let label_width = 160.0;
    let row_height = 22.0;
    let height = (points.len() as f64 * row_height).max(row_height);
    let bar_space = CHART_WIDTH - label_width - 60.0;

    rsx! {
        ChartFrame { theme, title,
            if points.is_empty() {
                div { style: "color: {c.muted};", "No data" }
            } else {
                svg {
                    width: "100%",
                    view_box: "0 0 {CHART_WIDTH} {height}",
                    {points.iter().enumerate().map(|(idx, point)| {
                        let y = idx as f64 * row_height;
                        let w = if max > 0.0 { point.y / max * bar_space } else { 0.0 };
                        let text_y = y + row_height * 0.7;
                        let value_x = label_width + w + 6.0;
                        let value = format_number(point.y);
                        let bar_y = y + 3.0;
                        let bar_height = row_height - 6.0;
                        rsx!(
                            g {
                                key: "{idx}",
                                text { x: "0", y: "{text_y}", font_size: "12", fill: "{c.text}", "{point.name}" }
                                rect {
                                    x: "{label_width}",
                                    y: "{bar_y}",
                                    width: "{w}",
                                    height: "{bar_height}",
                                    fill: "{point.color}",
                                }
                                text { x: "{value_x}", y: "{text_y}", font_size: "11", fill: "{c.muted}", "{value}" }
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[component]
pub fn PieChart(theme: Theme, title: String, slices: Vec<PieSlice>) -> Element {
    let c = colors(theme);
    let angles = slice_angles(&slices);
    let (cx, cy) = (CHART_HEIGHT / 2.0, CHART_HEIGHT / 2.0);
    let outer = CHART_HEIGHT / 2.0 - 8.0;
    let inner = outer * 0.55;

    rsx! {
        ChartFrame { theme, title,
            if slices.is_empty() {
                div { style: "color: {c.muted};", "No data" }
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: center;",
                    svg {
                        width: "{CHART_HEIGHT}",
                        height: "{CHART_HEIGHT}",
                        view_box: "0 0 {CHART_HEIGHT} {CHART_HEIGHT}",
                        {slices.iter().zip(angles.iter()).map(|(slice, &(start, end))| {
                            let d = wedge_path(cx, cy, outer, inner, start, end);
                            let tip = format!("{}: {}", slice.label, format_number(slice.value));
                            rsx!(
                                path { key: "{slice.id}", d: "{d}", fill: "{slice.color}",
                                    title { "{tip}" }
                                }
                            )
                        })}
                    }
                    ul {
                        style: "list-style: none; padding: 0; margin: 0; font-size: 13px;",
                        {slices.iter().map(|slice| {
                            let value = format_number(slice.value);
                            rsx!(
                            li {
                                key: "{slice.id}",
                                style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                                span { style: "display: inline-block; width: 10px; height: 10px; background: {slice.color};" }
                                span { "{slice.label}" }
                                span { style: "color: {c.muted};", "{value}" }
                            }
                        )})}
                    }
                }
            }
        }
    }
}

#[component]
pub fn LineChartView(theme: Theme, title: String, chart: LineChart) -> Element {
    let c = colors(theme);
    let pad = 32.0;
    let max = chart
        .series
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let steps = chart.categories.len().saturating_sub(1).max(1) as f64;
    let x_at = move |idx: usize| pad + idx as f64 / steps * (CHART_WIDTH - 2.0 * pad);
    let y_at = move |value: f64| {
        let ratio = if max > 0.0 { value / max } else { 0.0 };
        CHART_HEIGHT - pad - ratio * (CHART_HEIGHT - 2.0 * pad)
    };
    let baseline = CHART_HEIGHT - pad;
    let label_y = CHART_HEIGHT - pad / 3.0;
    let axis_end = CHART_WIDTH - pad;

    rsx! {
        ChartFrame { theme, title,
            if chart.categories.is_empty() || chart.series.is_empty() {
                div { style: "color: {c.muted};", "No data" }
            } else {
                svg {
                    width: "100%",
                    view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                    line { x1: "{pad}", y1: "{baseline}", x2: "{axis_end}", y2: "{baseline}", stroke: "{c.border}" }
                    {chart.categories.iter().enumerate().map(|(idx, category)| {
                        let x = x_at(idx);
                        rsx!(
                        text {
                            key: "{idx}",
                            x: "{x}",
                            y: "{label_y}",
                            font_size: "10",
                            text_anchor: "middle",
                            fill: "{c.muted}",
                            "{category}"
                        }
                    )})}
                    {chart.series.iter().map(|series| {
                        let points = series
                            .data
                            .iter()
                            .enumerate()
                            .filter(|(_, v)| v.is_finite())
                            .map(|(idx, &v)| format!("{:.1},{:.1}", x_at(idx), y_at(v)))
                            .collect::<Vec<_>>()
                            .join(" ");
                        rsx!(
                            polyline {
                                key: "{series.name}",
                                points: "{points}",
                                fill: "none",
                                stroke: "{series.color}",
                                stroke_width: "2",
                            }
                        )
                    })}
                }
                div {
                    style: "display: flex; gap: 12px; font-size: 12px;",
                    {chart.series.iter().map(|series| rsx!(
                        span {
                            key: "{series.name}",
                            span { style: "display: inline-block; width: 10px; height: 2px; background: {series.color}; margin-right: 4px; vertical-align: middle;" }
                            "{series.name}"
                        }
                    ))}
                }
            }
        }
    }
}

#[component]
pub fn TreemapView(theme: Theme, title: String, nodes: Vec<TreemapNode>) -> Element {
    let c = colors(theme);
    let rects = treemap_rects(&nodes, CHART_WIDTH, CHART_HEIGHT);

    rsx! {
        ChartFrame { theme, title,
            if rects.is_empty() {
                div { style: "color: {c.muted};", "No data" }
            } else {
                svg {
                    width: "100%",
                    view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                    {rects.iter().enumerate().map(|(idx, rect)| {
                        let show_label = rect.width > 48.0 && rect.height > 14.0;
                        let tip = format!("{}: {}", rect.label, format_number(rect.value));
                        let (label_x, label_y) = (rect.x + 4.0, rect.y + 12.0);
                        rsx!(
                            g {
                                key: "{idx}",
                                rect {
                                    x: "{rect.x}",
                                    y: "{rect.y}",
                                    width: "{rect.width}",
                                    height: "{rect.height}",
                                    fill: "{rect.color}",
                                    stroke: "{c.surface}",
                                    title { "{tip}" }
                                }
                                if show_label {
                                    text {
                                        x: "{label_x}",
                                        y: "{label_y}",
                                        font_size: "10",
                                        fill: "#ffffff",
                                        "{rect.label}"
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}

/// Flat world map of country volumes and trade routes.
#[component]
pub fn WorldMap(theme: Theme, title: String, points: Vec<GlobePoint>, arcs: Vec<GlobeArc>) -> Element {
    let c = colors(theme);

    rsx! {
        ChartFrame { theme, title,
            svg {
                width: "100%",
                view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                rect { x: "0", y: "0", width: "{MAP_WIDTH}", height: "{MAP_HEIGHT}", fill: "{c.accent_soft}" }
                {arcs.iter().enumerate().map(|(idx, arc)| {
                    let (x1, y1) = project(arc.start_lat, arc.start_lng, MAP_WIDTH, MAP_HEIGHT);
                    let (x2, y2) = project(arc.end_lat, arc.end_lng, MAP_WIDTH, MAP_HEIGHT);
                    let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0 - ((x2 - x1).abs() * 0.25));
                    let d = format!("M {x1:.1} {y1:.1} Q {mx:.1} {my:.1} {x2:.1} {y2:.1}");
                    rsx!(
                        path {
                            key: "arc-{idx}",
                            d: "{d}",
                            fill: "none",
                            stroke: "{arc.color}",
                            stroke_width: "{arc.stroke}",
                            opacity: "0.7",
                            title { "{arc.label}" }
                        }
                    )
                })}
                {points.iter().enumerate().map(|(idx, point)| {
                    let (x, y) = project(point.lat, point.lng, MAP_WIDTH, MAP_HEIGHT);
                    let (cx, cy, r) = (format!("{x:.1}"), format!("{y:.1}"), format!("{:.1}", 3.0 + point.size * 12.0));
                    rsx!(
                        circle {
                            key: "point-{idx}",
                            cx: "{cx}",
                            cy: "{cy}",
                            r: "{r}",
                            fill: "{point.color}",
                            opacity: "0.8",
                            title { "{point.label}" }
                        }
                    )
                })}
            }
        }
    }
}
