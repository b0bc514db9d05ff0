use dioxus::prelude::*;

use crate::domain::entities::chart::Palette;
use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::payload::{CategoriesPayload, ChartPayload, OverviewPayload};
use crate::ui::components::charts::{BarChart, LineChartView, PieChart};
use crate::ui::components::stat_card::StatCard;
use crate::ui::components::status::{StatusBar, StatusLine};
use crate::ui::hooks::remote_view::use_remote_view;
use crate::ui::state::app_state::AppState;
use crate::ui::style::{colors, panel_style};
use crate::usecase::endpoints;
use crate::usecase::services::chart_service::{
    bar_points, format_number, line_chart, pie_slices, top_n_by_value, DEFAULT_TOP_N,
};

/// `total_medicines` -> `Total medicines`.
pub fn metric_title(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn OverviewView() -> Element {
    let app = use_context::<AppState>();
    let theme = (app.theme)();
    let c = colors(theme);

    let filters = use_signal(FilterSelection::new);
    let overview = use_remote_view::<OverviewPayload>(endpoints::OVERVIEW, filters);
    let categories = use_remote_view::<CategoriesPayload>(endpoints::CATEGORIES, filters);
    let timeline = use_remote_view::<ChartPayload>(endpoints::REGISTRATION_TIMELINE, filters);

    let palette = Palette::for_theme(theme);

    let summary = overview.read();
    let cards: Vec<(String, String)> = summary
        .data
        .metrics
        .iter()
        .map(|(key, value)| (metric_title(key), format_number(*value)))
        .collect();
    let source = summary.data.meta.source.clone();
    let updated_at = summary.data.meta.updated_at.clone();
    let overview_status = StatusLine::of(&*summary, false);
    drop(summary);

    let category_state = categories.read();
    let top_categories = top_n_by_value(&category_state.data.categories, DEFAULT_TOP_N);
    let slices = pie_slices(&top_categories, &palette);
    let bars = bar_points(&top_categories, &palette);
    let category_status = StatusLine::of(&*category_state, false);
    drop(category_state);

    let timeline_state = timeline.read();
    let chart = line_chart(&timeline_state.data, &palette);
    let timeline_status = StatusLine::of(&*timeline_state, false);
    drop(timeline_state);

    let panel = panel_style(theme);

    rsx! {
        div {
            style: "{panel}",
            StatusBar { theme, line: overview_status }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                {cards.into_iter().map(|(title, value)| rsx!(
                    StatCard { key: "{title}", theme, title: title.clone(), value }
                ))}
            }
            if source.is_some() || updated_at.is_some() {
                div {
                    style: "margin-top: 8px; color: {c.muted}; font-size: 12px;",
                    if let Some(source) = &source {
                        span { "Source: {source} " }
                    }
                    if let Some(updated_at) = &updated_at {
                        span { "Data as of {updated_at}" }
                    }
                }
            }
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px;",
            div {
                style: "flex: 1 1 420px;",
                StatusBar { theme, line: category_status }
                PieChart { theme, title: format!("Top {DEFAULT_TOP_N} categories"), slices }
                BarChart { theme, title: "Medicines per category".to_string(), points: bars }
            }
            div {
                style: "flex: 1 1 520px;",
                StatusBar { theme, line: timeline_status }
                LineChartView { theme, title: "Registrations per year".to_string(), chart }
            }
        }
    }
}
