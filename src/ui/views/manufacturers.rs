use dioxus::prelude::*;

use crate::domain::entities::chart::Palette;
use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::page::PageRequest;
use crate::domain::entities::payload::ManufacturersPayload;
use crate::domain::entities::record::ManufacturerRecord;
use crate::domain::entities::table::{Column, TableSpec};
use crate::ui::components::charts::{BarChart, TreemapView};
use crate::ui::components::dropdown::{options_with_all, DropdownOption, DropdownSelect};
use crate::ui::components::list_panel::ListPanel;
use crate::ui::components::status::{StatusBar, StatusLine};
use crate::ui::hooks::list_view::use_list_view;
use crate::ui::hooks::remote_view::use_remote_view;
use crate::ui::state::app_state::{AppServices, AppState};
use crate::ui::style::panel_style;
use crate::usecase::endpoints::{self, params};
use crate::usecase::services::chart_service::{manufacturer_bars, treemap_nodes, DEFAULT_TOP_N};
use crate::usecase::services::sample_service::{distinct_values, resolve_rows};

const TOP_N_CHOICES: [&str; 4] = ["10", "25", "50", "100"];

pub fn manufacturer_table() -> TableSpec<ManufacturerRecord> {
    TableSpec::new(vec![
        Column::text("manufacturer", "Manufacturer", |r: &ManufacturerRecord| r.manufacturer.clone()),
        Column::text("country", "Country", |r: &ManufacturerRecord| r.country.clone()),
        Column::numeric("product_count", "Products", |r: &ManufacturerRecord| r.product_count.to_string()),
    ])
}

#[component]
pub fn ManufacturersView() -> Element {
    let services = use_context::<AppServices>();
    let app = use_context::<AppState>();
    let theme = (app.theme)();

    let mut filters = use_signal(FilterSelection::new);
    let state = use_remote_view::<ManufacturersPayload>(endpoints::TOP_MANUFACTURERS, filters);
    let samples = services.samples.clone();
    let resolved = use_memo(move || {
        resolve_rows(
            &state.read().data.manufacturers,
            &samples.manufacturers,
            &filters.read(),
        )
    });
    let mut list = use_list_view(manufacturer_table, resolved);

    let palette = Palette::for_theme(theme);
    let snapshot = state.read();
    let rows = resolved.read();
    let countries = distinct_values(&rows.rows, params::COUNTRY);
    let bars = manufacturer_bars(&rows.rows, DEFAULT_TOP_N, &palette);
    let tree = treemap_nodes(&rows.rows, &palette);
    let status = StatusLine::of(&*snapshot, rows.from_sample);
    let loading = snapshot.is_loading();
    drop(rows);
    drop(snapshot);

    let selection = filters.read().clone();
    let top_n_options: Vec<DropdownOption> = TOP_N_CHOICES
        .iter()
        .map(|n| DropdownOption::new(*n, *n))
        .collect();
    let view = list.read();

    let panel = panel_style(theme);

    rsx! {
        div {
            style: "{panel}",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                DropdownSelect {
                    id: "manufacturers-country",
                    label: "Country",
                    theme,
                    options: options_with_all(&countries),
                    selected: selection.single(params::COUNTRY).map(str::to_string),
                    open_dropdown: app.open_dropdown,
                    dropdown_pos: app.dropdown_pos,
                    on_select: move |value: String| {
                        filters.write().set_single(params::COUNTRY, &value);
                    },
                }
                DropdownSelect {
                    id: "manufacturers-top-n",
                    label: "Top",
                    theme,
                    options: top_n_options,
                    selected: Some(selection.single(params::TOP_N).unwrap_or("50").to_string()),
                    open_dropdown: app.open_dropdown,
                    dropdown_pos: app.dropdown_pos,
                    on_select: move |value: String| {
                        filters.write().set_single(params::TOP_N, &value);
                    },
                }
            }
            StatusBar { theme, line: status }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 12px;",
                BarChart { theme, title: format!("Top {DEFAULT_TOP_N} manufacturers by products"), points: bars }
                TreemapView { theme, title: "Manufacturers by country".to_string(), nodes: tree }
            }
            ListPanel {
                theme,
                keys: view.spec().keys(),
                headers: view.spec().headers(),
                alignments: view.spec().alignments(),
                rows: view.visible_cells(),
                loading,
                controls: view.controls(),
                search: view.search().raw().to_string(),
                matched: view.filtered_len(),
                empty_message: "No manufacturers found.".to_string(),
                on_search: move |term: String| {
                    list.write().set_search(&term);
                },
                on_page: move |request: PageRequest| {
                    list.write().apply(request);
                },
            }
        }
    }
}
