use dioxus::prelude::*;

use crate::domain::entities::chart::Palette;
use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::page::PageRequest;
use crate::domain::entities::payload::DistributionPayload;
use crate::domain::entities::record::CountryVolume;
use crate::domain::entities::table::{Column, TableSpec};
use crate::ui::components::charts::WorldMap;
use crate::ui::components::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::components::list_panel::ListPanel;
use crate::ui::components::status::{StatusBar, StatusLine};
use crate::ui::hooks::list_view::use_list_view;
use crate::ui::hooks::remote_view::use_remote_view;
use crate::ui::state::app_state::AppState;
use crate::ui::style::panel_style;
use crate::usecase::endpoints::{self, params};
use crate::usecase::services::chart_service::{format_number, globe_arcs, globe_points};
use crate::usecase::services::sample_service::ResolvedRows;

const LIMIT_CHOICES: [&str; 3] = ["10", "25", "50"];

pub fn country_table() -> TableSpec<CountryVolume> {
    TableSpec::new(vec![
        Column::text("country", "Country", |r: &CountryVolume| r.country.clone()),
        Column::numeric("count", "Registrations", |r: &CountryVolume| format_number(r.count)),
    ])
}

#[component]
pub fn DistributionView() -> Element {
    let app = use_context::<AppState>();
    let theme = (app.theme)();

    let mut filters = use_signal(FilterSelection::new);
    let state = use_remote_view::<DistributionPayload>(endpoints::DISTRIBUTION, filters);
    let resolved = use_memo(move || ResolvedRows {
        rows: state.read().data.countries.clone(),
        from_sample: false,
    });
    let mut list = use_list_view(country_table, resolved);

    let palette = Palette::for_theme(theme);
    let snapshot = state.read();
    let points = globe_points(&snapshot.data.countries, &palette);
    let arcs = globe_arcs(&snapshot.data.routes, &palette);
    let status = StatusLine::of(&*snapshot, false);
    let loading = snapshot.is_loading();
    drop(snapshot);

    let selected_limit = filters.read().single(params::LIMIT).unwrap_or("25").to_string();
    let limit_options: Vec<DropdownOption> = LIMIT_CHOICES
        .iter()
        .map(|n| DropdownOption::new(*n, *n))
        .collect();
    let view = list.read();

    let panel = panel_style(theme);

    rsx! {
        div {
            style: "{panel}",
            DropdownSelect {
                id: "distribution-limit",
                label: "Countries",
                theme,
                options: limit_options,
                selected: Some(selected_limit),
                open_dropdown: app.open_dropdown,
                dropdown_pos: app.dropdown_pos,
                on_select: move |value: String| {
                    filters.write().set_single(params::LIMIT, &value);
                },
            }
            StatusBar { theme, line: status }
            div {
                style: "display: flex; margin-bottom: 12px;",
                WorldMap { theme, title: "Registrations and supply routes".to_string(), points, arcs }
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
                empty_message: "No distribution data.".to_string(),
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
