use std::path::PathBuf;

use dioxus::prelude::*;

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::page::PageRequest;
use crate::domain::entities::payload::MedicinesPayload;
use crate::domain::entities::record::MedicineRecord;
use crate::domain::entities::table::{Column, TableSpec};
use crate::ui::components::dropdown::{options_with_all, CheckboxGroup, DropdownSelect};
use crate::ui::components::list_panel::{report_export, ListPanel};
use crate::ui::components::status::{StatusBar, StatusLine};
use crate::ui::hooks::list_view::use_list_view;
use crate::ui::hooks::remote_view::use_remote_view;
use crate::ui::state::app_state::{AppServices, AppState};
use crate::ui::style::{colors, panel_style};
use crate::usecase::endpoints::{self, params};
use crate::usecase::services::export_service::export_view_csv;
use crate::usecase::services::sample_service::{distinct_values, resolve_rows};

pub fn medicine_table() -> TableSpec<MedicineRecord> {
    TableSpec::new(vec![
        Column::text("trade_name", "Trade name", |r: &MedicineRecord| r.trade_name.clone()),
        Column::text("inn", "INN", |r: &MedicineRecord| r.inn.clone()),
        Column::text("drug_type", "Type", |r: &MedicineRecord| r.drug_type.clone()),
        Column::text("manufacturer", "Manufacturer", |r: &MedicineRecord| r.manufacturer.clone()),
        Column::text("country", "Country", |r: &MedicineRecord| r.country.clone()),
        Column::numeric("registration_year", "Registered", |r: &MedicineRecord| {
            r.registration_year.map(|y| y.to_string()).unwrap_or_default()
        }),
    ])
}

#[component]
pub fn MedicinesView() -> Element {
    let services = use_context::<AppServices>();
    let app = use_context::<AppState>();
    let theme = (app.theme)();

    let mut filters = use_signal(FilterSelection::new);
    let state = use_remote_view::<MedicinesPayload>(endpoints::MEDICINES, filters);
    let samples = services.samples.clone();
    let resolved = use_memo(move || {
        resolve_rows(&state.read().data.medicines, &samples.medicines, &filters.read())
    });
    let mut list = use_list_view(medicine_table, resolved);

    let snapshot = state.read();
    let from_sample = resolved.read().from_sample;
    let drug_types = if snapshot.data.drug_types.is_empty() {
        distinct_values(&resolved.read().rows, params::DRUG_TYPE)
    } else {
        snapshot.data.drug_types.clone()
    };
    let countries = if snapshot.data.countries.is_empty() {
        distinct_values(&resolved.read().rows, params::COUNTRY)
    } else {
        snapshot.data.countries.clone()
    };
    let status = StatusLine::of(&*snapshot, from_sample);
    let loading = snapshot.is_loading();
    drop(snapshot);

    let selection = filters.read().clone();
    let checked: Vec<String> = drug_types
        .iter()
        .filter(|value| selection.contains(params::DRUG_TYPE, value))
        .cloned()
        .collect();
    let any_checked = !checked.is_empty();
    let view = list.read();

    let panel = panel_style(theme);
    let c = colors(theme);

    rsx! {
        div {
            style: "{panel}",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                CheckboxGroup {
                    label: "Type",
                    options: drug_types,
                    checked,
                    on_toggle: move |value: String| {
                        filters.write().toggle(params::DRUG_TYPE, &value);
                    },
                }
                if any_checked {
                    button {
                        style: "border: 1px solid {c.border}; background: {c.surface}; color: {c.text}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            filters.write().clear(params::DRUG_TYPE);
                        },
                        "Clear types"
                    }
                }
                DropdownSelect {
                    id: "medicines-country",
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
            }
            StatusBar { theme, line: status }
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
                empty_message: "No medicines match the current filters.".to_string(),
                on_search: move |term: String| {
                    list.write().set_search(&term);
                },
                on_page: move |request: PageRequest| {
                    list.write().apply(request);
                },
                on_export: move |path: PathBuf| {
                    report_export(export_view_csv(&*list.read(), &path));
                },
            }
        }
    }
}
