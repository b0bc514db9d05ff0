use dioxus::prelude::*;

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::page::PageRequest;
use crate::domain::entities::payload::PricesPayload;
use crate::domain::entities::record::PriceRecord;
use crate::domain::entities::table::{Column, TableSpec};
use crate::ui::components::dropdown::{options_with_all, DropdownSelect};
use crate::ui::components::list_panel::ListPanel;
use crate::ui::components::status::{StatusBar, StatusLine};
use crate::ui::hooks::list_view::use_list_view;
use crate::ui::hooks::remote_view::use_remote_view;
use crate::ui::state::app_state::{AppServices, AppState};
use crate::ui::style::panel_style;
use crate::usecase::endpoints::{self, params};
use crate::usecase::services::chart_service::format_number;
use crate::usecase::services::sample_service::{distinct_values, resolve_rows};

pub fn price_table() -> TableSpec<PriceRecord> {
    TableSpec::new(vec![
        Column::text("trade_name", "Trade name", |r: &PriceRecord| r.trade_name.clone()),
        Column::text("dosage", "Dosage", |r: &PriceRecord| r.dosage.clone()),
        Column::text("area", "Area", |r: &PriceRecord| r.area.clone()),
        Column::text("drug_type", "Type", |r: &PriceRecord| r.drug_type.clone()),
        Column::numeric("price", "Price", |r: &PriceRecord| format_number(r.price)),
        Column::text("currency", "Currency", |r: &PriceRecord| r.currency.clone()).not_searchable(),
    ])
}

#[component]
pub fn PricesView() -> Element {
    let services = use_context::<AppServices>();
    let app = use_context::<AppState>();
    let theme = (app.theme)();

    let mut filters = use_signal(FilterSelection::new);
    let state = use_remote_view::<PricesPayload>(endpoints::PRICES, filters);
    let samples = services.samples.clone();
    let resolved = use_memo(move || {
        resolve_rows(&state.read().data.prices, &samples.prices, &filters.read())
    });
    let mut list = use_list_view(price_table, resolved);

    let snapshot = state.read();
    let rows = resolved.read();
    let areas = if snapshot.data.areas.is_empty() {
        distinct_values(&rows.rows, params::AREA)
    } else {
        snapshot.data.areas.clone()
    };
    let drug_types = distinct_values(&rows.rows, params::DRUG_TYPE);
    let status = StatusLine::of(&*snapshot, rows.from_sample);
    let loading = snapshot.is_loading();
    drop(rows);
    drop(snapshot);

    let selection = filters.read().clone();
    let view = list.read();

    let panel = panel_style(theme);

    rsx! {
        div {
            style: "{panel}",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                DropdownSelect {
                    id: "prices-area",
                    label: "Area",
                    theme,
                    options: options_with_all(&areas),
                    selected: selection.single(params::AREA).map(str::to_string),
                    open_dropdown: app.open_dropdown,
                    dropdown_pos: app.dropdown_pos,
                    on_select: move |value: String| {
                        filters.write().set_single(params::AREA, &value);
                    },
                }
                DropdownSelect {
                    id: "prices-drugtype",
                    label: "Type",
                    theme,
                    options: options_with_all(&drug_types),
                    selected: selection.single(params::DRUG_TYPE).map(str::to_string),
                    open_dropdown: app.open_dropdown,
                    dropdown_pos: app.dropdown_pos,
                    on_select: move |value: String| {
                        filters.write().set_single(params::DRUG_TYPE, &value);
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
                empty_message: "No prices for this selection.".to_string(),
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
