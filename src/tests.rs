use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures_util::future::BoxFuture;
use serde_json::{json, Value};

use crate::config::{parse_fallback, AppConfig, DEFAULT_API_BASE_URL};
use crate::domain::entities::chart::{ColorBinding, Palette};
use crate::domain::entities::filter::{FilterSelection, ALL_OPTION_VALUE};
use crate::domain::entities::page::{total_pages, PageControls, PageItem, PageRequest, PageState};
use crate::domain::entities::payload::{ChartPayload, MedicinesPayload, OverviewPayload, SeriesPayload};
use crate::domain::entities::record::{
    CategoryCount, CountryVolume, ManufacturerRecord, MedicineRecord, TradeRoute,
};
use crate::domain::entities::search::SearchQuery;
use crate::domain::entities::table::{Alignment, Column, TableSpec};
use crate::domain::entities::theme::Theme;
use crate::domain::entities::view_state::{LoadStatus, ViewState};
use crate::infra::http::client::HttpRegistryApi;
use crate::infra::sqlite::preferences::load_preference;
use crate::infra::sqlite::repo::SqlitePreferenceRepo;
use crate::platform::desktop::appearance::system_theme_from;
use crate::platform::desktop::paths::ensure_webview_data_dir;
use crate::ui::components::charts::{project, slice_angles, treemap_rects};
use crate::ui::components::dropdown::{dropdown_label, options_with_all};
use crate::ui::views::medicines::medicine_table;
use crate::ui::views::overview::metric_title;
use crate::usecase::endpoints::{self, params};
use crate::usecase::ports::api::{EnvelopeKind, FetchError, RegistryApi};
use crate::usecase::ports::repo::{PreferenceRepository, RepoError};
use crate::usecase::services::chart_service::{
    bar_points, format_number, globe_arcs, globe_points, line_chart, manufacturer_bars, pie_slices,
    top_n_by_value, treemap_nodes,
};
use crate::usecase::services::export_service::export_view_csv;
use crate::usecase::services::fetch_service::{
    build_query, commit, extract_envelope, fetch_payload, RequestTracker,
};
use crate::usecase::services::list_view::ListView;
use crate::usecase::services::sample_service::{
    distinct_values, resolve_rows, FallbackSource, SampleData,
};
use crate::usecase::services::theme_service::{ThemeSettings, THEME_KEY};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("pharma-dash-{prefix}-{nanos}"))
}

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: String,
    group: String,
    qty: u32,
}

fn item(name: &str, group: &str, qty: u32) -> Item {
    Item {
        name: name.to_string(),
        group: group.to_string(),
        qty,
    }
}

fn item_table() -> TableSpec<Item> {
    TableSpec::new(vec![
        Column::text("name", "Name", |r: &Item| r.name.clone()),
        Column::text("group", "Group", |r: &Item| r.group.clone()),
        Column::numeric("qty", "Qty", |r: &Item| r.qty.to_string()),
    ])
}

fn numbered_items(count: usize) -> Vec<Item> {
    (1..=count)
        .map(|i| item(&format!("item-{i:02}"), if i % 2 == 0 { "even" } else { "odd" }, i as u32))
        .collect()
}

fn item_view(records: Vec<Item>, per_page: usize) -> ListView<Item> {
    let mut view = ListView::new(item_table(), per_page);
    view.set_records(records);
    view
}

struct StubApi {
    body: Result<Value, u16>,
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl StubApi {
    fn ok(body: Value) -> Self {
        Self {
            body: Ok(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn status(code: u16) -> Self {
        Self {
            body: Err(code),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl RegistryApi for StubApi {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<Value, FetchError>> {
        self.calls
            .lock()
            .expect("calls lock should not be poisoned")
            .push((path.to_string(), query.to_vec()));
        let body = self.body.clone();
        Box::pin(async move { body.map_err(FetchError::Status) })
    }
}

struct FailingRepo;

impl PreferenceRepository for FailingRepo {
    fn init(&self) -> Result<(), RepoError> {
        Err(RepoError::Message("read-only".to_string()))
    }

    fn load_preference(&self, _key: &str) -> Result<Option<String>, RepoError> {
        Err(RepoError::Message("read-only".to_string()))
    }

    fn upsert_preference(&self, _key: &str, _value: &str) -> Result<(), RepoError> {
        Err(RepoError::Message("read-only".to_string()))
    }
}

// ---- list view ----

#[test]
fn twenty_one_records_make_three_pages_with_one_on_the_last() {
    let mut view = item_view(numbered_items(21), 10);

    assert_eq!(view.total_pages(), 3);
    assert_eq!(view.visible().len(), 10);

    view.go_to(3);
    let last: Vec<&str> = view.visible().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(last, vec!["item-21"]);
}

#[test]
fn go_to_clamps_into_valid_range() {
    let mut view = item_view(numbered_items(21), 10);

    assert_eq!(view.go_to(0), 1);
    assert_eq!(view.go_to(99), 3);
    assert_eq!(view.next_page(), 3, "next on the last page should stay");
    view.go_to(1);
    assert_eq!(view.previous_page(), 1, "previous on the first page should stay");
}

#[test]
fn page_requests_step_and_jump() {
    let mut view = item_view(numbered_items(45), 10);

    assert_eq!(view.apply(PageRequest::Next), 2);
    assert_eq!(view.apply(PageRequest::Page(5)), 5);
    assert_eq!(view.apply(PageRequest::Next), 5);
    assert_eq!(view.apply(PageRequest::Previous), 4);
    assert_eq!(view.apply(PageRequest::Page(0)), 1);
}

#[test]
fn search_and_record_changes_reset_to_first_page() {
    let mut view = item_view(numbered_items(35), 10);
    view.go_to(3);
    assert_eq!(view.current_page(), 3);

    view.set_search("item");
    assert_eq!(view.current_page(), 1, "search change should reset the page");

    view.go_to(2);
    view.set_records(numbered_items(12));
    assert_eq!(view.current_page(), 1, "record change should reset the page");
}

#[test]
fn empty_search_is_identity_and_repeat_search_is_idempotent() {
    let records = vec![item("Bolt", "hardware", 4), item("nut", "Hardware", 9), item("Glue", "misc", 1)];
    let mut view = item_view(records.clone(), 10);

    view.set_search("   ");
    let all: Vec<Item> = view.filtered().into_iter().cloned().collect();
    assert_eq!(all, records, "blank search should keep every record in order");

    view.set_search("HARD");
    let first: Vec<Item> = view.filtered().into_iter().cloned().collect();
    view.set_search("HARD");
    let second: Vec<Item> = view.filtered().into_iter().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2, "match should be case-insensitive across any searchable field");
}

#[test]
fn search_ignores_non_searchable_columns() {
    let mut view = item_view(vec![item("alpha", "g", 42), item("beta", "g", 7)], 10);

    view.set_search("42");

    assert_eq!(view.filtered_len(), 0, "numeric columns are not searched");
}

#[test]
fn pages_cover_filtered_records_exactly_once_in_order() {
    let mut view = item_view(numbered_items(27), 4);
    view.set_search("item-");

    let mut collected = Vec::new();
    for page in 1..=view.total_pages() {
        view.go_to(page);
        collected.extend(view.visible().into_iter().cloned());
    }

    let expected: Vec<Item> = view.filtered().into_iter().cloned().collect();
    assert_eq!(collected, expected);
}

#[test]
fn empty_dataset_has_one_page_and_no_bar() {
    let view = item_view(Vec::new(), 10);

    assert_eq!(view.total_pages(), 1);
    assert!(view.visible().is_empty());
    let controls = view.controls();
    assert!(!controls.previous_enabled);
    assert!(!controls.next_enabled);
    assert!(!controls.show_bar);
}

#[test]
fn no_match_search_yields_one_empty_page() {
    let mut view = item_view(numbered_items(15), 10);

    view.set_search("zzz");

    assert_eq!(view.filtered_len(), 0);
    assert_eq!(view.total_pages(), 1);
    assert_eq!(view.current_page(), 1);
    assert!(view.visible_cells().is_empty());
}

#[test]
fn single_record_search_without_match_is_empty() {
    let mut view = item_view(vec![item("Aspirin", "analgesic", 1)], 10);

    view.set_search("xyz");

    assert!(view.filtered().is_empty());
}

#[test]
fn visible_cells_follow_column_spec() {
    let view = item_view(vec![item("Bolt", "hardware", 4)], 10);

    assert_eq!(view.spec().keys(), vec!["name", "group", "qty"]);
    assert_eq!(view.spec().headers(), vec!["Name", "Group", "Qty"]);
    assert_eq!(
        view.spec().alignments(),
        vec![Alignment::Left, Alignment::Left, Alignment::Right]
    );
    assert_eq!(view.visible_cells(), vec![vec!["Bolt", "hardware", "4"]]);
}

#[test]
fn page_state_range_handles_partial_and_empty_pages() {
    let mut page = PageState::new(10);
    assert_eq!(page.range(0), 0..0);
    page.go_to(3, 25);
    assert_eq!(page.range(25), 20..25);
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(20, 10), 2);
    assert_eq!(total_pages(5, 0), 5, "zero page size is treated as one");
}

#[test]
fn page_controls_show_edges_neighbours_and_gaps() {
    let controls = PageControls::build(5, 10);

    assert_eq!(
        controls.items,
        vec![
            PageItem::Page { number: 1, current: false },
            PageItem::Ellipsis,
            PageItem::Page { number: 4, current: false },
            PageItem::Page { number: 5, current: true },
            PageItem::Page { number: 6, current: false },
            PageItem::Ellipsis,
            PageItem::Page { number: 10, current: false },
        ]
    );
    assert!(controls.previous_enabled && controls.next_enabled && controls.show_bar);

    let first = PageControls::build(1, 3);
    assert_eq!(
        first.items,
        vec![
            PageItem::Page { number: 1, current: true },
            PageItem::Page { number: 2, current: false },
            PageItem::Page { number: 3, current: false },
        ]
    );
    assert!(!first.previous_enabled);
}

// ---- filters and search ----

#[test]
fn absent_filter_never_constrains() {
    let filters = FilterSelection::new();

    assert!(filters.is_empty());
    assert!(filters.to_query_pairs().is_empty());
    assert!(filters.admits(|_| Some("anything".to_string())));
}

fn selection(pairs: &[(&str, &str)]) -> FilterSelection {
    let mut filters = FilterSelection::new();
    for (name, value) in pairs {
        filters.set_single(name, value);
    }
    filters
}

#[test]
fn all_option_and_blank_values_remove_the_filter() {
    let mut filters = selection(&[(params::COUNTRY, "Germany")]);
    assert_eq!(filters.single(params::COUNTRY), Some("Germany"));

    filters.set_single(params::COUNTRY, ALL_OPTION_VALUE);
    assert_eq!(filters.get(params::COUNTRY), None);

    filters.set_single(params::COUNTRY, "  ");
    assert!(filters.is_empty());
}

#[test]
fn multi_select_toggles_and_joins_with_commas() {
    let mut filters = FilterSelection::new();
    filters.toggle(params::DRUG_TYPE, "Tablet");
    filters.toggle(params::DRUG_TYPE, "Injection");
    filters.set_single(params::COUNTRY, "Germany");

    assert_eq!(
        filters.to_query_pairs(),
        vec![
            ("country".to_string(), "Germany".to_string()),
            ("drugtype".to_string(), "Injection,Tablet".to_string()),
        ]
    );

    filters.toggle(params::DRUG_TYPE, "Tablet");
    filters.toggle(params::DRUG_TYPE, "Injection");
    assert_eq!(filters.get(params::DRUG_TYPE), None, "empty multi-select should be dropped");
    assert!(!filters.contains(params::DRUG_TYPE, "Tablet"));
}

#[test]
fn admits_matches_case_insensitively_and_skips_unknown_fields() {
    let filters = selection(&[(params::COUNTRY, "germany"), (params::TOP_N, "10")]);
    let record = ManufacturerRecord {
        manufacturer: "Merck KGaA".to_string(),
        country: "Germany".to_string(),
        product_count: 1,
    };
    let field = |name: &str| match name {
        "country" => Some(record.country.clone()),
        _ => None,
    };

    assert!(filters.admits(field));
    assert!(!selection(&[(params::COUNTRY, "France")]).admits(field));
}

#[test]
fn search_query_lowercases() {
    let query = SearchQuery::new("PaRa");

    assert_eq!(query.raw(), "PaRa");
    assert!(query.matches_field("Paracetamol"));
    assert!(query.matches_any(["Ibuprofen", "paracetamol"]));
    assert!(!query.matches_any(["Ibuprofen"]));
    assert!(SearchQuery::new("").matches_any(Vec::<String>::new()));
}

#[test]
fn search_keeps_surrounding_spaces_of_non_blank_terms() {
    let padded = SearchQuery::new(" tab");

    assert!(!padded.is_empty());
    assert!(!padded.matches_field("Tablet"));
    assert!(padded.matches_field("Film-coated tablet"));
    assert!(SearchQuery::new(" \t ").matches_field("anything"));
}

// ---- fetch adapter ----

#[test]
fn build_query_appends_defaults_not_overridden() {
    let defaults_only = build_query(&endpoints::TOP_MANUFACTURERS, &FilterSelection::new());
    assert_eq!(defaults_only, vec![("top_n".to_string(), "50".to_string())]);

    let overridden = build_query(
        &endpoints::TOP_MANUFACTURERS,
        &selection(&[(params::TOP_N, "10"), (params::COUNTRY, "France")]),
    );
    assert_eq!(
        overridden,
        vec![
            ("country".to_string(), "France".to_string()),
            ("top_n".to_string(), "10".to_string()),
        ]
    );
}

#[test]
fn extract_envelope_handles_each_kind() {
    let data = extract_envelope(EnvelopeKind::Data, json!({"data": {"areas": ["Almaty"]}}))
        .expect("data envelope should extract");
    assert_eq!(data, json!({"areas": ["Almaty"]}));

    let null_data = extract_envelope(EnvelopeKind::Data, json!({"data": null}))
        .expect("null data should become an empty object");
    assert_eq!(null_data, json!({}));

    let chart = extract_envelope(EnvelopeKind::Chart, json!({"chart": {"labels": ["2020"]}}))
        .expect("chart envelope should extract");
    assert_eq!(chart, json!({"labels": ["2020"]}));

    let metrics = extract_envelope(EnvelopeKind::Metrics, json!({"metrics": {"total": 3}}))
        .expect("metrics envelope should extract");
    assert_eq!(metrics, json!({"metrics": {"total": 3}}));
}

#[test]
fn extract_envelope_rejects_wrong_shapes() {
    assert!(matches!(
        extract_envelope(EnvelopeKind::Data, json!({"chart": {}})),
        Err(FetchError::Shape(_))
    ));
    assert!(matches!(
        extract_envelope(EnvelopeKind::Metrics, json!({"data": {}})),
        Err(FetchError::Shape(_))
    ));
    assert!(matches!(
        extract_envelope(EnvelopeKind::Chart, json!([1, 2])),
        Err(FetchError::Shape(_))
    ));
}

#[test]
fn payload_missing_sub_fields_default_to_empty() {
    let payload: MedicinesPayload =
        serde_json::from_value(json!({"medicines": [{"trade_name": "Panadol"}]}))
            .expect("partial payload should deserialize");

    assert_eq!(payload.medicines.len(), 1);
    assert_eq!(payload.medicines[0].registration_year, None);
    assert!(payload.drug_types.is_empty());
    assert!(payload.countries.is_empty());
}

#[tokio::test]
async fn fetch_payload_sends_query_and_decodes_envelope() {
    let api = StubApi::ok(json!({
        "data": {
            "medicines": [{"trade_name": "Lipitor", "country": "United States"}],
            "drug_types": ["Tablet"]
        }
    }));
    let filters = selection(&[(params::COUNTRY, "United States")]);

    let payload = fetch_payload::<MedicinesPayload>(&api, &endpoints::MEDICINES, &filters)
        .await
        .expect("fetch should succeed");

    assert_eq!(payload.medicines[0].trade_name, "Lipitor");
    assert_eq!(payload.drug_types, vec!["Tablet"]);
    let calls = api.calls.lock().expect("calls lock should not be poisoned");
    assert_eq!(
        calls[0],
        (
            "/medicines".to_string(),
            vec![("country".to_string(), "United States".to_string())]
        )
    );
}

#[tokio::test]
async fn fetch_payload_reports_status_and_shape_errors() {
    let failing = StubApi::status(503);
    let err = fetch_payload::<OverviewPayload>(&failing, &endpoints::OVERVIEW, &FilterSelection::new())
        .await
        .expect_err("503 should fail");
    assert!(matches!(err, FetchError::Status(503)));

    let wrong_shape = StubApi::ok(json!({"labels": []}));
    let err = fetch_payload::<ChartPayload>(
        &wrong_shape,
        &endpoints::REGISTRATION_TIMELINE,
        &FilterSelection::new(),
    )
    .await
    .expect_err("missing chart key should fail");
    assert!(matches!(err, FetchError::Shape(_)));
}

#[test]
fn stale_response_is_not_applied() {
    let tracker = RequestTracker::new();
    let mut state = ViewState::<Vec<String>>::default();

    state.begin_loading();
    let first = tracker.begin();
    let second = tracker.begin();

    assert!(commit(&tracker, second, &mut state, Ok(vec!["B".to_string()])));
    assert!(!commit(&tracker, first, &mut state, Ok(vec!["A".to_string()])));

    assert_eq!(state.data, vec!["B"]);
    assert_eq!(state.status, LoadStatus::Loaded);
}

#[test]
fn earlier_response_arriving_first_keeps_loading_until_latest() {
    let tracker = RequestTracker::new();
    let mut state = ViewState::<Vec<String>>::default();

    state.begin_loading();
    let first = tracker.begin();
    state.begin_loading();
    let second = tracker.begin();

    assert!(!commit(&tracker, first, &mut state, Ok(vec!["A".to_string()])));
    assert_eq!(state.status, LoadStatus::Loading, "stale response should not clear loading");

    assert!(commit(
        &tracker,
        second,
        &mut state,
        Err(FetchError::Transport("connection refused".to_string()))
    ));
    assert_ne!(
        state.status,
        LoadStatus::Loading,
        "latest response should clear loading even on error"
    );
}

#[test]
fn cancelled_tracker_discards_every_ticket() {
    let tracker = RequestTracker::new();
    let mut state = ViewState::<Vec<String>>::default();
    let ticket = tracker.begin();

    tracker.cancel();

    assert!(tracker.is_closed());
    assert!(!commit(&tracker, ticket, &mut state, Ok(vec!["late".to_string()])));
    assert!(!tracker.is_current(tracker.begin()), "closed tracker stays closed");
    assert!(!state.has_data);
}

#[test]
fn refetch_after_empty_result_reports_loading() {
    let mut state = ViewState::<Vec<u32>>::default();
    state.begin_loading();
    state.settle(Ok::<_, FetchError>(Vec::new()));
    assert!(!state.is_loading(), "settled empty result shows the empty message");

    state.begin_loading();

    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.is_loading(), "a new fetch must show the loading placeholder");
    assert!(state.has_data);

    state.settle(Err::<Vec<u32>, _>(FetchError::Status(502)));
    assert!(!state.is_loading(), "errors clear loading");
}

#[test]
fn error_keeps_previous_data() {
    let mut state = ViewState::<Vec<u32>>::default();
    assert!(state.is_loading(), "nothing fetched yet");

    state.settle(Ok::<_, FetchError>(vec![1, 2]));
    assert!(state.loaded_label().is_some());
    assert!(!state.is_loading());

    state.begin_loading();
    assert!(state.is_loading());
    state.settle(Err::<Vec<u32>, _>(FetchError::Status(500)));

    assert_eq!(state.data, vec![1, 2]);
    assert_eq!(state.error(), Some("HTTP 500"));
}

#[test]
fn http_client_builds_urls_with_encoded_query() {
    let api = HttpRegistryApi::new("http://localhost:8000/api/", Duration::from_secs(1))
        .expect("client should build");

    assert_eq!(api.base_url(), "http://localhost:8000/api");
    assert_eq!(
        api.url_for("/prices", &[]).expect("url should build"),
        "http://localhost:8000/api/prices"
    );
    assert_eq!(
        api.url_for(
            "/medicines",
            &[("country".to_string(), "United Kingdom".to_string())]
        )
        .expect("url should build"),
        "http://localhost:8000/api/medicines?country=United+Kingdom"
    );
}

// ---- chart adapters ----

#[test]
fn top_n_is_stable_descending() {
    let rows = vec![
        CategoryCount::new("A", 10.0),
        CategoryCount::new("B", 30.0),
        CategoryCount::new("C", 30.0),
        CategoryCount::new("D", 5.0),
    ];

    let top: Vec<String> = top_n_by_value(&rows, 2)
        .into_iter()
        .map(|row| row.category)
        .collect();

    assert_eq!(top, vec!["B", "C"]);
}

#[test]
fn top_n_puts_nan_last_and_tolerates_large_n() {
    let rows = vec![
        CategoryCount::new("nan", f64::NAN),
        CategoryCount::new("low", 1.0),
        CategoryCount::new("high", 2.0),
    ];

    let ranked: Vec<String> = top_n_by_value(&rows, 10)
        .into_iter()
        .map(|row| row.category)
        .collect();

    assert_eq!(ranked, vec!["high", "low", "nan"]);
}

#[test]
fn hashed_colors_do_not_depend_on_order() {
    let palette = Palette::for_theme(Theme::Light);
    let forward = pie_slices(
        &[CategoryCount::new("Tablet", 5.0), CategoryCount::new("Injection", 3.0)],
        &palette,
    );
    let reversed = pie_slices(
        &[CategoryCount::new("Injection", 3.0), CategoryCount::new("Tablet", 5.0)],
        &palette,
    );

    assert_eq!(forward[0].color, reversed[1].color);
    assert_eq!(forward[1].color, reversed[0].color);
}

#[test]
fn bar_points_share_colors_with_pie_slices() {
    let palette = Palette::for_theme(Theme::Dark);
    let rows = [CategoryCount::new("Tablet", 5.0), CategoryCount::new("Capsule", 2.0)];

    let bars = bar_points(&rows, &palette);
    let slices = pie_slices(&rows, &palette);

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].name, "Tablet");
    assert_eq!(bars[1].y, 2.0);
    assert_eq!(bars[0].color, slices[0].color);
    assert_eq!(bars[1].color, slices[1].color);
}

#[test]
fn positional_colors_follow_index() {
    let palette = Palette::new(
        vec!["#111".to_string(), "#222".to_string()],
        ColorBinding::Positional,
    );

    assert_eq!(palette.len(), 2);
    assert_eq!(palette.color(0, "x"), "#111");
    assert_eq!(palette.color(3, "x"), "#222");
    assert_eq!(
        Palette::new(Vec::new(), ColorBinding::Hashed).color(0, "x"),
        "#888888"
    );
}

#[test]
fn theme_changes_palette() {
    let light = Palette::for_theme(Theme::Light);
    let dark = Palette::for_theme(Theme::Dark);

    assert_ne!(light.color(0, "Tablet"), dark.color(0, "Tablet"));
}

#[test]
fn treemap_groups_manufacturers_under_countries() {
    let rows = vec![
        ManufacturerRecord {
            manufacturer: "GSK".to_string(),
            country: "United Kingdom".to_string(),
            product_count: 388,
        },
        ManufacturerRecord {
            manufacturer: "Pfizer".to_string(),
            country: "United States".to_string(),
            product_count: 412,
        },
        ManufacturerRecord {
            manufacturer: "Reckitt".to_string(),
            country: "United Kingdom".to_string(),
            product_count: 90,
        },
    ];
    let palette = Palette::for_theme(Theme::Light);

    let nodes = treemap_nodes(&rows, &palette);

    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "United Kingdom",
            "United States",
            "United Kingdom/GSK",
            "United States/Pfizer",
            "United Kingdom/Reckitt",
        ]
    );
    assert_eq!(nodes[4].parent.as_deref(), Some("United Kingdom"));
    assert_eq!(nodes[4].value, Some(90.0));

    let bars = manufacturer_bars(&rows, 2, &palette);
    let names: Vec<&str> = bars.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Pfizer", "GSK"]);

    let rects = treemap_rects(&nodes, 100.0, 50.0);
    assert_eq!(rects.len(), 3);
    let total_area: f64 = rects.iter().map(|r| r.width * r.height).sum();
    assert!((total_area - 5000.0).abs() < 1e-6, "rects should tile the canvas");
}

#[test]
fn line_chart_keeps_labels_and_series() {
    let payload = ChartPayload {
        labels: vec!["2021".to_string(), "2022".to_string()],
        series: vec![SeriesPayload {
            name: "Registrations".to_string(),
            data: vec![12.0, 18.0],
        }],
    };

    let chart = line_chart(&payload, &Palette::for_theme(Theme::Dark));

    assert_eq!(chart.categories, payload.labels);
    assert_eq!(chart.series[0].data, vec![12.0, 18.0]);
    assert!(chart.series[0].color.starts_with('#'));
}

#[test]
fn globe_points_and_arcs_scale_to_largest_volume() {
    let palette = Palette::for_theme(Theme::Light);
    let countries = vec![
        CountryVolume {
            country: "Kazakhstan".to_string(),
            lat: 48.0,
            lng: 68.0,
            count: 50.0,
        },
        CountryVolume {
            country: "Germany".to_string(),
            lat: 51.0,
            lng: 10.0,
            count: 200.0,
        },
    ];
    let points = globe_points(&countries, &palette);
    assert_eq!(points[0].size, 0.25);
    assert_eq!(points[1].size, 1.0);
    assert_eq!(points[1].label, "Germany: 200");

    let routes = vec![TradeRoute {
        from_country: "Germany".to_string(),
        to_country: "Kazakhstan".to_string(),
        volume: 10.0,
        ..TradeRoute::default()
    }];
    let arcs = globe_arcs(&routes, &palette);
    assert!((arcs[0].stroke - 2.0).abs() < 1e-9);

    let empty = globe_points(
        &[CountryVolume {
            count: 0.0,
            ..CountryVolume::default()
        }],
        &palette,
    );
    assert_eq!(empty[0].size, 0.0);
}

#[test]
fn chart_props_serialize_with_expected_keys() {
    let point = globe_points(
        &[CountryVolume {
            country: "France".to_string(),
            lat: 46.0,
            lng: 2.0,
            count: 1.0,
        }],
        &Palette::for_theme(Theme::Light),
    );
    let value = serde_json::to_value(&point[0]).expect("point should serialize");

    assert!(value.get("lat").is_some());
    assert!(value.get("size").is_some());

    let arc = globe_arcs(&[TradeRoute::default()], &Palette::for_theme(Theme::Light));
    let value = serde_json::to_value(&arc[0]).expect("arc should serialize");
    assert!(value.get("startLat").is_some());
    assert!(value.get("endLng").is_some());
}

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1234567.0), "1,234,567");
    assert_eq!(format_number(1234.5), "1,234.50");
    assert_eq!(format_number(0.999), "1");
    assert_eq!(format_number(-2500.0), "-2,500");
    assert_eq!(format_number(-0.001), "0");
}

#[test]
fn chart_geometry_helpers() {
    assert_eq!(project(90.0, -180.0, 360.0, 180.0), (0.0, 0.0));
    assert_eq!(project(0.0, 0.0, 360.0, 180.0), (180.0, 90.0));

    let slices = pie_slices(
        &[CategoryCount::new("a", 1.0), CategoryCount::new("b", 3.0)],
        &Palette::for_theme(Theme::Light),
    );
    let angles = slice_angles(&slices);
    let full = std::f64::consts::PI * 2.0;
    assert!((angles[0].1 - full / 4.0).abs() < 1e-9);
    assert!((angles[1].1 - full).abs() < 1e-9);
}

// ---- theme ----

#[test]
fn theme_persists_across_sessions() {
    let temp_dir = unique_test_dir("theme");
    let db_path = temp_dir.join("preferences.sqlite");
    let repo = SqlitePreferenceRepo {
        db_path: db_path.clone(),
    };
    repo.init().expect("init should succeed");

    let mut first = ThemeSettings::initialize(Arc::new(repo), Theme::Light);
    assert_eq!(first.current(), Theme::Light, "nothing stored should use system default");
    assert_eq!(first.toggle().expect("toggle should persist"), Theme::Dark);

    let stored = load_preference(&db_path, THEME_KEY).expect("preference should load");
    assert_eq!(stored.as_deref(), Some("dark"));

    let second = ThemeSettings::initialize(
        Arc::new(SqlitePreferenceRepo {
            db_path: db_path.clone(),
        }),
        Theme::Light,
    );
    assert_eq!(second.current(), Theme::Dark);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn unknown_stored_theme_falls_back_to_system_default() {
    let temp_dir = unique_test_dir("theme-unknown");
    let repo = SqlitePreferenceRepo {
        db_path: temp_dir.join("preferences.sqlite"),
    };
    repo.init().expect("init should succeed");
    repo.upsert_preference(THEME_KEY, "purple")
        .expect("upsert should succeed");

    let settings = ThemeSettings::initialize(Arc::new(repo), Theme::Dark);

    assert_eq!(settings.current(), Theme::Dark);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn theme_change_survives_failing_store_in_memory() {
    let mut settings = ThemeSettings::initialize(Arc::new(FailingRepo), Theme::Light);

    assert_eq!(settings.current(), Theme::Light);
    assert!(settings.set(Theme::Dark).is_err());
    assert_eq!(settings.current(), Theme::Dark);
}

#[test]
fn theme_parses_loosely() {
    assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
    assert!("sepia".parse::<Theme>().is_err());
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn system_theme_detection_from_environment() {
    assert_eq!(system_theme_from(Some("Adwaita:dark"), None), Theme::Dark);
    assert_eq!(system_theme_from(None, Some("15;0")), Theme::Dark);
    assert_eq!(system_theme_from(None, Some("0;default;15")), Theme::Light);
    assert_eq!(system_theme_from(None, None), Theme::Light);
}

// ---- config ----

#[test]
fn config_defaults_when_environment_is_empty() {
    let cfg = AppConfig::from_lookup(|_| None).expect("empty environment should parse");

    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.page_size, 10);
}

#[test]
fn config_reads_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("PHARMA_DASH_API_URL", "https://registry.example/api/"),
        ("PHARMA_DASH_PAGE_SIZE", "25"),
        ("PHARMA_DASH_TIMEOUT_MS", "1500"),
        ("PHARMA_DASH_FALLBACK", "builtin"),
        ("PHARMA_DASH_THEME", "dark"),
        ("RUST_LOG", "pharma_dash=debug"),
    ]);

    let cfg = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
        .expect("overrides should parse");

    assert_eq!(cfg.api_base_url, "https://registry.example/api");
    assert_eq!(cfg.page_size, 25);
    assert_eq!(cfg.request_timeout, Duration::from_millis(1500));
    assert_eq!(cfg.fallback, FallbackSource::BuiltIn);
    assert_eq!(cfg.theme_default, Some(Theme::Dark));
    assert_eq!(cfg.log_filter, "pharma_dash=debug");
}

#[test]
fn config_rejects_invalid_page_size() {
    assert!(AppConfig::from_lookup(|key| (key == "PHARMA_DASH_PAGE_SIZE").then(|| "0".to_string())).is_err());
    assert!(AppConfig::from_lookup(|key| (key == "PHARMA_DASH_PAGE_SIZE").then(|| "ten".to_string())).is_err());
}

#[test]
fn fallback_modes_parse() {
    assert_eq!(parse_fallback(""), FallbackSource::Disabled);
    assert_eq!(parse_fallback("OFF"), FallbackSource::Disabled);
    assert_eq!(parse_fallback("demo"), FallbackSource::BuiltIn);
    assert_eq!(
        parse_fallback("/srv/samples"),
        FallbackSource::Directory(PathBuf::from("/srv/samples"))
    );
}

// ---- fallback samples and export ----

#[test]
fn live_rows_win_over_samples() {
    let samples = SampleData::built_in();
    let live = vec![samples.medicines[0].clone()];

    let resolved = resolve_rows(&live, &samples.medicines, &FilterSelection::new());

    assert!(!resolved.from_sample);
    assert_eq!(resolved.rows, live);
}

#[test]
fn empty_live_rows_fall_back_to_filtered_samples() {
    let samples = SampleData::built_in();
    let mut filters = FilterSelection::new();
    filters.toggle(params::DRUG_TYPE, "Injection");
    filters.set_single(params::COUNTRY, "United States");

    let resolved = resolve_rows(&[], &samples.medicines, &filters);

    assert!(resolved.from_sample);
    let names: Vec<&str> = resolved.rows.iter().map(|r| r.trade_name.as_str()).collect();
    assert_eq!(names, vec!["Humira"]);

    let disabled = SampleData::load(&FallbackSource::Disabled).expect("disabled should load");
    let nothing = resolve_rows(&[], &disabled.medicines, &filters);
    assert!(!nothing.from_sample);
    assert!(nothing.rows.is_empty());
}

#[test]
fn distinct_values_are_sorted_and_unique() {
    let samples = SampleData::built_in();

    let areas = distinct_values(&samples.prices, params::AREA);

    assert_eq!(areas, vec!["Almaty", "Astana", "Shymkent"]);
    assert!(distinct_values(&samples.prices, params::LIMIT).is_empty());
}

#[test]
fn sample_directory_loads_present_csv_files() {
    let temp_dir = unique_test_dir("samples");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    fs::write(
        temp_dir.join("medicines.csv"),
        "trade_name,inn,drug_type,country,manufacturer,registration_year\n\
         Aspirin,Acetylsalicylic acid,Tablet,Germany,Bayer,1999\n\
         Generic,Paracetamol,Tablet,India,Cipla,\n",
    )
    .expect("should write medicines csv");

    let data = SampleData::load(&FallbackSource::Directory(temp_dir.clone()))
        .expect("directory samples should load");

    assert_eq!(data.medicines.len(), 2);
    assert_eq!(data.medicines[0].registration_year, Some(1999));
    assert_eq!(data.medicines[1].registration_year, None);
    assert!(data.manufacturers.is_empty(), "missing file should load as empty");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn export_writes_all_filtered_rows() {
    let temp_dir = unique_test_dir("export");
    let path = temp_dir.join("out").join("medicines.csv");
    let mut view = ListView::new(medicine_table(), 2);
    view.set_records(SampleData::built_in().medicines);
    view.set_search("gsk");

    let written = export_view_csv(&view, &path).expect("export should succeed");

    assert_eq!(written, 3, "export should include rows beyond the current page");
    let contents = fs::read_to_string(&path).expect("should read export");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Trade name,INN,Type,Manufacturer,Country,Registered")
    );
    assert_eq!(lines.count(), 3);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

// ---- ui helpers ----

#[test]
fn dropdown_options_start_with_all() {
    let options = options_with_all(&["France".to_string(), "Germany".to_string()]);

    assert_eq!(options[0].value, ALL_OPTION_VALUE);
    assert_eq!(options.len(), 3);
    assert_eq!(dropdown_label(&options, Some("Germany")), "Germany");
    assert_eq!(dropdown_label(&options, None), "(All)");
}

#[test]
fn metric_keys_become_titles() {
    assert_eq!(metric_title("total_medicines"), "Total medicines");
    assert_eq!(metric_title("countries"), "Countries");
    assert_eq!(metric_title(""), "");
}

#[test]
fn webview_data_dir_is_created() {
    let temp_dir = unique_test_dir("webview");

    let created = ensure_webview_data_dir(&temp_dir).expect("should create webview dir");

    assert!(created.is_dir());
    assert!(created.ends_with("webview"));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn medicine_record_round_trips_through_table_cells() {
    let record = MedicineRecord {
        trade_name: "Concor".to_string(),
        registration_year: Some(2016),
        ..MedicineRecord::default()
    };

    let cells = medicine_table().cells(&record);

    assert_eq!(cells[0], "Concor");
    assert_eq!(cells[5], "2016");
}
