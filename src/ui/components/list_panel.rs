use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::domain::entities::page::{PageControls, PageRequest};
use crate::domain::entities::table::Alignment;
use crate::domain::entities::theme::Theme;
use crate::ui::components::data_table::{DataTable, SearchInput};
use crate::ui::components::pagination::Pagination;
use crate::ui::style::button_style;

/// Search box, table and pagination bar of one list view.
#[component]
pub fn ListPanel(
    theme: Theme,
    keys: Vec<&'static str>,
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    loading: bool,
    controls: PageControls,
    search: String,
    matched: usize,
    empty_message: String,
    on_search: EventHandler<String>,
    on_page: EventHandler<PageRequest>,
    on_export: Option<EventHandler<PathBuf>>,
) -> Element {
    let export_style = button_style(theme, matched > 0);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
            SearchInput { theme, value: search, placeholder: "Search…", on_input: on_search }
            span { "{matched} rows" }
            if let Some(on_export) = on_export {
                button {
                    style: "{export_style}",
                    disabled: matched == 0,
                    onclick: move |_| {
                        if let Some(path) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .set_file_name("export.csv")
                            .save_file()
                        {
                            on_export.call(path);
                        }
                    },
                    "Export CSV"
                }
            }
        }
        DataTable { theme, keys, headers, alignments, rows, loading, empty_message }
        Pagination { theme, controls, on_page }
    }
}

/// Shows the outcome of an export in a native message box.
pub fn report_export(result: anyhow::Result<usize>) {
    let (level, description) = match result {
        Ok(rows) => (MessageLevel::Info, format!("Exported {rows} rows.")),
        Err(err) => (MessageLevel::Error, format!("Export failed: {err:#}")),
    };
    MessageDialog::new()
        .set_level(level)
        .set_title("Export CSV")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
