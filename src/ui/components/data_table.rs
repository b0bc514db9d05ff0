use dioxus::prelude::*;

use crate::domain::entities::table::Alignment;
use crate::domain::entities::theme::Theme;
use crate::ui::style::{colors, table_cell_style, table_container_style, table_header_cell_style};

#[component]
pub fn SearchInput(theme: Theme, value: String, placeholder: &'static str, on_input: EventHandler<String>) -> Element {
    let c = colors(theme);
    rsx! {
        input {
            r#type: "search",
            style: "border: 1px solid {c.border}; background: {c.surface}; color: {c.text}; padding: 6px 10px; border-radius: 6px; min-width: 240px;",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| on_input.call(event.value()),
        }
    }
}

/// Plain table over pre-rendered cells.
///
/// While `loading` is set and there are no rows, a loading line is shown in
/// place of `empty_message`.
#[component]
pub fn DataTable(
    theme: Theme,
    keys: Vec<&'static str>,
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    loading: bool,
    empty_message: String,
) -> Element {
    let c = colors(theme);
    let column_count = headers.len().max(1);
    let placeholder = if loading {
        "Loading…".to_string()
    } else {
        empty_message.clone()
    };

    let container_style = table_container_style(theme);

    rsx! {
        div {
            style: "{container_style}",
            table {
                style: "border-collapse: collapse; width: 100%; font-size: 14px;",
                thead {
                    tr {
                        {headers.iter().enumerate().map(|(idx, header)| {
                            let align = alignments.get(idx).copied().unwrap_or_default();
                            let cell_style = table_header_cell_style(theme, align);
                            let column_key = keys.get(idx).copied().unwrap_or_default();
                            rsx!(
                                th {
                                    key: "{column_key}",
                                    style: "{cell_style}",
                                    "{header}"
                                }
                            )
                        })}
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 16px; text-align: center; color: {c.muted};",
                                "{placeholder}"
                            }
                        }
                    }
                    {rows.iter().enumerate().map(|(row_idx, row)| {
                        rsx!(
                            tr {
                                key: "{row_idx}",
                                {row.iter().enumerate().map(|(col_idx, cell)| {
                                    let align = alignments.get(col_idx).copied().unwrap_or_default();
                                    let cell_style = table_cell_style(theme, align);
                                    rsx!(
                                        td {
                                            key: "{col_idx}",
                                            style: "{cell_style}",
                                            "{cell}"
                                        }
                                    )
                                })}
                            }
                        )
                    })}
                }
            }
        }
    }
}
