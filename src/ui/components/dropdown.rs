use dioxus::prelude::*;

use crate::domain::entities::filter::ALL_OPTION_VALUE;
use crate::domain::entities::theme::Theme;
use crate::ui::style::colors;

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// "(All)" followed by one option per value.
pub fn options_with_all(values: &[String]) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption::new(ALL_OPTION_VALUE, "(All)"))
        .chain(values.iter().map(|value| DropdownOption::new(value.clone(), value.clone())))
        .collect()
}

pub fn dropdown_label(options: &[DropdownOption], selected: Option<&str>) -> String {
    selected
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "(All)".to_string())
}

#[component]
pub fn DropdownSelect(
    id: &'static str,
    label: &'static str,
    theme: Theme,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    mut open_dropdown: Signal<Option<&'static str>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_select: EventHandler<String>,
) -> Element {
    let c = colors(theme);
    let is_open = open_dropdown() == Some(id);
    let selected_label = dropdown_label(&options, selected.as_deref());
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: "border: 1px solid {c.border}; background: {c.surface}; color: {c.text}; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown() == Some(id) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(id));
                },
                "{selected_label}"
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 200px; max-height: 320px; overflow-y: auto; background: {c.surface}; color: {c.text}; border: 1px solid {c.border}; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let is_selected = selected.as_deref() == Some(value.as_str())
                        || (selected.is_none() && value == ALL_OPTION_VALUE);
                    let background = if is_selected { c.accent_soft } else { "transparent" };
                    rsx!(
                        div {
                            key: "{value}",
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                open_dropdown.set(None);
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

/// Multi-select filter rendered as a row of checkboxes.
#[component]
pub fn CheckboxGroup(
    label: &'static str,
    options: Vec<String>,
    checked: Vec<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "display: inline-flex; flex-wrap: wrap; align-items: center; gap: 10px;",
            span { "{label}" }
            {options.iter().map(|option| {
                let value = option.clone();
                let is_checked = checked.contains(option);
                rsx!(
                    label {
                        key: "{option}",
                        style: "display: inline-flex; align-items: center; gap: 4px; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: is_checked,
                            onclick: move |_| {
                                on_toggle.call(value.clone());
                            }
                        }
                        span { "{option}" }
                    }
                )
            })}
        }
    }
}
