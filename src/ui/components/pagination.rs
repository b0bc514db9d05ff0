use dioxus::prelude::*;

use crate::domain::entities::page::{PageControls, PageItem, PageRequest};
use crate::domain::entities::theme::Theme;
use crate::ui::style::{button_style, colors};

#[component]
pub fn Pagination(theme: Theme, controls: PageControls, on_page: EventHandler<PageRequest>) -> Element {
    if !controls.show_bar {
        return rsx! {};
    }

    let c = colors(theme);
    let current = controls.current_page;
    let previous_enabled = controls.previous_enabled;
    let next_enabled = controls.next_enabled;
    let total_pages = controls.total_pages;
    let previous_style = button_style(theme, previous_enabled);
    let next_style = button_style(theme, next_enabled);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; margin-top: 10px;",
            button {
                style: "{previous_style}",
                disabled: !previous_enabled,
                onclick: move |_| {
                    if previous_enabled {
                        on_page.call(PageRequest::Previous);
                    }
                },
                "Prev"
            }
            {controls.items.iter().enumerate().map(|(idx, item)| match *item {
                PageItem::Ellipsis => rsx!(
                    span { key: "gap-{idx}", style: "color: {c.muted}; padding: 0 4px;", "…" }
                ),
                PageItem::Page { number, current } => {
                    let weight = if current { "700" } else { "400" };
                    let border = if current { c.accent } else { c.border };
                    let page_style = format!("{} font-weight: {weight}; border-color: {border};", button_style(theme, true));
                    rsx!(
                        button {
                            key: "page-{number}",
                            style: "{page_style}",
                            onclick: move |_| on_page.call(PageRequest::Page(number)),
                            "{number}"
                        }
                    )
                }
            })}
            button {
                style: "{next_style}",
                disabled: !next_enabled,
                onclick: move |_| {
                    if next_enabled {
                        on_page.call(PageRequest::Next);
                    }
                },
                "Next"
            }
            span {
                style: "color: {c.muted}; margin-left: 8px;",
                "Page {current} of {total_pages}"
            }
        }
    }
}
