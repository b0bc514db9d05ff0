use std::collections::BTreeSet;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// `max(1, ceil(total_items / items_per_page))`.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// 1-based page cursor with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `requested`, clamped to the pages `total_items` produce.
    pub fn go_to(&mut self, requested: usize, total_items: usize) -> usize {
        self.current_page = clamp_page(requested, total_pages(total_items, self.items_per_page));
        self.current_page
    }

    /// Index range of the current page; empty when there are no items.
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let page = clamp_page(
            self.current_page,
            total_pages(total_items, self.items_per_page),
        );
        let start = ((page - 1) * self.items_per_page).min(total_items);
        let end = (page * self.items_per_page).min(total_items);
        start..end
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// What a click on the pagination bar asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    Page(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// What the pagination bar renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub show_bar: bool,
    pub items: Vec<PageItem>,
}

impl PageControls {
    /// First, last, current and its neighbours; every gap becomes an ellipsis.
    pub fn build(current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = clamp_page(current_page, total_pages);

        let mut shown = BTreeSet::new();
        shown.insert(1);
        shown.insert(total_pages);
        shown.insert(current_page);
        if current_page > 1 {
            shown.insert(current_page - 1);
        }
        if current_page < total_pages {
            shown.insert(current_page + 1);
        }

        let mut items = Vec::with_capacity(shown.len() * 2);
        let mut previous = None::<usize>;
        for number in shown {
            if let Some(previous) = previous {
                if number > previous + 1 {
                    items.push(PageItem::Ellipsis);
                }
            }
            items.push(PageItem::Page {
                number,
                current: number == current_page,
            });
            previous = Some(number);
        }

        Self {
            current_page,
            total_pages,
            previous_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
            show_bar: total_pages > 1,
            items,
        }
    }
}
