use crate::domain::entities::page::{total_pages, PageControls, PageRequest, PageState};
use crate::domain::entities::search::SearchQuery;
use crate::domain::entities::table::TableSpec;

/// Searchable, paginated view over one record collection.
///
/// Filtering is recomputed when records or the search term change, and both
/// of those reset the cursor to page 1.
pub struct ListView<R> {
    spec: TableSpec<R>,
    records: Vec<R>,
    search: SearchQuery,
    filtered: Vec<usize>,
    page: PageState,
}

impl<R> ListView<R> {
    pub fn new(spec: TableSpec<R>, items_per_page: usize) -> Self {
        Self {
            spec,
            records: Vec::new(),
            search: SearchQuery::default(),
            filtered: Vec::new(),
            page: PageState::new(items_per_page),
        }
    }

    pub fn spec(&self) -> &TableSpec<R> {
        &self.spec
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn items_per_page(&self) -> usize {
        self.page.items_per_page()
    }

    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.refilter();
        self.page.reset();
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = SearchQuery::new(term);
        self.refilter();
        self.page.reset();
    }

    pub fn filtered(&self) -> Vec<&R> {
        self.filtered.iter().map(|&idx| &self.records[idx]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page.items_per_page())
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    /// Jumps to `page`, clamped into `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page.go_to(page, self.filtered.len())
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to(self.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to(self.current_page().saturating_sub(1))
    }

    pub fn apply(&mut self, request: PageRequest) -> usize {
        match request {
            PageRequest::Previous => self.previous_page(),
            PageRequest::Next => self.next_page(),
            PageRequest::Page(page) => self.go_to(page),
        }
    }

    pub fn visible(&self) -> Vec<&R> {
        self.filtered[self.page.range(self.filtered.len())]
            .iter()
            .map(|&idx| &self.records[idx])
            .collect()
    }

    pub fn controls(&self) -> PageControls {
        PageControls::build(self.current_page(), self.total_pages())
    }

    pub fn visible_cells(&self) -> Vec<Vec<String>> {
        self.visible()
            .into_iter()
            .map(|record| self.spec.cells(record))
            .collect()
    }

    /// Every filtered row across all pages, e.g. for export.
    pub fn filtered_cells(&self) -> Vec<Vec<String>> {
        self.filtered()
            .into_iter()
            .map(|record| self.spec.cells(record))
            .collect()
    }

    fn refilter(&mut self) {
        let search = &self.search;
        let spec = &self.spec;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| search.matches_any(spec.search_fields(record)))
            .map(|(idx, _)| idx)
            .collect();
    }
}
