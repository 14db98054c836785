use tracing::debug;

use crate::{
    filter::{filter_statements, page_count, paginate, FilterConfig, DEFAULT_PAGE_SIZE},
    loader::{LoadError, StatementLoader},
    model::{StatementId, StatementRecord},
};

/// Owns the session's statement collection. Records are only ever removed,
/// and `flagged` is the only field mutated in place; every derived view is
/// recomputed from the current snapshot on demand.
#[derive(Debug, Default)]
pub struct StatementStore {
    records: Vec<StatementRecord>,
}

impl StatementStore {
    pub fn new(records: Vec<StatementRecord>) -> Self {
        Self { records }
    }

    pub fn load<L: StatementLoader>() -> Result<Self, LoadError> {
        Ok(Self::new(L::load()?))
    }

    pub fn records(&self) -> &[StatementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: StatementId) -> Option<&StatementRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Removes the record with this id. Deleting an absent id is a no-op;
    /// deletion is permanent for the session.
    pub fn delete(&mut self, id: StatementId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);

        let removed = self.records.len() < before;
        if removed {
            debug!(%id, "statement deleted");
        }
        removed
    }

    /// Flips `flagged` in place and returns the new value, or `None` for an
    /// unknown id. Does not affect pagination.
    pub fn toggle_flag(&mut self, id: StatementId) -> Option<bool> {
        let record = self.records.iter_mut().find(|record| record.id == id)?;
        record.flagged = !record.flagged;

        debug!(%id, flagged = record.flagged, "statement flag toggled");
        Some(record.flagged)
    }
}

/// One page of the filtered view, borrowed from the store snapshot.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a StatementRecord>,
    pub total_filtered: usize,
    pub page: usize,
    pub page_count: usize,
}

/// The UI parameters of one session: filter config, 1-based page and page
/// size. Holds no records; `view` recomputes the window from whatever the
/// store currently contains.
#[derive(Debug, Clone)]
pub struct ViewSession {
    filter: FilterConfig,
    page: usize,
    page_size: usize,
}

impl Default for ViewSession {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewSession {
    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Live search keeps the current page, matching the incremental
    /// keystroke behavior of the search box.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_flagged_only(&mut self, value: bool) {
        self.filter.flagged_only = value;
        self.page = 1;
    }

    pub fn set_negative_sentiment_only(&mut self, value: bool) {
        self.filter.negative_sentiment_only = value;
        self.page = 1;
    }

    pub fn set_product_category_only(&mut self, value: bool) {
        self.filter.product_category_only = value;
        self.page = 1;
    }

    pub fn set_linked_only(&mut self, value: bool) {
        self.filter.linked_only = value;
        self.page = 1;
    }

    pub fn set_keywords_only(&mut self, value: bool) {
        self.filter.keywords_only = value;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
    }

    pub fn next_page(&mut self, store: &StatementStore) {
        let pages = self.current_page_count(store);
        self.page = usize::min(self.page + 1, pages);
    }

    pub fn prev_page(&mut self) {
        self.page = usize::max(self.page.saturating_sub(1), 1);
    }

    pub fn view<'a>(&self, store: &'a StatementStore) -> PageView<'a> {
        let filtered = filter_statements(store.records(), &self.filter);
        let total_filtered = filtered.len();
        let items = paginate(&filtered, self.page, self.page_size).to_vec();

        PageView {
            items,
            total_filtered,
            page: self.page,
            page_count: page_count(total_filtered, self.page_size),
        }
    }

    /// Deletes through the view so pagination can recover afterwards.
    pub fn delete(&mut self, store: &mut StatementStore, id: StatementId) -> bool {
        let removed = store.delete(id);
        if removed {
            self.recover(store);
        }
        removed
    }

    /// Deletes the first record of the current page, if the page has one.
    pub fn delete_at_cursor(&mut self, store: &mut StatementStore) -> Option<StatementId> {
        let id = self.view(store).items.first().map(|record| record.id)?;
        self.delete(store, id);
        Some(id)
    }

    /// Post-delete recovery heuristic: an empty view without a search term
    /// resets to page 1; an empty view under an active search clears the
    /// search term and the flag/sentiment toggles instead; otherwise the
    /// page clamps to the last valid one.
    fn recover(&mut self, store: &StatementStore) {
        let remaining = filter_statements(store.records(), &self.filter).len();

        if remaining == 0 {
            if !self.filter.search_term.is_empty() {
                self.filter.search_term.clear();
                self.filter.flagged_only = false;
                self.filter.negative_sentiment_only = false;
            }
            self.page = 1;
            return;
        }

        let pages = page_count(remaining, self.page_size);
        if self.page > pages {
            self.page = pages;
        }
    }

    fn current_page_count(&self, store: &StatementStore) -> usize {
        page_count(
            filter_statements(store.records(), &self.filter).len(),
            self.page_size,
        )
    }
}
