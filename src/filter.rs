use crate::model::{Sentiment, StatementRecord};

/// Page sizes offered by the pager.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[1, 3, 5, 10, 20];

/// Fallback when a caller asks for a zero page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Conjunction of independent predicates over the statement collection.
/// Every active option must match; the default config matches everything.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Case-insensitive substring match on `statement`; empty matches all.
    pub search_term: String,
    pub flagged_only: bool,
    pub negative_sentiment_only: bool,
    pub product_category_only: bool,
    pub linked_only: bool,
    /// Hide statements whose keyword list came out empty after cleaning.
    pub keywords_only: bool,
}

impl FilterConfig {
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_flagged_only(mut self, value: bool) -> Self {
        self.flagged_only = value;
        self
    }

    pub fn with_negative_sentiment_only(mut self, value: bool) -> Self {
        self.negative_sentiment_only = value;
        self
    }

    pub fn with_product_category_only(mut self, value: bool) -> Self {
        self.product_category_only = value;
        self
    }

    pub fn with_linked_only(mut self, value: bool) -> Self {
        self.linked_only = value;
        self
    }

    pub fn with_keywords_only(mut self, value: bool) -> Self {
        self.keywords_only = value;
        self
    }

    pub fn matches(&self, record: &StatementRecord) -> bool {
        let matches_search = self.search_term.is_empty()
            || record
                .statement
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());

        matches_search
            && (!self.flagged_only || record.flagged)
            && (!self.negative_sentiment_only || record.sentiment == Sentiment::Negative)
            && (!self.product_category_only || record.is_product())
            && (!self.linked_only || record.has_linked())
            && (!self.keywords_only || !record.keywords.is_empty())
    }
}

/// The sub-sequence of records matching `config`, relative order preserved.
/// Recomputed on every parameter change; at hundreds of records a linear
/// scan needs no caching.
pub fn filter_statements<'a, I>(records: I, config: &FilterConfig) -> Vec<&'a StatementRecord>
where
    I: IntoIterator<Item = &'a StatementRecord>,
{
    records
        .into_iter()
        .filter(|record| config.matches(record))
        .collect()
}

/// Pages a filtered view have, at least one even when empty.
pub fn page_count(total: usize, page_size: usize) -> usize {
    let size = sanitize_page_size(page_size);
    usize::max(1, total.div_ceil(size))
}

/// 1-based page slice `[(page-1)*size, page*size)` clamped to range. A page
/// beyond the end yields an empty slice, not an error; page 0 reads as
/// page 1 and a zero size falls back to the default.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let size = sanitize_page_size(page_size);
    let start = page.max(1).saturating_sub(1).saturating_mul(size);

    if start >= items.len() {
        return &[];
    }

    &items[start..usize::min(start + size, items.len())]
}

fn sanitize_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}
