use urlencoding::encode;

use crate::model::LinkedItem;

const SEARCH_BASE: &str = "https://www.google.ca/search";

/// External stock search URL for a company or entity name. The whole query
/// is percent-encoded, so names with `&` or `+` survive intact.
pub fn stock_search_url(name: &str) -> String {
    format!("{SEARCH_BASE}?q={}", encode(&format!("{name} stock")))
}

pub fn linked_search_url(item: &LinkedItem<'_>) -> String {
    stock_search_url(item.label)
}
