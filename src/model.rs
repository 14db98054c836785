use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Category value recognized by the product-only filter.
pub const PRODUCT_CATEGORY: &str = "product";

pub type Price = f64;

/// Identifier assigned at load time. Deletion and flagging address records
/// through this, never through position or reference identity.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    Display,
)]
pub struct StatementId(pub u64);

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[display(fmt = "positive")]
    Positive,
    #[default]
    #[display(fmt = "neutral")]
    Neutral,
    #[display(fmt = "negative")]
    Negative,
}

/// One point of the per-record price trend sparkline.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Price,
}

/// One ingested finance-market statement.
///
/// `keywords` is derived once at load time by the normalization pipeline and
/// never recomputed; `flagged` is the only field mutated afterwards.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct StatementRecord {
    pub id: StatementId,
    pub symbol: String,
    pub company: String,
    pub statement: String,
    pub update: String,
    pub sentiment: Sentiment,
    pub category: String,
    pub keywords: Vec<String>,
    pub volume: u64,
    pub current: Option<Price>,
    pub linked: Vec<String>,
    pub introduction: String,
    pub stock_trend: Vec<TrendPoint>,
    pub flagged: bool,
}

impl StatementRecord {
    pub fn is_product(&self) -> bool {
        self.category == PRODUCT_CATEGORY
    }

    pub fn has_linked(&self) -> bool {
        !self.linked.is_empty()
    }

    /// Price label for display; an absent price renders as a sentinel.
    pub fn current_label(&self) -> String {
        match self.current {
            Some(price) => price.to_string(),
            None => "N/A".to_owned(),
        }
    }

    pub fn linked_items(&self) -> impl Iterator<Item = LinkedItem<'_>> {
        self.linked.iter().map(|raw| LinkedItem::parse(raw))
    }
}

/// A `"label:value"` pair naming a related entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LinkedItem<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

impl<'a> LinkedItem<'a> {
    /// Splits on the first `:`. A raw string without one becomes a label
    /// with an empty value.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((label, value)) => Self { label, value },
            None => Self {
                label: raw,
                value: "",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkedItem, StatementRecord};

    #[test]
    fn unittest_linked_item_parse() {
        let item = LinkedItem::parse("TSMC:foundry partner");
        assert_eq!(item.label, "TSMC");
        assert_eq!(item.value, "foundry partner");

        let bare = LinkedItem::parse("Supermicro");
        assert_eq!(bare.label, "Supermicro");
        assert_eq!(bare.value, "");
    }

    #[test]
    fn unittest_current_label_sentinel() {
        let record = StatementRecord::default();
        assert_eq!(record.current_label(), "N/A");

        let priced = StatementRecord {
            current: Some(30.9),
            ..Default::default()
        };
        assert_eq!(priced.current_label(), "30.9");
    }
}
