use std::{cmp::Reverse, fs, path::Path};

use itertools::Itertools;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    keywords::clean_keywords,
    model::{Price, Sentiment, StatementId, StatementRecord, TrendPoint},
};

/// Dataset shipped with the crate, the only statement source there is.
const BUNDLED_STATEMENTS: &str = include_str!("../data/statements.json");

/// Fatal at startup: callers show an empty/error state instead of the list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("statement source unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("statement source is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("statement source must be a JSON array of statement objects")]
    NotACollection,
}

/// Wire shape of one bundled record, before keyword cleaning and id
/// assignment.
#[derive(Debug, Deserialize)]
struct RawStatement {
    symbol: String,
    company: String,
    statement: String,
    update: String,
    sentiment: Sentiment,
    category: String,
    keywords: Vec<String>,
    volume: u64,
    #[serde(default)]
    current: Option<Price>,
    #[serde(default)]
    linked: Vec<String>,
    introduction: String,
    #[serde(default, rename = "stockTrend")]
    stock_trend: Vec<TrendPoint>,
}

pub trait StatementLoader {
    fn load() -> Result<Vec<StatementRecord>, LoadError>;
}

/// Loads the dataset compiled into the crate.
pub struct BundledLoader {}

impl StatementLoader for BundledLoader {
    fn load() -> Result<Vec<StatementRecord>, LoadError> {
        load_from_str(BUNDLED_STATEMENTS)
    }
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<StatementRecord>, LoadError> {
    load_from_str(&fs::read_to_string(path)?)
}

pub fn load_from_str(source: &str) -> Result<Vec<StatementRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    if !value.is_array() {
        return Err(LoadError::NotACollection);
    }

    Ok(ingest(serde_json::from_value(value)?))
}

/// Keywords are cleaned once here, ids are positional in the raw input, and
/// the collection is stable-sorted by volume descending so ties keep their
/// input order.
fn ingest(raw: Vec<RawStatement>) -> Vec<StatementRecord> {
    let mut records = raw
        .into_iter()
        .enumerate()
        .map(|(ix, raw)| StatementRecord {
            id: StatementId(ix as u64),
            keywords: clean_keywords(&raw.keywords),
            flagged: false,
            symbol: raw.symbol,
            company: raw.company,
            statement: raw.statement,
            update: raw.update,
            sentiment: raw.sentiment,
            category: raw.category,
            volume: raw.volume,
            current: raw.current,
            linked: raw.linked,
            introduction: raw.introduction,
            stock_trend: raw.stock_trend,
        })
        .collect_vec();

    records.sort_by_key(|record| Reverse(record.volume));
    info!(records = records.len(), "statement collection loaded");

    records
}
