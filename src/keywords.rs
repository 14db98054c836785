use std::cmp::Reverse;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::StatementRecord;

/// How many ranked keywords the frequency chart shows.
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Generic English stop-words plus domain-generic finance terms. Tokens are
/// matched against this after lowercasing and punctuation stripping, so
/// multi-word entries like "stock price" still apply.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "earnings", "stock", "revenue", "growth", "company", "stock price",
    "services", "analysts", "solutions", "technology", "price", "products", "investment",
    "global", "shares", "business", "innovation", "market", "dividend", "data", "news",
    "analytics", "estimates", "financial", "corporation",
];

/// Punctuation removed (not replaced by a space) from each token.
const STRIPPED_CHARS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Normalizes a raw keyword list: lowercase and trim, strip punctuation,
/// then drop empty, stop-word, all-digit and short (≤ 3 chars) tokens.
/// Order is preserved and duplicates are kept; dedup happens implicitly in
/// frequency counting.
pub fn clean_keywords<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|keyword| keyword.as_ref().trim().to_lowercase())
        .map(|keyword| keyword.replace(STRIPPED_CHARS, ""))
        .filter(|keyword| {
            !keyword.is_empty()
                && !is_stop_word(keyword)
                && !keyword.chars().all(|c| c.is_ascii_digit())
                && keyword.chars().count() > 3
        })
        .collect()
}

/// Occurrence count per keyword across the whole collection, every
/// occurrence counted (no per-record dedup). Map order is first occurrence
/// during the scan, which makes the ranking tie-break deterministic.
pub fn keyword_counts(records: &[StatementRecord]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();

    for record in records {
        for keyword in &record.keywords {
            *counts.entry(keyword.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Distinct keywords across the collection, for the stat card.
pub fn unique_keyword_count(records: &[StatementRecord]) -> usize {
    keyword_counts(records).len()
}

/// Top `top` keywords by count descending; ties keep first-occurrence order.
/// Recomputed from scratch whenever the collection changes.
pub fn rank_keywords(records: &[StatementRecord], top: usize) -> Vec<(String, usize)> {
    let mut ranked = keyword_counts(records).into_iter().collect_vec();
    ranked.sort_by_key(|(_, count)| Reverse(*count));
    ranked.truncate(top);
    ranked
}

#[cfg(test)]
mod tests {
    use crate::model::StatementRecord;

    use super::{clean_keywords, is_stop_word, keyword_counts, rank_keywords};

    fn record_with_keywords(keywords: &[&str]) -> StatementRecord {
        StatementRecord {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn unittest_clean_keywords_drops_noise() {
        let cleaned = clean_keywords(["Growth!", "AI", "machine-learning", "the", "2024"]);
        assert_eq!(cleaned, vec!["machinelearning"]);
    }

    #[test]
    fn unittest_clean_keywords_invariants() {
        let cleaned = clean_keywords([
            "  Margin Pressure ",
            "#18A",
            "...",
            "",
            "stock price",
            "GPU",
            "datacenter",
            "datacenter",
        ]);

        assert_eq!(cleaned, vec!["margin pressure", "datacenter", "datacenter"]);
        for keyword in &cleaned {
            assert!(!keyword.is_empty());
            assert!(!is_stop_word(keyword));
            assert!(!keyword.chars().all(|c| c.is_ascii_digit()));
            assert!(keyword.chars().count() > 3);
        }
    }

    #[test]
    fn unittest_clean_keywords_idempotent() {
        let raw = ["Reality Labs", "ad-load", "capex", "2024", "the", "N/A"];
        let once = clean_keywords(raw);
        let twice = clean_keywords(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn unittest_rank_counts_match_brute_force() {
        let records = vec![
            record_with_keywords(&["datacenter", "inference", "advertising"]),
            record_with_keywords(&["datacenter", "advertising"]),
            record_with_keywords(&["datacenter", "buybacks"]),
        ];

        let counts = keyword_counts(&records);
        for (keyword, count) in &counts {
            let brute = records
                .iter()
                .flat_map(|r| &r.keywords)
                .filter(|k| *k == keyword)
                .count();
            assert_eq!(*count, brute);
        }

        let ranked = rank_keywords(&records, 2);
        assert_eq!(
            ranked,
            vec![("datacenter".to_owned(), 3), ("advertising".to_owned(), 2)]
        );
    }

    #[test]
    fn unittest_rank_tie_break_is_first_occurrence() {
        let records = vec![
            record_with_keywords(&["churn", "capex"]),
            record_with_keywords(&["capex", "churn", "guyana"]),
        ];

        // churn and capex both count 2: churn was seen first and stays first.
        let ranked = rank_keywords(&records, 10);
        assert_eq!(
            ranked,
            vec![
                ("churn".to_owned(), 2),
                ("capex".to_owned(), 2),
                ("guyana".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn unittest_rank_returns_at_most_top() {
        let records = vec![record_with_keywords(&[
            "alpha beta",
            "gamma delta",
            "epsilon zeta",
        ])];
        assert_eq!(rank_keywords(&records, 2).len(), 2);
        assert_eq!(rank_keywords(&records, 0).len(), 0);
    }
}
