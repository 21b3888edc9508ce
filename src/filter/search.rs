//! Free-text search predicate.
//!
//! The query is lowercased and split on whitespace. A record matches when
//! every token is a substring of its searchable text. No ranking.

use serde::Serialize;

use crate::record::Record;

/// Parsed free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    raw: String,
    tokens: Vec<String>,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = tokenize(&raw);
        Self { raw, tokens }
    }

    /// The query as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Empty and whitespace-only queries match everything.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.is_empty() {
            return true;
        }
        let haystack = searchable_text(record);
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }
}

/// Lowercase and split on whitespace.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Lowercased concatenation of a record's searchable fields.
pub fn searchable_text<R: Record>(record: &R) -> String {
    record.search_fields().join(" ").to_lowercase()
}
