//! Record abstraction shared by the filter, sort and option modules.
//!
//! A record type describes itself through two static tables: one
//! [`FacetDef`] per filterable facet and one [`SortFieldDef`] per sortable
//! column. The engine never matches on concrete record types; it looks the
//! facet or sort field up in the table and calls its accessor.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

use crate::hierarchy::Hierarchy;
use crate::sort::{SortDirection, SortSpec, SortValue};

/// How a facet's field is read and which operators apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    /// Single string value compared for equality.
    Categorical,
    /// Categorical value whose options are grouped by a [`Hierarchy`].
    Hierarchical,
    /// Year component of a date field.
    Year,
    /// Set of tags; operators use set semantics.
    Keyword,
    /// Integer compared against a threshold.
    Numeric,
    /// Calendar date compared against a threshold.
    Date,
}

/// Raw field value handed out by a facet accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Texts(&'a [String]),
    Number(i64),
    Date(NaiveDate),
    Missing,
}

/// Facet value after derivation.
///
/// Evaluation and option building both go through [`FacetDef::derive`], so a
/// year facet yields the same token whether it is being filtered or listed.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetValues<'a> {
    Tokens(Vec<Cow<'a, str>>),
    Number(i64),
    Date(NaiveDate),
    Absent,
}

impl FacetValues<'_> {
    /// True if `value` is one of the tokens.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            FacetValues::Tokens(tokens) => tokens.iter().any(|t| t == value),
            _ => false,
        }
    }
}

/// One row of a record type's facet table.
pub struct FacetDef<R: Record> {
    pub facet: R::Facet,
    /// Stable lowercase key used on the command line and in JSON.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    pub kind: FacetKind,
    pub accessor: fn(&R) -> FieldValue<'_>,
    /// Grouping used for option lists of hierarchical facets.
    pub hierarchy: Option<fn() -> &'static Hierarchy>,
}

impl<R: Record> FacetDef<R> {
    /// Read and derive this facet's value from `record`.
    pub fn derive<'a>(&self, record: &'a R) -> FacetValues<'a> {
        derive_value(self.kind, (self.accessor)(record))
    }
}

impl<R: Record> fmt::Debug for FacetDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetDef")
            .field("facet", &self.facet)
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish()
    }
}

/// One row of a record type's sort table.
pub struct SortFieldDef<R: Record> {
    pub field: R::SortField,
    pub key: &'static str,
    pub label: &'static str,
    /// Direction applied when this field is newly selected.
    pub default_direction: SortDirection,
    pub accessor: fn(&R) -> SortValue<'_>,
}

impl<R: Record> fmt::Debug for SortFieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortFieldDef")
            .field("field", &self.field)
            .field("key", &self.key)
            .field("default_direction", &self.default_direction)
            .finish()
    }
}

/// An entity the engine can search, filter, sort and page.
pub trait Record: Sized + 'static {
    type Facet: Copy + Eq + Hash + fmt::Debug + Serialize + 'static;
    type SortField: Copy + Eq + fmt::Debug + Serialize + 'static;

    /// Unique identifier within a collection.
    fn id(&self) -> &str;

    /// Facet table for this record type.
    fn facets() -> &'static [FacetDef<Self>];

    /// Sort table for this record type.
    fn sort_fields() -> &'static [SortFieldDef<Self>];

    /// Ordering used before the user picks a column.
    fn default_sort() -> SortSpec<Self::SortField>;

    /// Text fields searched by the free-text predicate.
    fn search_fields(&self) -> Vec<&str>;
}

/// Look up the table row for `facet`.
pub fn facet_def<R: Record>(facet: R::Facet) -> Option<&'static FacetDef<R>> {
    R::facets().iter().find(|def| def.facet == facet)
}

/// Look up a facet by key or label, ignoring case.
pub fn facet_by_key<R: Record>(key: &str) -> Option<&'static FacetDef<R>> {
    let key = key.trim();
    R::facets()
        .iter()
        .find(|def| def.key.eq_ignore_ascii_case(key) || def.label.to_lowercase() == key.to_lowercase())
}

/// Look up the table row for `field`.
pub fn sort_field_def<R: Record>(field: R::SortField) -> Option<&'static SortFieldDef<R>> {
    R::sort_fields().iter().find(|def| def.field == field)
}

/// Look up a sort field by key, ignoring case.
pub fn sort_field_by_key<R: Record>(key: &str) -> Option<&'static SortFieldDef<R>> {
    let key = key.trim();
    R::sort_fields()
        .iter()
        .find(|def| def.key.eq_ignore_ascii_case(key))
}

fn derive_value(kind: FacetKind, value: FieldValue<'_>) -> FacetValues<'_> {
    match (kind, value) {
        (_, FieldValue::Missing) => match kind {
            FacetKind::Numeric | FacetKind::Date => FacetValues::Absent,
            _ => FacetValues::Tokens(Vec::new()),
        },
        (FacetKind::Year, FieldValue::Date(date)) => {
            FacetValues::Tokens(vec![Cow::Owned(date.year().to_string())])
        }
        (FacetKind::Year, FieldValue::Text(text)) => {
            // ISO-style strings: the year is everything before the first dash
            let year = text.split('-').next().unwrap_or(text).trim();
            if year.is_empty() {
                FacetValues::Tokens(Vec::new())
            } else {
                FacetValues::Tokens(vec![Cow::Borrowed(year)])
            }
        }
        (FacetKind::Year, FieldValue::Number(n)) => {
            FacetValues::Tokens(vec![Cow::Owned(n.to_string())])
        }
        (FacetKind::Numeric, FieldValue::Number(n)) => FacetValues::Number(n),
        (FacetKind::Numeric, FieldValue::Text(text)) => text
            .trim()
            .parse()
            .map(FacetValues::Number)
            .unwrap_or(FacetValues::Absent),
        (FacetKind::Date, FieldValue::Date(date)) => FacetValues::Date(date),
        (FacetKind::Date, FieldValue::Text(text)) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(FacetValues::Date)
            .unwrap_or(FacetValues::Absent),
        (FacetKind::Numeric | FacetKind::Date, _) => FacetValues::Absent,
        (_, FieldValue::Text(text)) => FacetValues::Tokens(vec![Cow::Borrowed(text)]),
        (_, FieldValue::Texts(texts)) => {
            FacetValues::Tokens(texts.iter().map(|t| Cow::Borrowed(t.as_str())).collect())
        }
        (_, FieldValue::Number(n)) => FacetValues::Tokens(vec![Cow::Owned(n.to_string())]),
        (_, FieldValue::Date(date)) => {
            FacetValues::Tokens(vec![Cow::Owned(date.format("%Y-%m-%d").to_string())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_from_date() {
        let derived = derive_value(FacetKind::Year, FieldValue::Date(date(2023, 3, 15)));
        assert_eq!(derived, FacetValues::Tokens(vec![Cow::Borrowed("2023")]));
    }

    #[test]
    fn test_year_from_iso_text() {
        let derived = derive_value(FacetKind::Year, FieldValue::Text("2021-11-02"));
        assert!(derived.contains("2021"));
    }

    #[test]
    fn test_keyword_tokens() {
        let keywords = vec!["GDPR".to_string(), "Dataskydd".to_string()];
        let derived = derive_value(FacetKind::Keyword, FieldValue::Texts(&keywords));
        assert!(derived.contains("GDPR"));
        assert!(derived.contains("Dataskydd"));
        assert!(!derived.contains("gdpr"));
    }

    #[test]
    fn test_missing_scalar_is_empty_token_set() {
        let derived = derive_value(FacetKind::Categorical, FieldValue::Missing);
        assert_eq!(derived, FacetValues::Tokens(Vec::new()));
    }

    #[test]
    fn test_missing_numeric_is_absent() {
        assert_eq!(
            derive_value(FacetKind::Numeric, FieldValue::Missing),
            FacetValues::Absent
        );
    }

    #[test]
    fn test_numeric_from_text() {
        assert_eq!(
            derive_value(FacetKind::Numeric, FieldValue::Text(" 4 ")),
            FacetValues::Number(4)
        );
        assert_eq!(
            derive_value(FacetKind::Numeric, FieldValue::Text("många")),
            FacetValues::Absent
        );
    }

    #[test]
    fn test_date_from_text() {
        assert_eq!(
            derive_value(FacetKind::Date, FieldValue::Text("2024-02-15")),
            FacetValues::Date(date(2024, 2, 15))
        );
    }
}
