//! Faceted filter model, evaluator and free-text search predicate.
//!
//! A [`Filter`] names a facet from the record's facet table, an operator and
//! a set of selected values. Filters with no values are inert: they stay in
//! the list (so they can be edited) but never exclude a record. Multiple
//! filters, including several on the same facet, combine with AND.

pub mod evaluate;
pub mod operator;
pub mod search;

use serde::Serialize;
use std::fmt;

use crate::errors::{Error, Result};
use crate::record::FacetKind;

pub use evaluate::{
    matches_all, matches_filter, parse_date_threshold, parse_numeric_threshold, DateThreshold,
};
pub use operator::{
    default_operator, is_allowed, operators_for, reconcile_operator, FilterOperator,
};
pub use search::SearchQuery;

/// Identifier of a filter within one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FilterId(pub u64);

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filter-{}", self.0)
    }
}

/// One active filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter<F> {
    pub id: FilterId,
    pub facet: F,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

impl<F> Filter<F> {
    /// New, empty filter with the kind's default operator.
    pub fn new(id: FilterId, facet: F, kind: FacetKind) -> Self {
        Self {
            id,
            facet,
            operator: default_operator(kind),
            values: Vec::new(),
        }
    }

    /// Builder used mostly by tests and the CLI.
    pub fn with(id: FilterId, facet: F, operator: FilterOperator, values: &[&str]) -> Self {
        Self {
            id,
            facet,
            operator,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// An empty filter never excludes a record.
    pub fn is_inert(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace the selected values, de-duplicating them and keeping the
    /// operator inside the set offered for the new value count.
    pub fn set_values(&mut self, kind: FacetKind, values: Vec<String>) {
        let mut deduped: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }
        self.values = deduped;
        self.operator = reconcile_operator(kind, self.operator, self.values.len());
    }
}

/// Reject selections the evaluator could only treat as "no match":
/// several thresholds, or a threshold that does not parse.
pub fn check_values(facet: &str, kind: FacetKind, values: &[String]) -> Result<()> {
    let parses: fn(&str) -> bool = match kind {
        FacetKind::Numeric => |v: &str| parse_numeric_threshold(v).is_some(),
        FacetKind::Date => |v: &str| parse_date_threshold(v).is_some(),
        _ => return Ok(()),
    };
    if values.len() > 1 {
        return Err(Error::invalid_filter(
            values.join(","),
            format!("facet '{}' takes a single threshold", facet),
        ));
    }
    match values.first() {
        Some(value) if !parses(value) => Err(Error::invalid_filter(
            value.as_str(),
            match kind {
                FacetKind::Date => format!("'{}' expects a date (YYYY-MM-DD or YYYY)", facet),
                _ => format!("'{}' expects a whole number", facet),
            },
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Facet {
        Court,
        Keywords,
    }

    #[test]
    fn test_new_filter_is_inert() {
        let filter = Filter::new(FilterId(1), Facet::Court, FacetKind::Hierarchical);
        assert!(filter.is_inert());
        assert_eq!(filter.operator, FilterOperator::Is);
    }

    #[test]
    fn test_set_values_reconciles_operator() {
        let mut filter = Filter::new(FilterId(1), Facet::Keywords, FacetKind::Keyword);
        filter.set_values(FacetKind::Keyword, vec!["GDPR".into(), "AI".into()]);
        assert_eq!(filter.operator, FilterOperator::IncludeAnyOf);

        filter.set_values(FacetKind::Keyword, vec!["GDPR".into()]);
        assert_eq!(filter.operator, FilterOperator::Include);
    }

    #[test]
    fn test_set_values_dedupes() {
        let mut filter = Filter::new(FilterId(2), Facet::Court, FacetKind::Categorical);
        filter.set_values(
            FacetKind::Categorical,
            vec!["Arbetsdomstolen".into(), "Arbetsdomstolen".into()],
        );
        assert_eq!(filter.values, vec!["Arbetsdomstolen".to_string()]);
        assert_eq!(filter.operator, FilterOperator::Is);
    }

    #[test]
    fn test_check_values_thresholds() {
        let one = |v: &str| vec![v.to_string()];
        assert!(check_values("members", FacetKind::Numeric, &one("3")).is_ok());
        assert!(check_values("members", FacetKind::Numeric, &one("5+")).is_err());
        assert!(check_values("decided", FacetKind::Date, &one("2023")).is_ok());
        assert!(check_values("decided", FacetKind::Date, &one("mars")).is_err());
        assert!(check_values("members", FacetKind::Numeric, &[]).is_ok());
        assert!(check_values(
            "members",
            FacetKind::Numeric,
            &["1".to_string(), "2".to_string()]
        )
        .is_err());
        assert!(check_values("court", FacetKind::Hierarchical, &one("vad som helst")).is_ok());
    }

    #[test]
    fn test_filter_id_display() {
        assert_eq!(FilterId(7).to_string(), "filter-7");
    }
}
