//! Facet filter evaluation.
//!
//! Pure predicates over immutable records. Filters that cannot apply to the
//! record's field (unparseable thresholds, set operators on numbers) reject
//! the record instead of failing.

use chrono::{Datelike, NaiveDate};

use super::{Filter, FilterOperator};
use crate::record::{facet_def, FacetValues, Record};

/// Threshold for `Before`/`After`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateThreshold {
    Day(NaiveDate),
    /// A bare year covers the whole calendar year.
    Year(i32),
}

/// Parse `YYYY-MM-DD` or `YYYY`.
pub fn parse_date_threshold(input: &str) -> Option<DateThreshold> {
    let input = input.trim();
    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(DateThreshold::Day(day));
    }
    if input.len() == 4 {
        return input.parse().ok().map(DateThreshold::Year);
    }
    None
}

/// Parse an integer threshold.
pub fn parse_numeric_threshold(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// True if `record` satisfies `filter`. Inert filters match everything.
pub fn matches_filter<R: Record>(record: &R, filter: &Filter<R::Facet>) -> bool {
    if filter.is_inert() {
        return true;
    }
    match facet_def::<R>(filter.facet) {
        Some(def) => evaluate(filter.operator, &def.derive(record), &filter.values),
        None => false,
    }
}

/// True if `record` satisfies every filter.
pub fn matches_all<R: Record>(record: &R, filters: &[Filter<R::Facet>]) -> bool {
    filters.iter().all(|filter| matches_filter(record, filter))
}

fn evaluate(operator: FilterOperator, field: &FacetValues<'_>, selected: &[String]) -> bool {
    match field {
        FacetValues::Tokens(_) => {
            let any = || selected.iter().any(|value| field.contains(value));
            let all = || selected.iter().all(|value| field.contains(value));
            match operator {
                FilterOperator::Is | FilterOperator::IsAnyOf | FilterOperator::IncludeAnyOf => {
                    any()
                }
                FilterOperator::IsNot | FilterOperator::DoNotInclude => !any(),
                FilterOperator::Include => all(),
                // NOT-ALL: kept as observed in the source application
                FilterOperator::ExcludeAllOf => !all(),
                _ => false,
            }
        }
        FacetValues::Number(n) => {
            let Some(threshold) = selected.first().and_then(|v| parse_numeric_threshold(v))
            else {
                return false;
            };
            match operator {
                FilterOperator::EqualTo => *n == threshold,
                FilterOperator::MoreThan => *n > threshold,
                FilterOperator::LessThan => *n < threshold,
                _ => false,
            }
        }
        FacetValues::Date(date) => {
            let Some(threshold) = selected.first().and_then(|v| parse_date_threshold(v)) else {
                return false;
            };
            match (operator, threshold) {
                (FilterOperator::Before, DateThreshold::Day(day)) => *date < day,
                (FilterOperator::After, DateThreshold::Day(day)) => *date > day,
                (FilterOperator::Before, DateThreshold::Year(year)) => date.year() < year,
                (FilterOperator::After, DateThreshold::Year(year)) => date.year() > year,
                _ => false,
            }
        }
        FacetValues::Absent => false,
    }
}
