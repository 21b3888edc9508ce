//! Parsing of `--filter` and `--sort` arguments.

use crate::errors::{Error, Result};
use crate::filter::{FilterId, FilterOperator};
use crate::record::{facet_by_key, sort_field_by_key, Record};
use crate::sort::{SortDirection, SortSpec};
use crate::view::ListView;

/// A filter as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub input: String,
    pub facet: String,
    pub operator: Option<FilterOperator>,
    pub values: Vec<String>,
}

/// Parse `FACET:OPERATOR:VALUES` or `FACET:VALUES`.
///
/// Values are comma-separated and may themselves contain colons
/// (`case-number:is:NJA 2023:15`).
pub fn parse_filter_spec(input: &str) -> Result<FilterSpec> {
    let (facet, rest) = input
        .split_once(':')
        .ok_or_else(|| Error::invalid_filter(input, "expected FACET:OPERATOR:VALUES"))?;
    let facet = facet.trim();
    if facet.is_empty() {
        return Err(Error::invalid_filter(input, "missing facet name"));
    }

    let (operator, values) = match rest.split_once(':') {
        Some((head, tail)) => match FilterOperator::from_key(head) {
            Some(op) => (Some(op), tail),
            None => (None, rest),
        },
        None => (None, rest),
    };

    let values: Vec<String> = values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    Ok(FilterSpec {
        input: input.to_string(),
        facet: facet.to_string(),
        operator,
        values,
    })
}

/// Add `spec` to `view` as a new filter chip.
pub fn apply_filter_spec<R: Record>(view: &mut ListView<R>, spec: &FilterSpec) -> Result<FilterId> {
    let def = facet_by_key::<R>(&spec.facet).ok_or_else(|| Error::UnknownFacet(spec.facet.clone()))?;
    let id = view.add_filter(def.facet)?;
    view.set_filter_values(id, spec.values.clone())
        .map_err(|e| reword(spec, e))?;
    if let Some(operator) = spec.operator {
        view.set_filter_operator(id, operator)?;
    }
    tracing::debug!(filter = %spec.input, id = %id, "Applied filter");
    Ok(id)
}

fn reword(spec: &FilterSpec, error: Error) -> Error {
    match error {
        Error::InvalidFilter { reason, .. } => Error::invalid_filter(spec.input.as_str(), reason),
        other => other,
    }
}

/// Parse `FIELD` or `FIELD:asc|desc`; a bare field uses its default direction.
pub fn parse_sort_spec<R: Record>(input: &str) -> Result<SortSpec<R::SortField>> {
    let (field, direction) = match input.split_once(':') {
        Some((field, direction)) => (field, Some(direction)),
        None => (input, None),
    };
    let def = sort_field_by_key::<R>(field)
        .ok_or_else(|| Error::UnknownSortField(field.trim().to_string()))?;
    let direction = match direction {
        Some(key) => SortDirection::from_key(key).ok_or_else(|| {
            Error::invalid_filter(input, format!("unknown sort direction '{}'", key))
        })?,
        None => def.default_direction,
    };
    Ok(SortSpec::new(def.field, direction))
}
