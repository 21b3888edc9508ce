//! Filter operators and the facet-dependent operator sets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::FacetKind;

/// Comparison mode applied to a facet's selected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterOperator {
    Is,
    IsNot,
    IsAnyOf,
    Include,
    DoNotInclude,
    IncludeAnyOf,
    /// Record misses at least one selected value (negated `Include`).
    ExcludeAllOf,
    MoreThan,
    LessThan,
    EqualTo,
    Before,
    After,
}

const SCALAR_SINGLE: &[FilterOperator] = &[FilterOperator::Is, FilterOperator::IsNot];
const SCALAR_MULTI: &[FilterOperator] = &[FilterOperator::IsAnyOf, FilterOperator::IsNot];
const KEYWORD_SINGLE: &[FilterOperator] = &[FilterOperator::Include, FilterOperator::DoNotInclude];
const KEYWORD_MULTI: &[FilterOperator] =
    &[FilterOperator::IncludeAnyOf, FilterOperator::ExcludeAllOf];
const NUMERIC: &[FilterOperator] = &[
    FilterOperator::EqualTo,
    FilterOperator::MoreThan,
    FilterOperator::LessThan,
];
const DATE: &[FilterOperator] = &[FilterOperator::Before, FilterOperator::After];

impl FilterOperator {
    /// Swedish label shown on filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Is => "är",
            FilterOperator::IsNot => "är inte",
            FilterOperator::IsAnyOf => "är någon av",
            FilterOperator::Include => "innehåller",
            FilterOperator::DoNotInclude => "innehåller inte",
            FilterOperator::IncludeAnyOf => "innehåller någon av",
            FilterOperator::ExcludeAllOf => "exkluderar alla",
            FilterOperator::MoreThan => "fler än",
            FilterOperator::LessThan => "färre än",
            FilterOperator::EqualTo => "exakt",
            FilterOperator::Before => "före",
            FilterOperator::After => "efter",
        }
    }

    /// Stable kebab-case key.
    pub fn key(&self) -> &'static str {
        match self {
            FilterOperator::Is => "is",
            FilterOperator::IsNot => "is-not",
            FilterOperator::IsAnyOf => "is-any-of",
            FilterOperator::Include => "include",
            FilterOperator::DoNotInclude => "do-not-include",
            FilterOperator::IncludeAnyOf => "include-any-of",
            FilterOperator::ExcludeAllOf => "exclude-all-of",
            FilterOperator::MoreThan => "more-than",
            FilterOperator::LessThan => "less-than",
            FilterOperator::EqualTo => "equal-to",
            FilterOperator::Before => "before",
            FilterOperator::After => "after",
        }
    }

    pub fn all() -> &'static [FilterOperator] {
        &[
            FilterOperator::Is,
            FilterOperator::IsNot,
            FilterOperator::IsAnyOf,
            FilterOperator::Include,
            FilterOperator::DoNotInclude,
            FilterOperator::IncludeAnyOf,
            FilterOperator::ExcludeAllOf,
            FilterOperator::MoreThan,
            FilterOperator::LessThan,
            FilterOperator::EqualTo,
            FilterOperator::Before,
            FilterOperator::After,
        ]
    }

    /// Parse a key (`is-any-of`, `is_any_of`) or Swedish label (`är någon av`).
    pub fn from_key(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|op| op.key() == normalized || op.label() == normalized)
    }

    /// Operators that compare against a single threshold value.
    pub fn takes_threshold(&self) -> bool {
        matches!(
            self,
            FilterOperator::MoreThan
                | FilterOperator::LessThan
                | FilterOperator::EqualTo
                | FilterOperator::Before
                | FilterOperator::After
        )
    }

    /// Counterpart on the other side of the single/multi boundary.
    fn cardinality_counterpart(&self) -> Option<Self> {
        match self {
            FilterOperator::Is => Some(FilterOperator::IsAnyOf),
            FilterOperator::IsAnyOf => Some(FilterOperator::Is),
            FilterOperator::Include => Some(FilterOperator::IncludeAnyOf),
            FilterOperator::IncludeAnyOf => Some(FilterOperator::Include),
            FilterOperator::DoNotInclude => Some(FilterOperator::ExcludeAllOf),
            FilterOperator::ExcludeAllOf => Some(FilterOperator::DoNotInclude),
            _ => None,
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Operators offered for a facet kind at the given selected-value count.
pub fn operators_for(kind: FacetKind, value_count: usize) -> &'static [FilterOperator] {
    let multi = value_count > 1;
    match kind {
        FacetKind::Categorical | FacetKind::Hierarchical | FacetKind::Year => {
            if multi {
                SCALAR_MULTI
            } else {
                SCALAR_SINGLE
            }
        }
        FacetKind::Keyword => {
            if multi {
                KEYWORD_MULTI
            } else {
                KEYWORD_SINGLE
            }
        }
        FacetKind::Numeric => NUMERIC,
        FacetKind::Date => DATE,
    }
}

/// Operator a newly added filter starts with.
pub fn default_operator(kind: FacetKind) -> FilterOperator {
    operators_for(kind, 0)[0]
}

/// Whether `operator` is offered for `kind` at `value_count`.
pub fn is_allowed(kind: FacetKind, operator: FilterOperator, value_count: usize) -> bool {
    operators_for(kind, value_count).contains(&operator)
}

/// Keep `current` if still offered, otherwise move it across the
/// single/multi boundary, otherwise fall back to the first offered operator.
pub fn reconcile_operator(
    kind: FacetKind,
    current: FilterOperator,
    value_count: usize,
) -> FilterOperator {
    let allowed = operators_for(kind, value_count);
    if allowed.contains(&current) {
        return current;
    }
    current
        .cardinality_counterpart()
        .filter(|op| allowed.contains(op))
        .unwrap_or(allowed[0])
}
