//! Sort functionality for record lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::collation;
use crate::record::{sort_field_def, Record};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Select `field`: flips direction if it is already active, otherwise
    /// switches to it with the field's default direction.
    pub fn toggle<R>(self, field: F) -> Self
    where
        R: Record<SortField = F>,
    {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            let direction = sort_field_def::<R>(field)
                .map(|def| def.default_direction)
                .unwrap_or(SortDirection::Ascending);
            Self::new(field, direction)
        }
    }
}

/// Sort key handed out by a sort-field accessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Date(NaiveDate),
    Number(i64),
    /// Enumerated label ordered through a [`RankTable`].
    Rank(&'a str),
    Missing,
}

/// Explicit rank per priority label; higher ranks sort later ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable(BTreeMap<String, u32>);

impl Default for RankTable {
    fn default() -> Self {
        Self::from_pairs(&[("brådskande", 3), ("normal", 2), ("ej_prioritet", 1)])
    }
}

impl RankTable {
    pub fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(label, rank)| (label.to_string(), *rank))
                .collect(),
        )
    }

    /// Rank of `label`; unknown labels rank 0.
    pub fn rank(&self, label: &str) -> u32 {
        self.0.get(label).copied().unwrap_or(0)
    }
}

/// Compare two sort keys in ascending order.
///
/// Missing keys sort before present ones.
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>, ranks: &RankTable) -> Ordering {
    match (a, b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Less,
        (_, SortValue::Missing) => Ordering::Greater,
        (SortValue::Text(a), SortValue::Text(b)) => collation::compare(a, b),
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
        (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
        (SortValue::Rank(a), SortValue::Rank(b)) => ranks.rank(a).cmp(&ranks.rank(b)),
        // Accessors return one variant per field
        _ => Ordering::Equal,
    }
}

/// Compare two records under `spec`.
pub fn compare_records<R: Record>(
    a: &R,
    b: &R,
    spec: &SortSpec<R::SortField>,
    ranks: &RankTable,
) -> Ordering {
    match sort_field_def::<R>(spec.field) {
        Some(def) => spec
            .direction
            .apply(compare_values(&(def.accessor)(a), &(def.accessor)(b), ranks)),
        None => Ordering::Equal,
    }
}

/// Stable sort of record references; ties keep their input order.
pub fn sort_records<R: Record>(
    records: &mut [&R],
    spec: &SortSpec<R::SortField>,
    ranks: &RankTable,
) {
    records.sort_by(|a, b| compare_records(*a, *b, spec, ranks));
}
