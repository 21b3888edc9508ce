//! Category/tier catalogue used to group hierarchical facet options.

use serde::{Deserialize, Serialize};

/// Label of the group that collects values missing from the catalogue.
pub const UNCATEGORISED_LABEL: &str = "Övriga";

/// A named category of values, each with a priority tier (lower sorts first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<(String, u8)>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add every value in `values` at `tier`.
    pub fn with_tier(mut self, tier: u8, values: &[&str]) -> Self {
        self.entries
            .extend(values.iter().map(|value| (value.to_string(), tier)));
        self
    }
}

/// Position of a value inside a [`Hierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placement {
    pub category: usize,
    pub tier: u8,
}

/// Ordered list of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    categories: Vec<Category>,
}

impl Hierarchy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find the category and tier of `value`; `None` if it is not catalogued.
    pub fn locate(&self, value: &str) -> Option<Placement> {
        self.categories
            .iter()
            .enumerate()
            .find_map(|(category, cat)| {
                cat.entries
                    .iter()
                    .find(|(name, _)| name == value)
                    .map(|&(_, tier)| Placement { category, tier })
            })
    }
}
