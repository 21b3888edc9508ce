//! Facet option derivation.
//!
//! Builds the distinct selectable values of a facet from a record
//! collection, in the display order of the facet kind. Values come from
//! [`FacetDef::derive`], the same derivation the evaluator uses.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::collation;
use crate::errors::{Error, Result};
use crate::hierarchy::{Hierarchy, UNCATEGORISED_LABEL};
use crate::record::{facet_def, FacetDef, FacetKind, FacetValues, Record};
use crate::repository::Repository;

/// One selectable value and how many records hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

/// Options under one heading; flat facets have a single unlabelled group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub label: Option<String>,
    pub options: Vec<FacetOption>,
}

/// Option list for one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub facet: &'static str,
    pub kind: FacetKind,
    pub groups: Vec<OptionGroup>,
}

impl FacetOptions {
    /// All option values in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.options.iter().map(|option| option.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.options.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive the option list of `def` over `records`.
pub fn derive_options<R: Record>(records: &[R], def: &FacetDef<R>) -> FacetOptions {
    let counts = count_values(records, def);
    let mut options: Vec<FacetOption> = counts
        .into_iter()
        .map(|(value, count)| FacetOption { value, count })
        .collect();

    let groups = match def.kind {
        FacetKind::Hierarchical => {
            let hierarchy = def.hierarchy.map(|get| get());
            group_hierarchical(options, hierarchy)
        }
        kind => {
            options.sort_by(|a, b| compare_flat(kind, &a.value, &b.value));
            vec![OptionGroup {
                label: None,
                options,
            }]
        }
    };

    FacetOptions {
        facet: def.key,
        kind: def.kind,
        groups,
    }
}

fn count_values<R: Record>(records: &[R], def: &FacetDef<R>) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let mut seen: Vec<String> = Vec::new();
        match def.derive(record) {
            FacetValues::Tokens(tokens) => {
                for token in tokens {
                    let token = token.into_owned();
                    if !token.is_empty() && !seen.contains(&token) {
                        seen.push(token);
                    }
                }
            }
            FacetValues::Number(n) => seen.push(n.to_string()),
            FacetValues::Date(date) => seen.push(date.format("%Y-%m-%d").to_string()),
            FacetValues::Absent => {}
        }
        for value in seen {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    counts
}

fn compare_flat(kind: FacetKind, a: &str, b: &str) -> Ordering {
    match kind {
        // Most recent year first
        FacetKind::Year => match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(x), Ok(y)) => y.cmp(&x),
            _ => collation::compare(b, a),
        },
        FacetKind::Numeric => match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => collation::compare(a, b),
        },
        // ISO dates order lexicographically; most recent first
        FacetKind::Date => b.cmp(a),
        FacetKind::Categorical | FacetKind::Hierarchical | FacetKind::Keyword => {
            collation::compare(a, b)
        }
    }
}

fn group_hierarchical(options: Vec<FacetOption>, hierarchy: Option<&Hierarchy>) -> Vec<OptionGroup> {
    let Some(hierarchy) = hierarchy else {
        let mut options = options;
        options.sort_by(|a, b| collation::compare(&a.value, &b.value));
        return vec![OptionGroup {
            label: None,
            options,
        }];
    };

    let categories = hierarchy.categories();
    let mut buckets: Vec<Vec<(u8, FacetOption)>> = vec![Vec::new(); categories.len() + 1];
    for option in options {
        match hierarchy.locate(&option.value) {
            Some(placement) => buckets[placement.category].push((placement.tier, option)),
            None => buckets[categories.len()].push((u8::MAX, option)),
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(index, mut bucket)| {
            bucket.sort_by(|(tier_a, a), (tier_b, b)| {
                tier_a
                    .cmp(tier_b)
                    .then_with(|| collation::compare(&a.value, &b.value))
            });
            let label = categories
                .get(index)
                .map(|category| category.name.clone())
                .unwrap_or_else(|| UNCATEGORISED_LABEL.to_string());
            OptionGroup {
                label: Some(label),
                options: bucket.into_iter().map(|(_, option)| option).collect(),
            }
        })
        .collect()
}

/// Per-facet option lists, valid for one collection at one generation.
///
/// Lists are keyed by the repository's source id and generation. A lookup
/// against another repository, or after any write, drops every cached list.
#[derive(Debug)]
pub struct OptionCache<F> {
    stamp: Option<(u64, u64)>,
    entries: HashMap<F, FacetOptions>,
}

impl<F> Default for OptionCache<F> {
    fn default() -> Self {
        Self {
            stamp: None,
            entries: HashMap::new(),
        }
    }
}

impl<F: Copy + Eq + Hash + std::fmt::Debug> OptionCache<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached options for `facet`, derived on first use per collection state.
    pub fn get_or_derive<Repo>(&mut self, repo: &Repo, facet: F) -> Result<&FacetOptions>
    where
        Repo: Repository + ?Sized,
        Repo::Record: Record<Facet = F>,
    {
        let stamp = (repo.source_id(), repo.generation());
        if self.stamp != Some(stamp) {
            if let Some((source, generation)) = self.stamp {
                tracing::debug!(
                    from_source = source,
                    from_generation = generation,
                    to_source = stamp.0,
                    to_generation = stamp.1,
                    "Collection changed, dropping cached facet options"
                );
            }
            self.entries.clear();
            self.stamp = Some(stamp);
        }
        let generation = stamp.1;

        let def = facet_def::<Repo::Record>(facet)
            .ok_or_else(|| Error::UnknownFacet(format!("{:?}", facet)))?;
        Ok(self.entries.entry(facet).or_insert_with(|| {
            tracing::debug!(facet = def.key, generation, "Deriving facet options");
            derive_options(repo.all(), def)
        }))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Category;
    use pretty_assertions::assert_eq;

    fn option(value: &str) -> FacetOption {
        FacetOption {
            value: value.to_string(),
            count: 1,
        }
    }

    fn sorted(kind: FacetKind, values: &[&str]) -> Vec<String> {
        let mut owned: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        owned.sort_by(|a, b| compare_flat(kind, a, b));
        owned
    }

    #[test]
    fn test_years_descending() {
        assert_eq!(
            sorted(FacetKind::Year, &["2021", "2023", "2022"]),
            vec!["2023", "2022", "2021"]
        );
    }

    #[test]
    fn test_numbers_ascending_numerically() {
        assert_eq!(
            sorted(FacetKind::Numeric, &["10", "2", "1"]),
            vec!["1", "2", "10"]
        );
    }

    #[test]
    fn test_dates_most_recent_first() {
        assert_eq!(
            sorted(FacetKind::Date, &["2023-02-09", "2023-11-20", "2023-06-22"]),
            vec!["2023-11-20", "2023-06-22", "2023-02-09"]
        );
    }

    #[test]
    fn test_categorical_swedish_order() {
        assert_eq!(
            sorted(FacetKind::Categorical, &["Överklagande", "Avtalsrätt", "Arbetsrätt"]),
            vec!["Arbetsrätt", "Avtalsrätt", "Överklagande"]
        );
    }

    #[test]
    fn test_hierarchical_grouping_by_category_then_tier() {
        let hierarchy = Hierarchy::new(vec![
            Category::new("Allmänna domstolar")
                .with_tier(0, &["Högsta domstolen"])
                .with_tier(1, &["Svea hovrätt"])
                .with_tier(2, &["Stockholms tingsrätt", "Malmö tingsrätt"]),
            Category::new("Specialdomstolar").with_tier(3, &["Arbetsdomstolen"]),
        ]);
        let options = vec![
            option("Stockholms tingsrätt"),
            option("Arbetsdomstolen"),
            option("Malmö tingsrätt"),
            option("Högsta domstolen"),
            option("Okänd nämnd"),
            option("Svea hovrätt"),
        ];

        let groups = group_hierarchical(options, Some(&hierarchy));
        let shape: Vec<(Option<String>, Vec<String>)> = groups
            .into_iter()
            .map(|g| (g.label, g.options.into_iter().map(|o| o.value).collect()))
            .collect();

        assert_eq!(
            shape,
            vec![
                (
                    Some("Allmänna domstolar".to_string()),
                    vec![
                        "Högsta domstolen".to_string(),
                        "Svea hovrätt".to_string(),
                        "Malmö tingsrätt".to_string(),
                        "Stockholms tingsrätt".to_string(),
                    ]
                ),
                (
                    Some("Specialdomstolar".to_string()),
                    vec!["Arbetsdomstolen".to_string()]
                ),
                (
                    Some(UNCATEGORISED_LABEL.to_string()),
                    vec!["Okänd nämnd".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_hierarchical_without_catalogue_is_flat() {
        let groups = group_hierarchical(vec![option("Ö"), option("A")], None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, None);
        assert_eq!(groups[0].options[0].value, "A");
    }
}
