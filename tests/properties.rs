//! Property tests for the evaluation pipeline.

mod common;

use std::num::NonZeroUsize;

use asterism::domain::{ProjectMember, ProjectPermission};
use asterism::filter::{operators_for, FilterId};
use asterism::query::filter_and_sort;
use asterism::record::{facet_def, Record};
use asterism::{
    run_query, FacetKind, Filter, LegalCase, LegalFacet, LegalSortField, Project, ProjectFacet,
    ProjectPriority, RecordQuery, SortDirection, SortSpec,
};
use common::{case, day, project};
use proptest::prelude::*;

const COURTS: &[&str] = &[
    "Högsta domstolen",
    "Svea hovrätt",
    "Arbetsdomstolen",
    "Stockholms tingsrätt",
];
const AREAS: &[&str] = &["Arbetsrätt", "Miljörätt", "Skatterätt", "Civilrätt"];
const KEYWORDS: &[&str] = &["GDPR", "Dataskydd", "Uppsägning", "Tillstånd", "AI"];
const YEARS: &[&str] = &["2019", "2020", "2021", "2022", "2023"];

fn arb_case(index: usize) -> impl Strategy<Value = LegalCase> {
    (
        0..COURTS.len(),
        0..AREAS.len(),
        proptest::sample::subsequence(KEYWORDS.to_vec(), 0..=3),
        2019i32..=2023,
        1u32..=12,
    )
        .prop_map(move |(court, area, keywords, year, month)| LegalCase {
            legal_area: AREAS[area].to_string(),
            keywords: keywords.into_iter().map(str::to_string).collect(),
            date: day(year, month, 1),
            ..case(&index.to_string(), COURTS[court])
        })
}

fn arb_cases() -> impl Strategy<Value = Vec<LegalCase>> {
    (0usize..40).prop_flat_map(|len| (0..len).map(arb_case).collect::<Vec<_>>())
}

/// A filter on one of the flat facets, with an operator valid for its
/// value count.
fn arb_value_filter() -> impl Strategy<Value = Filter<LegalFacet>> {
    (0usize..4, any::<proptest::sample::Index>()).prop_flat_map(|(facet, op)| {
        let (facet, pool) = match facet {
            0 => (LegalFacet::Court, COURTS),
            1 => (LegalFacet::LegalArea, AREAS),
            2 => (LegalFacet::Keywords, KEYWORDS),
            _ => (LegalFacet::Year, YEARS),
        };
        proptest::sample::subsequence(pool.to_vec(), 0..=3).prop_map(move |values| {
            let kind = facet_def::<LegalCase>(facet).map(|def| def.kind).unwrap();
            let operators = operators_for(kind, values.len());
            Filter::with(FilterId(1), facet, *op.get(operators), &values)
        })
    })
}

/// A whole year or a single day, as typed into a date threshold.
fn arb_date_threshold() -> impl Strategy<Value = String> {
    prop_oneof![
        (2018i32..=2024).prop_map(|year| year.to_string()),
        (2018i32..=2024, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
    ]
}

/// A single-threshold filter on a numeric or date facet.
fn arb_threshold_filter<F: Copy + std::fmt::Debug + 'static>(
    facet: F,
    kind: FacetKind,
    threshold: impl Strategy<Value = String>,
) -> impl Strategy<Value = Filter<F>> {
    (any::<proptest::sample::Index>(), threshold).prop_map(move |(op, value)| {
        let operator = *op.get(operators_for(kind, 1));
        Filter::with(FilterId(1), facet, operator, &[value.as_str()])
    })
}

fn arb_filter() -> impl Strategy<Value = Filter<LegalFacet>> {
    prop_oneof![
        3 => arb_value_filter(),
        1 => arb_threshold_filter(LegalFacet::Decided, FacetKind::Date, arb_date_threshold()),
    ]
}

fn arb_project(index: usize) -> impl Strategy<Value = Project> {
    (0usize..5, 2018i32..=2024, 1u32..=12).prop_map(move |(extra, year, month)| {
        let mut record = project(&format!("p{}", index), ProjectPriority::Normal);
        record.members.extend((0..extra).map(|n| ProjectMember {
            user_id: format!("user-{}", n + 2),
            permission: ProjectPermission::Viewer,
        }));
        record.created_at = day(year, month, 1);
        record
    })
}

fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    (0usize..30).prop_flat_map(|len| (0..len).map(arb_project).collect::<Vec<_>>())
}

fn arb_project_filter() -> impl Strategy<Value = Filter<ProjectFacet>> {
    prop_oneof![
        arb_threshold_filter(
            ProjectFacet::Members,
            FacetKind::Numeric,
            (0u32..=6).prop_map(|n| n.to_string()),
        ),
        arb_threshold_filter(ProjectFacet::Created, FacetKind::Date, arb_date_threshold()),
    ]
}

fn ids<R: Record>(records: &[&R]) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}

fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

proptest! {
    /// Property: re-filtering a filtered result changes nothing
    #[test]
    fn prop_filtering_is_idempotent(cases in arb_cases(), filter in arb_filter()) {
        let query = RecordQuery::<LegalCase>::new(page_size(9)).with_filter(filter);
        let once = filter_and_sort(&cases, &query);
        let kept: Vec<LegalCase> = once.iter().map(|c| (*c).clone()).collect();
        let twice = filter_and_sort(&kept, &query);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// Property: adding a filter never grows the match count
    #[test]
    fn prop_filters_are_monotonic(
        cases in arb_cases(),
        first in arb_filter(),
        second in arb_filter(),
    ) {
        let base = RecordQuery::<LegalCase>::new(page_size(9)).with_filter(first);
        let narrowed = base.clone().with_filter(second);
        prop_assert!(
            filter_and_sort(&cases, &narrowed).len() <= filter_and_sort(&cases, &base).len()
        );
    }

    /// Property: numeric and date thresholds are idempotent and only narrow
    #[test]
    fn prop_project_thresholds_narrow(
        projects in arb_projects(),
        first in arb_project_filter(),
        second in arb_project_filter(),
    ) {
        let base = RecordQuery::<Project>::new(page_size(9)).with_filter(first);
        let once = filter_and_sort(&projects, &base);
        let kept: Vec<Project> = once.iter().map(|p| (*p).clone()).collect();
        prop_assert_eq!(ids(&once), ids(&filter_and_sort(&kept, &base)));

        let narrowed = base.clone().with_filter(second);
        prop_assert!(filter_and_sort(&projects, &narrowed).len() <= once.len());
    }

    /// Property: a filter with no values keeps every record
    #[test]
    fn prop_empty_filter_is_neutral(cases in arb_cases(), facet in 0usize..6) {
        let facet = [
            LegalFacet::Court,
            LegalFacet::LegalArea,
            LegalFacet::Year,
            LegalFacet::CaseNumber,
            LegalFacet::Keywords,
            LegalFacet::Decided,
        ][facet];
        let kind = facet_def::<LegalCase>(facet).map(|def| def.kind).unwrap();
        let plain = RecordQuery::<LegalCase>::new(page_size(9));
        let with_chip = plain.clone().with_filter(Filter::new(FilterId(1), facet, kind));
        prop_assert_eq!(
            ids(&filter_and_sort(&cases, &plain)),
            ids(&filter_and_sort(&cases, &with_chip))
        );
    }

    /// Property: records with equal sort keys keep their input order
    #[test]
    fn prop_sort_is_stable(cases in arb_cases(), descending in any::<bool>()) {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let query = RecordQuery::<LegalCase>::new(page_size(9))
            .with_sort(SortSpec::new(LegalSortField::Court, direction));
        let sorted = filter_and_sort(&cases, &query);
        for pair in sorted.windows(2) {
            if pair[0].court == pair[1].court {
                let a: usize = pair[0].id.parse().unwrap();
                let b: usize = pair[1].id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    /// Property: with distinct keys, descending is ascending reversed
    #[test]
    fn prop_direction_reverses_distinct_keys(cases in arb_cases()) {
        let sorted = |direction| {
            let query = RecordQuery::<LegalCase>::new(page_size(9))
                .with_sort(SortSpec::new(LegalSortField::Title, direction));
            ids(&filter_and_sort(&cases, &query))
        };
        let mut ascending = sorted(SortDirection::Ascending);
        ascending.reverse();
        prop_assert_eq!(ascending, sorted(SortDirection::Descending));
    }

    /// Property: the pages together are exactly the sorted matches
    #[test]
    fn prop_pages_cover_matches(
        cases in arb_cases(),
        filter in arb_filter(),
        size in 1usize..12,
    ) {
        let query = RecordQuery::<LegalCase>::new(page_size(size)).with_filter(filter);
        let all = ids(&filter_and_sort(&cases, &query));
        let first = run_query(&cases, &query);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let result = run_query(&cases, &query.clone().with_page(page));
            prop_assert!(result.items.len() <= size);
            seen.extend(ids(&result.items));
        }
        prop_assert_eq!(seen, all);
        prop_assert!(first.total_pages >= 1);
    }

    /// Property: Swedish order regardless of input order
    #[test]
    fn prop_swedish_title_order(order in Just(vec!["Åre", "Uppsala", "Växjö"]).prop_shuffle()) {
        let cases: Vec<LegalCase> = order
            .iter()
            .enumerate()
            .map(|(i, title)| LegalCase {
                title: title.to_string(),
                ..case(&i.to_string(), "Svea hovrätt")
            })
            .collect();
        let query = RecordQuery::<LegalCase>::new(page_size(9))
            .with_sort(SortSpec::new(LegalSortField::Title, SortDirection::Ascending));
        let titles: Vec<&str> = filter_and_sort(&cases, &query)
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        prop_assert_eq!(titles, vec!["Uppsala", "Växjö", "Åre"]);
    }
}
