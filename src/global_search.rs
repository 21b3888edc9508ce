//! Cross-collection quick search.
//!
//! Unlike the list-view search this matches the whole query as one
//! lowercased substring and caps the number of hits per record kind.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::domain::{Artefact, Bookmark, LegalCase, Project};

/// Kind of record behind a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Project,
    Artefact,
    Case,
    Bookmark,
}

/// One quick-search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub kind: HitKind,
    pub title: String,
    pub description: Option<String>,
    /// Location of the record in the application.
    pub url: String,
    /// Owning project, for artefacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Hits grouped per record kind, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub projects: Vec<SearchHit>,
    pub artefacts: Vec<SearchHit>,
    pub cases: Vec<SearchHit>,
    pub bookmarks: Vec<SearchHit>,
}

impl SearchResults {
    /// Group heading and hits for each kind.
    pub fn groups(&self) -> [(&'static str, &[SearchHit]); 4] {
        [
            ("Projekt", self.projects.as_slice()),
            ("Artefakter", self.artefacts.as_slice()),
            ("Rättsfall", self.cases.as_slice()),
            ("Bokmärken", self.bookmarks.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.groups().iter().map(|(_, hits)| hits.len()).sum()
    }
}

/// Search every collection of `dataset` for `query`.
///
/// The query is trimmed first; a query shorter than the configured minimum
/// after trimming finds nothing.
pub fn global_search(query: &str, dataset: &Dataset, config: &SearchConfig) -> SearchResults {
    let query = query.trim();
    if query.chars().count() < config.global_min_query_len {
        return SearchResults::default();
    }
    let needle = query.to_lowercase();
    let limit = config.global_limit_per_kind;

    let projects = collect_hits(
        &dataset.projects,
        limit,
        |p| project_matches(p, &needle),
        project_hit,
    );
    let artefacts = collect_hits(
        &dataset.artefacts,
        limit,
        |a| artefact_matches(a, &needle),
        |a| artefact_hit(a, dataset.user_name(&a.created_by)),
    );
    let cases = collect_hits(&dataset.cases, limit, |c| case_matches(c, &needle), case_hit);
    let bookmarks = collect_hits(
        &dataset.bookmarks,
        limit,
        |b| bookmark_matches(b, &needle),
        bookmark_hit,
    );

    tracing::debug!(
        query,
        projects = projects.len(),
        artefacts = artefacts.len(),
        cases = cases.len(),
        bookmarks = bookmarks.len(),
        "Global search"
    );
    SearchResults {
        projects,
        artefacts,
        cases,
        bookmarks,
    }
}

fn collect_hits<T>(
    records: &[T],
    limit: usize,
    matches: impl Fn(&T) -> bool,
    to_hit: impl Fn(&T) -> SearchHit,
) -> Vec<SearchHit> {
    records
        .iter()
        .filter(|record| matches(*record))
        .take(limit)
        .map(to_hit)
        .collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn project_matches(project: &Project, needle: &str) -> bool {
    contains(&project.name, needle)
        || project.description.as_deref().is_some_and(|d| contains(d, needle))
        || project.case_number.as_deref().is_some_and(|n| contains(n, needle))
}

fn artefact_matches(artefact: &Artefact, needle: &str) -> bool {
    contains(&artefact.title, needle) || contains(&artefact.content, needle)
}

fn case_matches(case: &LegalCase, needle: &str) -> bool {
    contains(&case.title, needle)
        || contains(&case.summary, needle)
        || contains(&case.case_number, needle)
        || case.keywords.iter().any(|keyword| contains(keyword, needle))
}

fn bookmark_matches(bookmark: &Bookmark, needle: &str) -> bool {
    contains(&bookmark.title, needle)
        || bookmark.description.as_deref().is_some_and(|d| contains(d, needle))
        || contains(&bookmark.url, needle)
}

fn project_hit(project: &Project) -> SearchHit {
    SearchHit {
        id: project.id.clone(),
        kind: HitKind::Project,
        title: project.name.clone(),
        description: project.description.clone(),
        url: format!("/projekt/{}", project.id),
        project_id: None,
    }
}

fn artefact_hit(artefact: &Artefact, author: Option<&str>) -> SearchHit {
    let description = match author {
        Some(name) => format!("{} • {}", artefact.kind.label(), name),
        None => artefact.kind.label().to_string(),
    };
    SearchHit {
        id: artefact.id.clone(),
        kind: HitKind::Artefact,
        title: artefact.title.clone(),
        description: Some(description),
        url: format!("/projekt/{}/artefakter/{}", artefact.project_id, artefact.id),
        project_id: Some(artefact.project_id.clone()),
    }
}

fn case_hit(case: &LegalCase) -> SearchHit {
    SearchHit {
        id: case.id.clone(),
        kind: HitKind::Case,
        title: format!("{}: {}", case.case_number, case.title),
        description: Some(case.summary.clone()),
        url: format!("/rättspraxis?case={}", case.id),
        project_id: None,
    }
}

fn bookmark_hit(bookmark: &Bookmark) -> SearchHit {
    SearchHit {
        id: bookmark.id.clone(),
        kind: HitKind::Bookmark,
        title: bookmark.title.clone(),
        description: Some(
            bookmark
                .description
                .clone()
                .unwrap_or_else(|| bookmark.url.clone()),
        ),
        url: format!("/bokmärken?bookmark={}", bookmark.id),
        project_id: None,
    }
}
