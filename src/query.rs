//! End-to-end evaluation: search, filter, sort, paginate.

use serde::Serialize;
use std::num::NonZeroUsize;

use crate::filter::{matches_all, Filter, SearchQuery};
use crate::paginate::{page_range, PageWindow};
use crate::record::Record;
use crate::sort::{sort_records, RankTable, SortSpec};

/// Everything needed to evaluate one list view.
#[derive(Debug, Clone)]
pub struct RecordQuery<R: Record> {
    pub search: SearchQuery,
    pub filters: Vec<Filter<R::Facet>>,
    pub sort: SortSpec<R::SortField>,
    pub window: PageWindow,
    pub ranks: RankTable,
}

impl<R: Record> RecordQuery<R> {
    /// Match-all query in the record's default order.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: SearchQuery::default(),
            filters: Vec::new(),
            sort: R::default_sort(),
            window: PageWindow::first(page_size),
            ranks: RankTable::default(),
        }
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = SearchQuery::new(query);
        self
    }

    pub fn with_filter(mut self, filter: Filter<R::Facet>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec<R::SortField>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.window.set_page(page);
        self
    }

    pub fn with_ranks(mut self, ranks: RankTable) -> Self {
        self.ranks = ranks;
        self
    }
}

/// One evaluated page plus the counts a view needs.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult<'a, R> {
    pub items: Vec<&'a R>,
    pub match_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<R> QueryResult<'_, R> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Every record matching the query's search and filters, sorted.
pub fn filter_and_sort<'a, R: Record>(records: &'a [R], query: &RecordQuery<R>) -> Vec<&'a R> {
    let mut matched: Vec<&R> = records
        .iter()
        .filter(|record| query.search.matches(*record))
        .filter(|record| matches_all(*record, &query.filters))
        .collect();
    sort_records(&mut matched, &query.sort, &query.ranks);
    matched
}

/// Run the full pipeline over `records`.
pub fn run_query<'a, R: Record>(records: &'a [R], query: &RecordQuery<R>) -> QueryResult<'a, R> {
    let span = tracing::debug_span!(
        "run_query",
        records = records.len(),
        filters = query.filters.len(),
        page = query.window.current_page()
    );
    let _enter = span.enter();

    let mut matched = filter_and_sort(records, query);
    let match_count = matched.len();
    let range = page_range(match_count, &query.window);
    matched.truncate(range.end);
    let items = matched.split_off(range.start);

    let page_size = query.window.page_size();
    let result = QueryResult {
        items,
        match_count,
        total_pages: query.window.total_pages(match_count),
        page: query.window.current_page(),
        page_size,
    };
    tracing::debug!(
        matched = result.match_count,
        returned = result.items.len(),
        total_pages = result.total_pages,
        "Query evaluated"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::domain::{LegalCase, LegalFacet, LegalSortField};
    use crate::filter::{FilterId, FilterOperator};
    use crate::sort::SortDirection;

    fn cases() -> Vec<LegalCase> {
        Dataset::sample().unwrap().cases
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_match_all_returns_first_page() {
        let cases = cases();
        let result = run_query(&cases, &RecordQuery::new(size(4)));
        assert_eq!(result.match_count, cases.len());
        assert_eq!(result.items.len(), 4);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, cases.len().div_ceil(4));
    }

    #[test]
    fn test_search_then_filter() {
        let cases = cases();
        let query = RecordQuery::<LegalCase>::new(size(20))
            .with_search("domstolen")
            .with_filter(Filter::with(
                FilterId(1),
                LegalFacet::Court,
                FilterOperator::Is,
                &["Högsta domstolen"],
            ));
        let result = run_query(&cases, &query);
        assert!(result.match_count > 0);
        assert!(result.items.iter().all(|c| c.court == "Högsta domstolen"));
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let cases = cases();
        let result = run_query(&cases, &RecordQuery::new(size(20)));
        let dates: Vec<_> = result.items.iter().map(|c| c.date).collect();
        let mut expected = dates.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_no_match_has_one_empty_page() {
        let cases = cases();
        let query = RecordQuery::<LegalCase>::new(size(9)).with_search("finnsinte");
        let result = run_query(&cases, &query);
        assert_eq!(result.match_count, 0);
        assert_eq!(result.total_pages, 1);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_page_past_end() {
        let cases = cases();
        let query = RecordQuery::<LegalCase>::new(size(20))
            .with_sort(SortSpec::new(LegalSortField::Title, SortDirection::Ascending))
            .with_page(5);
        let result = run_query(&cases, &query);
        assert!(result.items.is_empty());
        assert_eq!(result.match_count, cases.len());
        assert!(!result.has_next());
    }
}
