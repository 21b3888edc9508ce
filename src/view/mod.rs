//! Transient state of one list view.
//!
//! A [`ListView`] owns what the user has typed and clicked: query, filter
//! chips, sort column, view mode and page. Any change to the query, the
//! filters or the view mode sends the view back to page 1. Records are
//! never held here; each evaluation borrows them.

pub mod view_mode;

pub use view_mode::ViewMode;

use crate::config::{AsterismConfig, PaginationConfig};
use crate::errors::{Error, Result};
use crate::filter::{check_values, is_allowed, operators_for, Filter, FilterId, FilterOperator, SearchQuery};
use crate::options::{FacetOptions, OptionCache};
use crate::paginate::PageWindow;
use crate::query::{run_query, QueryResult, RecordQuery};
use crate::record::{facet_def, FacetDef, Record};
use crate::repository::Repository;
use crate::sort::SortSpec;

/// Main list-view state
#[derive(Debug)]
pub struct ListView<R: Record> {
    /// Query handed to the engine on each evaluation
    query: RecordQuery<R>,
    /// Current presentation
    view_mode: ViewMode,
    /// Page sizes per presentation
    pagination: PaginationConfig,
    /// Next filter id to hand out
    next_filter_id: u64,
    /// Facet option lists for the current collection
    options: OptionCache<R::Facet>,
}

impl<R: Record> ListView<R> {
    /// Create a view in card mode with the record's default sort.
    pub fn new(config: &AsterismConfig) -> Self {
        let view_mode = ViewMode::default();
        let query = RecordQuery::new(view_mode.page_size(&config.pagination))
            .with_ranks(config.priority_ranks.clone());
        Self {
            query,
            view_mode,
            pagination: config.pagination,
            next_filter_id: 1,
            options: OptionCache::new(),
        }
    }

    pub fn search(&self) -> &SearchQuery {
        &self.query.search
    }

    /// Replace the free-text query and go back to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query.search = SearchQuery::new(query);
        self.query.window.reset();
    }

    /// Get active filters
    pub fn filters(&self) -> &[Filter<R::Facet>] {
        &self.query.filters
    }

    pub fn filter(&self, id: FilterId) -> Option<&Filter<R::Facet>> {
        self.query.filters.iter().find(|filter| filter.id == id)
    }

    /// Whether any filter currently constrains the result
    pub fn has_active_filters(&self) -> bool {
        self.query.filters.iter().any(|filter| !filter.is_inert())
    }

    /// Add an empty filter chip for `facet`
    pub fn add_filter(&mut self, facet: R::Facet) -> Result<FilterId> {
        let def = lookup::<R>(facet)?;
        let id = FilterId(self.next_filter_id);
        self.next_filter_id += 1;
        self.query.filters.push(Filter::new(id, facet, def.kind));
        self.query.window.reset();
        tracing::debug!(filter = %id, facet = def.key, "Filter added");
        Ok(id)
    }

    pub fn remove_filter(&mut self, id: FilterId) -> Result<()> {
        let position = self
            .query
            .filters
            .iter()
            .position(|filter| filter.id == id)
            .ok_or(Error::UnknownFilter(id))?;
        self.query.filters.remove(position);
        self.query.window.reset();
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.query.window.reset();
    }

    /// Replace a filter's selected values.
    ///
    /// The operator follows the value count across the single/multi
    /// boundary. Threshold facets accept one parseable value.
    pub fn set_filter_values(&mut self, id: FilterId, values: Vec<String>) -> Result<()> {
        let filter = self.filter_mut(id)?;
        let def = lookup::<R>(filter.facet)?;
        check_values(def.key, def.kind, &values)?;
        filter.set_values(def.kind, values);
        self.query.window.reset();
        Ok(())
    }

    /// Pick an operator from the set offered at the filter's value count.
    pub fn set_filter_operator(&mut self, id: FilterId, operator: FilterOperator) -> Result<()> {
        let filter = self.filter_mut(id)?;
        let def = lookup::<R>(filter.facet)?;
        let value_count = filter.values.len();
        if !is_allowed(def.kind, operator, value_count) {
            return Err(Error::InvalidOperator {
                facet: def.key.to_string(),
                operator,
                value_count,
            });
        }
        filter.operator = operator;
        self.query.window.reset();
        Ok(())
    }

    /// Operators the filter's chip should offer right now.
    pub fn available_operators(&self, id: FilterId) -> Result<&'static [FilterOperator]> {
        let filter = self.filter(id).ok_or(Error::UnknownFilter(id))?;
        let def = lookup::<R>(filter.facet)?;
        Ok(operators_for(def.kind, filter.values.len()))
    }

    pub fn sort(&self) -> SortSpec<R::SortField> {
        self.query.sort
    }

    /// Click on a column: flip if active, else switch with its default direction
    pub fn toggle_sort(&mut self, field: R::SortField) {
        self.query.sort = self.query.sort.toggle::<R>(field);
    }

    pub fn set_sort(&mut self, sort: SortSpec<R::SortField>) {
        self.query.sort = sort;
    }

    /// Get current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch presentation; page size follows and the page resets
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.query.window = PageWindow::first(mode.page_size(&self.pagination));
    }

    pub fn page_window(&self) -> PageWindow {
        self.query.window
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.window.set_page(page);
    }

    /// The query the next evaluation will run
    pub fn query(&self) -> &RecordQuery<R> {
        &self.query
    }

    /// Evaluate the view against `records`
    pub fn evaluate<'a>(&self, records: &'a [R]) -> QueryResult<'a, R> {
        run_query(records, &self.query)
    }

    /// Selectable options for `facet`, cached per repository and generation
    pub fn facet_options<Repo>(&mut self, repo: &Repo, facet: R::Facet) -> Result<&FacetOptions>
    where
        Repo: Repository<Record = R> + ?Sized,
    {
        self.options.get_or_derive(repo, facet)
    }

    fn filter_mut(&mut self, id: FilterId) -> Result<&mut Filter<R::Facet>> {
        self.query
            .filters
            .iter_mut()
            .find(|filter| filter.id == id)
            .ok_or(Error::UnknownFilter(id))
    }
}

fn lookup<R: Record>(facet: R::Facet) -> Result<&'static FacetDef<R>> {
    facet_def::<R>(facet).ok_or_else(|| Error::UnknownFacet(format!("{:?}", facet)))
}
