//! Faceted filtering, sorting and pagination for Swedish legal case and
//! project lists.
//!
//! Records describe themselves through static facet and sort tables
//! ([`record::Record`]); one engine serves every record type:
//! search -> filters -> stable sort -> page slice.

// Export modules for library usage
pub mod cli;
pub mod collation;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod formatting;
pub mod global_search;
pub mod hierarchy;
pub mod observability;
pub mod options;
pub mod paginate;
pub mod query;
pub mod record;
pub mod repository;
pub mod sort;
pub mod view;

// Re-export commonly used types
pub use crate::config::AsterismConfig;
pub use crate::dataset::Dataset;
pub use crate::domain::{
    LegalCase, LegalFacet, LegalSortField, Project, ProjectFacet, ProjectPriority,
    ProjectSortField, ProjectStatus,
};
pub use crate::errors::{Error, Result};
pub use crate::filter::{Filter, FilterId, FilterOperator, SearchQuery};
pub use crate::options::{derive_options, FacetOptions, OptionCache};
pub use crate::paginate::{paginate, Page, PageWindow};
pub use crate::query::{run_query, QueryResult, RecordQuery};
pub use crate::record::{FacetKind, Record};
pub use crate::repository::{InMemoryRepository, Repository};
pub use crate::sort::{RankTable, SortDirection, SortSpec};
pub use crate::view::{ListView, ViewMode};
