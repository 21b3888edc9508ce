//! The two record types served by the engine, plus the documents, links
//! and users reached through quick search.

pub mod artefact;
pub mod courts;
pub mod legal_case;
pub mod project;

pub use artefact::{Artefact, ArtefactType, Bookmark, User};
pub use courts::swedish_courts;
pub use legal_case::{LegalCase, LegalFacet, LegalSortField};
pub use project::{
    Project, ProjectFacet, ProjectMember, ProjectPermission, ProjectPriority, ProjectSortField,
    ProjectStatus,
};
