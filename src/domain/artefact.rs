//! Documents attached to projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtefactType {
    LegalBrief,
    StatuteProposal,
    CaseReference,
    GenericFile,
    Timeline,
    EntityMap,
    LawChainExplorer,
}

impl ArtefactType {
    pub fn label(&self) -> &'static str {
        match self {
            ArtefactType::LegalBrief => "Rättsutredning",
            ArtefactType::StatuteProposal => "Författningsförslag",
            ArtefactType::CaseReference => "Rättsfall",
            ArtefactType::GenericFile => "Fil",
            ArtefactType::Timeline => "Tidslinje",
            ArtefactType::EntityMap => "Relationskarta",
            ArtefactType::LawChainExplorer => "Lagkedje-utforskare",
        }
    }
}

impl fmt::Display for ArtefactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artefact {
    pub id: String,
    pub project_id: String,
    #[serde(rename = "type")]
    pub kind: ArtefactType,
    pub title: String,
    /// Markdown for documents, a path or url for files.
    #[serde(default)]
    pub content: String,
    pub created_by: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// A saved external link, optionally moved into a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}
