//! Case-work projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{FacetDef, FacetKind, FieldValue, Record, SortFieldDef};
use crate::sort::{SortDirection, SortSpec, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Archived,
    Pending,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Pending => "pending",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Aktiv",
            ProjectStatus::Archived => "Arkiverad",
            ProjectStatus::Pending => "Väntande",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority label; ordered through the configured rank table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectPriority {
    #[serde(rename = "brådskande")]
    Urgent,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "ej_prioritet")]
    Low,
}

impl ProjectPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPriority::Urgent => "brådskande",
            ProjectPriority::Normal => "normal",
            ProjectPriority::Low => "ej_prioritet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectPriority::Urgent => "Brådskande",
            ProjectPriority::Normal => "Normal",
            ProjectPriority::Low => "Ej prioriterad",
        }
    }
}

impl fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPermission {
    Owner,
    Editor,
    Commenter,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub user_id: String,
    pub permission: ProjectPermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub owner_id: String,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
    /// Ids of the documents attached to the project
    #[serde(default)]
    pub artefacts: Vec<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Project {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFacet {
    Status,
    Priority,
    Members,
    CreatedYear,
    CaseNumber,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectSortField {
    Name,
    Status,
    Priority,
    CreatedAt,
    CaseNumber,
    MemberCount,
}

fn status(project: &Project) -> FieldValue<'_> {
    FieldValue::Text(project.status.as_str())
}

fn priority(project: &Project) -> FieldValue<'_> {
    FieldValue::Text(project.priority.as_str())
}

fn members(project: &Project) -> FieldValue<'_> {
    FieldValue::Number(project.member_count() as i64)
}

fn created(project: &Project) -> FieldValue<'_> {
    FieldValue::Date(project.created_at)
}

fn case_number(project: &Project) -> FieldValue<'_> {
    match &project.case_number {
        Some(number) => FieldValue::Text(number),
        None => FieldValue::Missing,
    }
}

static PROJECT_FACETS: [FacetDef<Project>; 6] = [
    FacetDef {
        facet: ProjectFacet::Status,
        key: "status",
        label: "Status",
        kind: FacetKind::Categorical,
        accessor: status,
        hierarchy: None,
    },
    FacetDef {
        facet: ProjectFacet::Priority,
        key: "priority",
        label: "Prioritet",
        kind: FacetKind::Categorical,
        accessor: priority,
        hierarchy: None,
    },
    FacetDef {
        facet: ProjectFacet::Members,
        key: "members",
        label: "Antal medlemmar",
        kind: FacetKind::Numeric,
        accessor: members,
        hierarchy: None,
    },
    FacetDef {
        facet: ProjectFacet::CreatedYear,
        key: "created-year",
        label: "Skapad år",
        kind: FacetKind::Year,
        accessor: created,
        hierarchy: None,
    },
    FacetDef {
        facet: ProjectFacet::CaseNumber,
        key: "case-number",
        label: "Ärendenummer",
        kind: FacetKind::Categorical,
        accessor: case_number,
        hierarchy: None,
    },
    FacetDef {
        facet: ProjectFacet::Created,
        key: "created",
        label: "Skapad",
        kind: FacetKind::Date,
        accessor: created,
        hierarchy: None,
    },
];

fn sort_by_name(project: &Project) -> SortValue<'_> {
    SortValue::Text(&project.name)
}

fn sort_by_status(project: &Project) -> SortValue<'_> {
    SortValue::Text(project.status.label())
}

fn sort_by_priority(project: &Project) -> SortValue<'_> {
    SortValue::Rank(project.priority.as_str())
}

fn sort_by_created_at(project: &Project) -> SortValue<'_> {
    SortValue::Date(project.created_at)
}

fn sort_by_case_number(project: &Project) -> SortValue<'_> {
    match &project.case_number {
        Some(number) => SortValue::Text(number),
        None => SortValue::Missing,
    }
}

fn sort_by_member_count(project: &Project) -> SortValue<'_> {
    SortValue::Number(project.member_count() as i64)
}

static PROJECT_SORT_FIELDS: [SortFieldDef<Project>; 6] = [
    SortFieldDef {
        field: ProjectSortField::Name,
        key: "name",
        label: "Namn",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_name,
    },
    SortFieldDef {
        field: ProjectSortField::Status,
        key: "status",
        label: "Status",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_status,
    },
    SortFieldDef {
        field: ProjectSortField::Priority,
        key: "priority",
        label: "Prioritet",
        default_direction: SortDirection::Descending,
        accessor: sort_by_priority,
    },
    SortFieldDef {
        field: ProjectSortField::CreatedAt,
        key: "created-at",
        label: "Skapad",
        default_direction: SortDirection::Descending,
        accessor: sort_by_created_at,
    },
    SortFieldDef {
        field: ProjectSortField::CaseNumber,
        key: "case-number",
        label: "Ärendenummer",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_case_number,
    },
    SortFieldDef {
        field: ProjectSortField::MemberCount,
        key: "member-count",
        label: "Medlemmar",
        default_direction: SortDirection::Descending,
        accessor: sort_by_member_count,
    },
];

impl Record for Project {
    type Facet = ProjectFacet;
    type SortField = ProjectSortField;

    fn id(&self) -> &str {
        &self.id
    }

    fn facets() -> &'static [FacetDef<Self>] {
        &PROJECT_FACETS
    }

    fn sort_fields() -> &'static [SortFieldDef<Self>] {
        &PROJECT_SORT_FIELDS
    }

    fn default_sort() -> SortSpec<ProjectSortField> {
        SortSpec::new(ProjectSortField::CreatedAt, SortDirection::Descending)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.case_number.as_deref());
        fields
    }
}
