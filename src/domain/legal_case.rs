//! Published court decisions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::courts::swedish_courts;
use crate::record::{FacetDef, FacetKind, FieldValue, Record, SortFieldDef};
use crate::sort::{SortDirection, SortSpec, SortValue};

/// A court decision as listed in the case-law browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCase {
    pub id: String,
    pub case_number: String,
    pub title: String,
    pub court: String,
    pub date: NaiveDate,
    pub legal_area: String,
    pub summary: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub decision: Vec<String>,
    #[serde(default)]
    pub ruling: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Filterable facets of a legal case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalFacet {
    Court,
    LegalArea,
    Year,
    CaseNumber,
    Keywords,
    Decided,
}

/// Sortable columns of the case list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalSortField {
    Date,
    Title,
    Court,
    CaseNumber,
    LegalArea,
}

fn court(case: &LegalCase) -> FieldValue<'_> {
    FieldValue::Text(&case.court)
}

fn legal_area(case: &LegalCase) -> FieldValue<'_> {
    FieldValue::Text(&case.legal_area)
}

fn decided(case: &LegalCase) -> FieldValue<'_> {
    FieldValue::Date(case.date)
}

fn case_number(case: &LegalCase) -> FieldValue<'_> {
    FieldValue::Text(&case.case_number)
}

fn keywords(case: &LegalCase) -> FieldValue<'_> {
    FieldValue::Texts(&case.keywords)
}

static LEGAL_FACETS: [FacetDef<LegalCase>; 6] = [
    FacetDef {
        facet: LegalFacet::Court,
        key: "court",
        label: "Domstol",
        kind: FacetKind::Hierarchical,
        accessor: court,
        hierarchy: Some(swedish_courts),
    },
    FacetDef {
        facet: LegalFacet::LegalArea,
        key: "legal-area",
        label: "Rättsområde",
        kind: FacetKind::Categorical,
        accessor: legal_area,
        hierarchy: None,
    },
    FacetDef {
        facet: LegalFacet::Year,
        key: "year",
        label: "År",
        kind: FacetKind::Year,
        accessor: decided,
        hierarchy: None,
    },
    FacetDef {
        facet: LegalFacet::CaseNumber,
        key: "case-number",
        label: "Målnummer",
        kind: FacetKind::Categorical,
        accessor: case_number,
        hierarchy: None,
    },
    FacetDef {
        facet: LegalFacet::Keywords,
        key: "keywords",
        label: "Nyckelord",
        kind: FacetKind::Keyword,
        accessor: keywords,
        hierarchy: None,
    },
    FacetDef {
        facet: LegalFacet::Decided,
        key: "decided",
        label: "Avgörandedatum",
        kind: FacetKind::Date,
        accessor: decided,
        hierarchy: None,
    },
];

fn sort_by_date(case: &LegalCase) -> SortValue<'_> {
    SortValue::Date(case.date)
}

fn sort_by_title(case: &LegalCase) -> SortValue<'_> {
    SortValue::Text(&case.title)
}

fn sort_by_court(case: &LegalCase) -> SortValue<'_> {
    SortValue::Text(&case.court)
}

fn sort_by_case_number(case: &LegalCase) -> SortValue<'_> {
    SortValue::Text(&case.case_number)
}

fn sort_by_legal_area(case: &LegalCase) -> SortValue<'_> {
    SortValue::Text(&case.legal_area)
}

static LEGAL_SORT_FIELDS: [SortFieldDef<LegalCase>; 5] = [
    SortFieldDef {
        field: LegalSortField::Date,
        key: "date",
        label: "Datum",
        default_direction: SortDirection::Descending,
        accessor: sort_by_date,
    },
    SortFieldDef {
        field: LegalSortField::Title,
        key: "title",
        label: "Titel",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_title,
    },
    SortFieldDef {
        field: LegalSortField::Court,
        key: "court",
        label: "Domstol",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_court,
    },
    SortFieldDef {
        field: LegalSortField::CaseNumber,
        key: "case-number",
        label: "Målnummer",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_case_number,
    },
    SortFieldDef {
        field: LegalSortField::LegalArea,
        key: "legal-area",
        label: "Rättsområde",
        default_direction: SortDirection::Ascending,
        accessor: sort_by_legal_area,
    },
];

impl Record for LegalCase {
    type Facet = LegalFacet;
    type SortField = LegalSortField;

    fn id(&self) -> &str {
        &self.id
    }

    fn facets() -> &'static [FacetDef<Self>] {
        &LEGAL_FACETS
    }

    fn sort_fields() -> &'static [SortFieldDef<Self>] {
        &LEGAL_SORT_FIELDS
    }

    fn default_sort() -> SortSpec<LegalSortField> {
        SortSpec::new(LegalSortField::Date, SortDirection::Descending)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.summary.as_str(),
            self.background.as_str(),
            self.case_number.as_str(),
        ];
        fields.extend(self.decision.iter().map(String::as_str));
        fields.extend(self.ruling.iter().map(String::as_str));
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}
