//! Presentation mode of a list view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::config::PaginationConfig;

/// How a list is presented; each mode has its own page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid with summaries.
    #[default]
    Cards,
    /// Dense table, one row per record.
    Table,
}

impl ViewMode {
    pub fn page_size(self, pagination: &PaginationConfig) -> NonZeroUsize {
        match self {
            ViewMode::Cards => pagination.cards_page_size(),
            ViewMode::Table => pagination.table_page_size(),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Cards => f.write_str("cards"),
            ViewMode::Table => f.write_str("table"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" | "kort" => Ok(ViewMode::Cards),
            "table" | "tabell" => Ok(ViewMode::Table),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}
