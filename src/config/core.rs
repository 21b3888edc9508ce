use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::errors::{Error, Result};
use crate::sort::RankTable;

/// Root configuration structure for asterism
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsterismConfig {
    /// Page sizes per view mode
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Rank per priority label, used when sorting by priority
    #[serde(default)]
    pub priority_ranks: RankTable,

    /// Global quick-search settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl AsterismConfig {
    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()?;
        self.search.validate()
    }
}

/// Page sizes for the two list presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Card grid page size (default: 9)
    #[serde(default = "default_cards_page_size")]
    pub cards: usize,

    /// Dense table page size (default: 20)
    #[serde(default = "default_table_page_size")]
    pub table: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            cards: default_cards_page_size(),
            table: default_table_page_size(),
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cards == 0 {
            return Err(Error::configuration("pagination.cards must be greater than 0"));
        }
        if self.table == 0 {
            return Err(Error::configuration("pagination.table must be greater than 0"));
        }
        Ok(())
    }

    pub fn cards_page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cards).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn table_page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.table).unwrap_or(NonZeroUsize::MIN)
    }
}

fn default_cards_page_size() -> usize {
    9
}

fn default_table_page_size() -> usize {
    20
}

/// Global quick-search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Shorter queries return no hits (default: 2)
    #[serde(default = "default_global_min_query_len")]
    pub global_min_query_len: usize,

    /// Maximum hits per record kind (default: 5)
    #[serde(default = "default_global_limit_per_kind")]
    pub global_limit_per_kind: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            global_min_query_len: default_global_min_query_len(),
            global_limit_per_kind: default_global_limit_per_kind(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.global_limit_per_kind == 0 {
            return Err(Error::configuration(
                "search.global_limit_per_kind must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn default_global_min_query_len() -> usize {
    2
}

fn default_global_limit_per_kind() -> usize {
    5
}
