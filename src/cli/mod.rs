//! CLI module for asterism
//!
//! - Argument parsing (`args`)
//! - Filter and sort argument parsing (`filter_spec`)
//! - Text, table and JSON output (`render`)
//! - Command handlers (`commands`)

pub mod args;
pub mod commands;
pub mod filter_spec;
pub mod render;

pub use args::{Cli, Collection, Commands, ListArgs, OutputFormat};
pub use commands::run;
pub use filter_spec::{apply_filter_spec, parse_filter_spec, parse_sort_spec, FilterSpec};
pub use render::Tabular;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}

/// Exit status for a failed run, taken from the first engine error in the chain.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<crate::errors::Error>())
        .map_or(1, crate::errors::Error::exit_code)
}
