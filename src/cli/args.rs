use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::view::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "asterism")]
#[command(about = "Filter, sort and page Swedish legal cases and projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: nearest .asterism.toml)
    #[arg(long, global = true, env = "ASTERISM_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON dataset with "cases" and "projects" (default: built-in sample)
    #[arg(long, global = true, env = "ASTERISM_DATA")]
    pub data: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    /// When to color text output: auto, always or never (default: from NO_COLOR/CLICOLOR)
    #[arg(long, global = true, value_name = "WHEN", value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List legal cases
    Cases(ListArgs),

    /// List projects
    Projects(ListArgs),

    /// Show the selectable values of a facet
    Options {
        /// Collection the facet belongs to
        #[arg(value_enum)]
        collection: Collection,

        /// Facet key or label (e.g. court, keywords, status)
        facet: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Quick search across projects, artefacts, cases and bookmarks
    Search {
        /// Search text (at least two characters by default)
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Free-text query; every word must occur in the record
    #[arg(num_args = 0..)]
    pub query: Vec<String>,

    /// Filter as FACET:OPERATOR:VALUE[,VALUE...] or FACET:VALUE[,VALUE...]
    #[arg(long = "filter", value_name = "SPEC")]
    pub filters: Vec<String>,

    /// Sort as FIELD or FIELD:asc|desc
    #[arg(short, long, value_name = "FIELD[:DIR]")]
    pub sort: Option<String>,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Presentation; decides the page size
    #[arg(long, default_value = "cards")]
    pub view: ViewMode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ListArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Cases,
    Projects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value)
        .ok_or_else(|| format!("expected auto, always or never, got '{}'", value))
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
