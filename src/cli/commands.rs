//! Command handlers.
//!
//! Each handler returns the rendered output so it can be tested without
//! capturing stdout.

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::{Cli, Collection, Commands, ListArgs, OutputFormat};
use super::filter_spec::{apply_filter_spec, parse_filter_spec, parse_sort_spec};
use super::render::{render_options, render_page, render_search, Tabular};
use crate::config::{self, AsterismConfig};
use crate::dataset::Dataset;
use crate::errors::Error;
use crate::formatting::{ColorMode, ColoredFormatter, OutputFormatter, PlainFormatter};
use crate::global_search::global_search;
use crate::record::{facet_by_key, Record};
use crate::repository::Repository;
use crate::view::ListView;

/// Run a parsed command line and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    let dataset = resolve_dataset(cli)?;
    let formatter: Box<dyn OutputFormatter> = if cli.plain {
        Box::new(PlainFormatter)
    } else {
        let mode = cli.color.unwrap_or_else(ColorMode::from_env);
        Box::new(ColoredFormatter::new(mode))
    };

    match &cli.command {
        Commands::Cases(args) => handle_list(&dataset.cases, args, &config, formatter.as_ref()),
        Commands::Projects(args) => {
            handle_list(&dataset.projects, args, &config, formatter.as_ref())
        }
        Commands::Options {
            collection,
            facet,
            format,
        } => {
            let (cases, projects) = dataset.into_repositories()?;
            match collection {
                Collection::Cases => {
                    handle_options(&cases, facet, *format, &config, formatter.as_ref())
                }
                Collection::Projects => {
                    handle_options(&projects, facet, *format, &config, formatter.as_ref())
                }
            }
        }
        Commands::Search { query, format } => {
            let results = global_search(query, &dataset, &config.search);
            Ok(render_search(&results, *format, formatter.as_ref())?)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<AsterismConfig> {
    match &cli.config {
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_config()),
    }
}

fn resolve_dataset(cli: &Cli) -> Result<Dataset> {
    match &cli.data {
        Some(path) => Ok(Dataset::load(path)?),
        None => Ok(Dataset::sample()?),
    }
}

/// Build a view from the arguments and render one page of `records`.
pub fn handle_list<R>(
    records: &[R],
    args: &ListArgs,
    config: &AsterismConfig,
    fmt: &dyn OutputFormatter,
) -> Result<String>
where
    R: Record + Tabular + Serialize,
{
    let mut view: ListView<R> = ListView::new(config);
    view.set_view_mode(args.view);
    view.set_query(args.query_text());

    for raw in &args.filters {
        let spec = parse_filter_spec(raw)?;
        apply_filter_spec(&mut view, &spec)
            .with_context(|| format!("Could not apply filter '{}'", raw))?;
    }
    if let Some(sort) = &args.sort {
        view.set_sort(parse_sort_spec::<R>(sort)?);
    }
    view.set_page(args.page);

    let result = view.evaluate(records);
    Ok(render_page(&result, view.view_mode(), args.format, fmt)?)
}

/// Render the option list of the facet named `facet`.
pub fn handle_options<Repo>(
    repo: &Repo,
    facet: &str,
    format: OutputFormat,
    config: &AsterismConfig,
    fmt: &dyn OutputFormatter,
) -> Result<String>
where
    Repo: Repository,
{
    let def = facet_by_key::<Repo::Record>(facet)
        .ok_or_else(|| Error::UnknownFacet(facet.to_string()))?;
    let mut view: ListView<Repo::Record> = ListView::new(config);
    let options = view.facet_options(repo, def.facet)?;
    Ok(render_options(options, format, fmt)?)
}
