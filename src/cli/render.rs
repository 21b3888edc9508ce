//! Text and JSON output for the command-line front end.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use super::args::OutputFormat;
use crate::domain::{LegalCase, Project};
use crate::errors::Result;
use crate::formatting::OutputFormatter;
use crate::global_search::{SearchHit, SearchResults};
use crate::options::FacetOptions;
use crate::query::QueryResult;
use crate::view::ViewMode;

/// How a record shows up as a table row and as a card.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
    fn card(&self, fmt: &dyn OutputFormatter) -> String;
}

impl Tabular for LegalCase {
    fn headers() -> &'static [&'static str] {
        &["Målnummer", "Titel", "Domstol", "Datum", "Rättsområde"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.case_number.clone(),
            self.title.clone(),
            self.court.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.legal_area.clone(),
        ]
    }

    fn card(&self, fmt: &dyn OutputFormatter) -> String {
        let mut out = format!(
            "{}  {}\n{}\n{}\n",
            fmt.bold(&self.case_number),
            fmt.header(&self.title),
            fmt.dim(&format!(
                "{} · {} · {}",
                self.court,
                self.date.format("%Y-%m-%d"),
                self.legal_area
            )),
            self.summary
        );
        if !self.keywords.is_empty() {
            out.push_str(&fmt.info(&self.keywords.join(", ")));
            out.push('\n');
        }
        out
    }
}

impl Tabular for Project {
    fn headers() -> &'static [&'static str] {
        &["Namn", "Ärendenummer", "Status", "Prioritet", "Medlemmar", "Skapad"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.case_number.clone().unwrap_or_else(|| "-".to_string()),
            self.status.label().to_string(),
            self.priority.label().to_string(),
            self.member_count().to_string(),
            self.created_at.format("%Y-%m-%d").to_string(),
        ]
    }

    fn card(&self, fmt: &dyn OutputFormatter) -> String {
        let mut out = format!("{}\n", fmt.header(&self.name));
        if let Some(description) = &self.description {
            out.push_str(description);
            out.push('\n');
        }
        out.push_str(&fmt.dim(&format!(
            "{} · {} · {} medlemmar · skapad {}",
            self.case_number.as_deref().unwrap_or("inget ärendenummer"),
            self.status.label(),
            self.member_count(),
            self.created_at.format("%Y-%m-%d")
        )));
        out.push('\n');
        let priority = self.priority.label();
        out.push_str(&match self.priority {
            crate::domain::ProjectPriority::Urgent => fmt.warning(priority),
            _ => priority.to_string(),
        });
        out.push('\n');
        out
    }
}

/// Render one evaluated page.
pub fn render_page<R: Tabular + Serialize>(
    result: &QueryResult<'_, R>,
    mode: ViewMode,
    format: OutputFormat,
    fmt: &dyn OutputFormatter,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let mut out = String::new();
    match mode {
        ViewMode::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(R::headers().to_vec());
            for item in &result.items {
                table.add_row(item.row());
            }
            out.push_str(&table.to_string());
            out.push('\n');
        }
        ViewMode::Cards => {
            for item in &result.items {
                out.push_str(&item.card(fmt));
                out.push('\n');
            }
        }
    }
    out.push_str(&fmt.dim(&page_footer(result)));
    out.push('\n');
    Ok(out)
}

fn page_footer<R>(result: &QueryResult<'_, R>) -> String {
    format!(
        "Sida {} av {} ({} träffar)",
        result.page, result.total_pages, result.match_count
    )
}

/// Render a facet's option list.
pub fn render_options(
    options: &FacetOptions,
    format: OutputFormat,
    fmt: &dyn OutputFormatter,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(options)?);
    }

    let mut out = String::new();
    for group in &options.groups {
        let indent = match &group.label {
            Some(label) => {
                out.push_str(&fmt.header(label));
                out.push('\n');
                "  "
            }
            None => "",
        };
        for option in &group.options {
            out.push_str(&format!(
                "{}{} {}\n",
                indent,
                option.value,
                fmt.dim(&format!("({})", option.count))
            ));
        }
    }
    Ok(out)
}

/// Render quick-search hits grouped by kind.
pub fn render_search(
    results: &SearchResults,
    format: OutputFormat,
    fmt: &dyn OutputFormatter,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(results)?);
    }
    if results.is_empty() {
        return Ok(format!("{}\n", fmt.dim("Inga träffar")));
    }

    let mut out = String::new();
    for (heading, hits) in results.groups() {
        if hits.is_empty() {
            continue;
        }
        out.push_str(&fmt.header(heading));
        out.push('\n');
        for hit in hits {
            out.push_str(&render_hit(hit, fmt));
        }
    }
    Ok(out)
}

fn render_hit(hit: &SearchHit, fmt: &dyn OutputFormatter) -> String {
    format!("  {}  {}\n", fmt.bold(&hit.title), fmt.dim(&hit.url))
}
