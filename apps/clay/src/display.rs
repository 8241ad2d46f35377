//! Output rendering for CLI results

use clay_config::{render, OutputFormat};
use clay_errors::{ModelError, UserFacingError};
use clay_types::{DistributionManagement, InputLocation, InputLocationTracker, Locations};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};

use crate::error::CliError;

/// One tracked location, flattened to a dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    pub field: String,
    pub line: u32,
    pub column: u32,
    pub source: String,
}

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json: bool,
}

impl OutputRenderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print the record; `--json` wins over the configured format
    pub fn render_record(
        &self,
        management: &DistributionManagement,
        format: OutputFormat,
    ) -> Result<(), CliError> {
        let format = if self.json { OutputFormat::Json } else { format };
        let text = render(management, format)?;
        println!("{}", text.trim_end());
        Ok(())
    }

    /// Print validation problems, one per line with hints
    pub fn render_problems(&self, problems: &[ModelError]) -> Result<(), CliError> {
        if self.json {
            let entries: Vec<_> = problems
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "code": p.user_code(),
                        "message": p.user_message(),
                        "hint": p.user_hint(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).map_err(clay_errors::Error::from)?
            );
            return Ok(());
        }

        if problems.is_empty() {
            println!("No problems found");
            return Ok(());
        }
        for problem in problems {
            println!("error: {}", problem.user_message());
            if let Some(hint) = problem.user_hint() {
                println!("  hint: {hint}");
            }
        }
        Ok(())
    }

    /// Print every tracked location of the record
    pub fn render_locations(&self, management: &DistributionManagement) -> Result<(), CliError> {
        let rows = location_rows(management);

        if self.json {
            let entries: Vec<_> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "field": row.field,
                        "line": row.line,
                        "column": row.column,
                        "source": row.source,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).map_err(clay_errors::Error::from)?
            );
            return Ok(());
        }

        if rows.is_empty() {
            println!("No locations recorded");
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Line").add_attribute(Attribute::Bold),
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for row in rows {
            table.add_row(vec![
                Cell::new(row.field),
                Cell::new(row.line),
                Cell::new(row.column),
                Cell::new(row.source),
            ]);
        }

        println!("{table}");
        Ok(())
    }
}

/// Flatten the locations of a record and its nested records, in file order
pub fn location_rows(management: &DistributionManagement) -> Vec<LocationRow> {
    let mut rows = Vec::new();
    push_rows(&mut rows, "", management.locations());
    if let Some(relocation) = &management.relocation {
        push_rows(&mut rows, "relocation.", relocation.locations());
    }
    if let Some(site) = &management.site {
        push_rows(&mut rows, "site.", site.locations());
    }
    if let Some(repository) = &management.repository {
        push_rows(&mut rows, "repository.", repository.locations());
    }
    if let Some(repository) = &management.snapshot_repository {
        push_rows(&mut rows, "snapshotRepository.", repository.locations());
    }

    rows.sort_by(|a, b| (a.line, a.column, &a.field).cmp(&(b.line, b.column, &b.field)));
    rows
}

fn push_rows(rows: &mut Vec<LocationRow>, prefix: &str, locations: &Locations) {
    for (key, location) in locations {
        rows.push(row(format!("{prefix}{key}"), location));
    }
}

fn row(field: String, location: &InputLocation) -> LocationRow {
    LocationRow {
        field,
        line: location.line_number,
        column: location.column_number,
        source: location
            .source
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string),
    }
}
