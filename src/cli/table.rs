//! Column-based rendering of list output
//!
//! Commands describe their columns once with [`ColumnDef`], build one
//! [`TableRow`] per record and hand the rows to [`TableFormatter::output`],
//! which renders the tabular output formats.

use std::io;

use chrono::NaiveDate;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::truncate_str;
use crate::cli::OutputFormat;
use crate::core::entity::BookingStatus;

/// A column that list commands can display
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    /// Maximum width in boxed tables
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// Typed cell content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Date(NaiveDate),
    Status(BookingStatus),
    /// Whole currency units
    Money(u32),
}

impl CellValue {
    /// Unstyled text for machine-readable formats
    pub fn plain(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.to_string(),
            CellValue::Status(s) => s.as_str().to_string(),
            CellValue::Money(m) => m.to_string(),
        }
    }

    fn styled(&self) -> String {
        match self {
            CellValue::Status(BookingStatus::Confirmed) => {
                style(self.plain()).green().to_string()
            }
            CellValue::Status(BookingStatus::Cancelled) => style(self.plain()).red().to_string(),
            CellValue::Date(_) => style(self.plain()).yellow().to_string(),
            _ => self.plain(),
        }
    }
}

/// One record of list output, keyed by its identifier
#[derive(Debug, Clone)]
pub struct TableRow {
    key: String,
    cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, column: &'static str, value: CellValue) -> Self {
        self.cells.push((column, value));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == column).map(|(_, v)| v)
    }

    fn plain(&self, column: &str) -> String {
        self.get(column).map(CellValue::plain).unwrap_or_default()
    }
}

/// Renders rows in the tabular output formats
pub struct TableFormatter {
    columns: &'static [ColumnDef],
    noun: &'static str,
}

impl TableFormatter {
    pub fn new(columns: &'static [ColumnDef], noun: &'static str) -> Self {
        Self { columns, noun }
    }

    fn visible_columns(&self, visible: &[&str]) -> Vec<&'static ColumnDef> {
        if visible.is_empty() {
            return self.columns.iter().collect();
        }
        visible
            .iter()
            .filter_map(|key| self.columns.iter().find(|c| c.key == *key))
            .collect()
    }

    /// Print rows in `format`; JSON and YAML are the caller's job
    pub fn output(&self, rows: Vec<TableRow>, format: OutputFormat, visible: &[&str]) -> Result<()> {
        let columns = self.visible_columns(visible);

        match format {
            OutputFormat::Id => {
                for row in &rows {
                    println!("{}", row.key());
                }
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(io::stdout());
                writer
                    .write_record(columns.iter().map(|c| c.key))
                    .into_diagnostic()?;
                for row in &rows {
                    writer
                        .write_record(columns.iter().map(|c| row.plain(c.key)))
                        .into_diagnostic()?;
                }
                writer.flush().into_diagnostic()?;
            }
            OutputFormat::Md => {
                let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
                println!("| {} |", headers.join(" | "));
                println!("|{}", "---|".repeat(columns.len()));
                for row in &rows {
                    let cells: Vec<String> = columns
                        .iter()
                        .map(|c| row.plain(c.key).replace('|', "\\|"))
                        .collect();
                    println!("| {} |", cells.join(" | "));
                }
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(columns.iter().map(|c| c.header.to_string()));
                for row in &rows {
                    builder.push_record(
                        columns
                            .iter()
                            .map(|c| truncate_str(&row.plain(c.key), c.width)),
                    );
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                println!("{}", table);
                println!(
                    "{}",
                    style(format!("{} {}(s)", rows.len(), self.noun)).dim()
                );
            }
            _ => {
                let headers: Vec<String> = columns
                    .iter()
                    .map(|c| style(c.header).bold().to_string())
                    .collect();
                println!("{}", headers.join("\t"));
                for row in &rows {
                    let cells: Vec<String> = columns
                        .iter()
                        .map(|c| row.get(c.key).map(CellValue::styled).unwrap_or_default())
                        .collect();
                    println!("{}", cells.join("\t"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("number", "BOOKING", 8),
        ColumnDef::new("status", "STATUS", 10),
    ];

    #[test]
    fn test_row_cells() {
        let row = TableRow::new("BK101")
            .cell("number", CellValue::Text("BK101".to_string()))
            .cell("status", CellValue::Status(BookingStatus::Cancelled))
            .cell("fee", CellValue::Money(75));

        assert_eq!(row.key(), "BK101");
        assert_eq!(row.plain("status"), "CANCELLED");
        assert_eq!(row.plain("fee"), "75");
        assert_eq!(row.plain("missing"), "");
    }

    #[test]
    fn test_visible_columns_follow_requested_order() {
        let formatter = TableFormatter::new(COLUMNS, "booking");
        let cols = formatter.visible_columns(&["status", "unknown", "number"]);
        let keys: Vec<_> = cols.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["status", "number"]);

        assert_eq!(formatter.visible_columns(&[]).len(), 2);
    }
}
