//! `fbd fees` command - fare-class fee table

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::output::effective_format;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::BookingClass;

#[derive(clap::Args, Debug, Default)]
pub struct FeesArgs {}

const FEE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("class", "CLASS", 15),
    ColumnDef::new("change-fee", "CHANGE FEE", 10),
    ColumnDef::new("cancellation-fee", "CANCEL FEE", 10),
];

/// One fee table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRow {
    pub booking_class: &'static str,
    pub change_fee: u32,
    pub cancellation_fee: u32,
}

/// Fee table rows, cheapest class first
pub fn fee_rows() -> Vec<FeeRow> {
    BookingClass::all()
        .iter()
        .map(|class| FeeRow {
            booking_class: class.name(),
            change_fee: class.change_fee(),
            cancellation_fee: class.cancellation_fee(),
        })
        .collect()
}

pub fn run(_args: FeesArgs, global: &GlobalOpts) -> Result<()> {
    let rows = fee_rows();

    match effective_format(global.output, true) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&rows).into_diagnostic()?;
            print!("{}", yaml);
        }
        format => {
            let rows: Vec<TableRow> = rows
                .iter()
                .map(|r| {
                    TableRow::new(r.booking_class)
                        .cell("class", CellValue::Text(r.booking_class.to_string()))
                        .cell("change-fee", CellValue::Money(r.change_fee))
                        .cell("cancellation-fee", CellValue::Money(r.cancellation_fee))
                })
                .collect();
            TableFormatter::new(FEE_COLUMNS, "fare class").output(rows, format, &[])?;
        }
    }

    Ok(())
}
