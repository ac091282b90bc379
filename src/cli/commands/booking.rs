//! `fbd booking` command - list, show, change and cancel bookings

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::{ClassFilter, StatusFilter};
use crate::cli::helpers::plural;
use crate::cli::output::{effective_format, print_booking};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{BookingChange, BookingIdentity, BookingService};
use crate::entities::BookingView;

use super::utils::open_service;

#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// List bookings with filtering
    List(ListArgs),

    /// Show a booking's details
    Show(IdentityArgs),

    /// Move a booking to a new date and route
    Change(ChangeArgs),

    /// Cancel a booking
    Cancel(IdentityArgs),
}

/// Columns to display in list output
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListColumn {
    Number,
    FirstName,
    LastName,
    Date,
    From,
    To,
    Class,
    Status,
}

impl ListColumn {
    fn key(&self) -> &'static str {
        match self {
            ListColumn::Number => "number",
            ListColumn::FirstName => "first-name",
            ListColumn::LastName => "last-name",
            ListColumn::Date => "date",
            ListColumn::From => "from",
            ListColumn::To => "to",
            ListColumn::Class => "class",
            ListColumn::Status => "status",
        }
    }
}

impl std::fmt::Display for ListColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Column definitions for booking list output
const BOOKING_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("number", "BOOKING", 10),
    ColumnDef::new("first-name", "FIRST", 16),
    ColumnDef::new("last-name", "LAST", 16),
    ColumnDef::new("date", "DATE", 10),
    ColumnDef::new("from", "FROM", 4),
    ColumnDef::new("to", "TO", 4),
    ColumnDef::new("class", "CLASS", 15),
    ColumnDef::new("status", "STATUS", 9),
];

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Filter by fare class
    #[arg(long, short = 'c', default_value = "all")]
    pub class: ClassFilter,

    /// Columns to display (can specify multiple)
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        ListColumn::Number,
        ListColumn::FirstName,
        ListColumn::LastName,
        ListColumn::Date,
        ListColumn::From,
        ListColumn::To,
        ListColumn::Class,
        ListColumn::Status,
    ])]
    pub columns: Vec<ListColumn>,

    /// Sort by field (store order when omitted)
    #[arg(long)]
    pub sort: Option<ListColumn>,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

/// The three keys that identify a booking
#[derive(clap::Args, Debug, Clone)]
pub struct IdentityArgs {
    /// Booking number (e.g. BK101)
    pub booking: String,

    /// Passenger first name
    pub first: String,

    /// Passenger last name
    pub last: String,
}

impl IdentityArgs {
    fn identity(&self) -> BookingIdentity {
        BookingIdentity::new(&self.booking, &self.first, &self.last)
    }
}

#[derive(clap::Args, Debug)]
pub struct ChangeArgs {
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// New flight date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// New departure airport (IATA code)
    #[arg(long = "from")]
    pub departure: Option<String>,

    /// New arrival airport (IATA code)
    #[arg(long = "to")]
    pub arrival: Option<String>,
}

/// Run a booking command against a freshly seeded store
pub fn run(cmd: BookingCommands, global: &GlobalOpts) -> Result<()> {
    let service = open_service(global)?;
    execute(&service, cmd, global)
}

/// Run a booking command against an existing service
pub fn execute(service: &BookingService, cmd: BookingCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        BookingCommands::List(args) => run_list(service, args, global),
        BookingCommands::Show(args) => run_show(service, args, global),
        BookingCommands::Change(args) => run_change(service, args, global),
        BookingCommands::Cancel(args) => run_cancel(service, args, global),
    }
}

fn run_list(service: &BookingService, args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let mut bookings: Vec<BookingView> = service
        .get_all_bookings()?
        .into_iter()
        .filter(|b| args.status.matches(&b.status) && args.class.matches_str(&b.booking_class))
        .collect();

    if let Some(column) = args.sort {
        sort_views(&mut bookings, column);
    }
    if args.reverse {
        bookings.reverse();
    }
    if let Some(limit) = args.limit {
        bookings.truncate(limit);
    }

    if args.count {
        println!("{}", bookings.len());
        return Ok(());
    }

    let format = effective_format(global.output, true);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&bookings).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&bookings).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            if bookings.is_empty() {
                if format != OutputFormat::Id && format != OutputFormat::Csv {
                    println!("No bookings found.");
                }
                return Ok(());
            }
            let visible: Vec<&str> = args.columns.iter().map(|c| c.key()).collect();
            let rows: Vec<TableRow> = bookings.iter().map(view_to_row).collect();
            TableFormatter::new(BOOKING_COLUMNS, "booking").output(rows, format, &visible)?;
        }
    }

    Ok(())
}

fn sort_views(bookings: &mut [BookingView], column: ListColumn) {
    match column {
        ListColumn::Number => bookings.sort_by(|a, b| a.booking_number.cmp(&b.booking_number)),
        ListColumn::FirstName => bookings.sort_by(|a, b| a.first_name.cmp(&b.first_name)),
        ListColumn::LastName => bookings.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
        ListColumn::Date => bookings.sort_by(|a, b| a.date.cmp(&b.date)),
        ListColumn::From => bookings.sort_by(|a, b| a.departure.cmp(&b.departure)),
        ListColumn::To => bookings.sort_by(|a, b| a.arrival.cmp(&b.arrival)),
        ListColumn::Class => bookings.sort_by(|a, b| a.booking_class.cmp(&b.booking_class)),
        ListColumn::Status => {
            bookings.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str()))
        }
    }
}

fn view_to_row(view: &BookingView) -> TableRow {
    TableRow::new(view.booking_number.clone())
        .cell("number", CellValue::Text(view.booking_number.clone()))
        .cell("first-name", CellValue::Text(view.first_name.clone()))
        .cell("last-name", CellValue::Text(view.last_name.clone()))
        .cell("date", CellValue::Date(view.date))
        .cell("from", CellValue::Text(view.departure.clone()))
        .cell("to", CellValue::Text(view.arrival.clone()))
        .cell("class", CellValue::Text(view.booking_class.clone()))
        .cell("status", CellValue::Status(view.status))
}

fn run_show(service: &BookingService, args: IdentityArgs, global: &GlobalOpts) -> Result<()> {
    let view = service.get_booking_details(&args.identity())?;
    print_view(&view, global)
}

fn run_change(service: &BookingService, args: ChangeArgs, global: &GlobalOpts) -> Result<()> {
    let change = BookingChange {
        date: args.date,
        departure: args.departure,
        arrival: args.arrival,
    };
    let view = service.change_booking(&args.identity.identity(), &change)?;

    if is_human(global) {
        println!(
            "{} Changed booking {} to {} ({} → {})",
            style("✓").green(),
            style(&view.booking_number).cyan(),
            style(view.date).yellow(),
            view.departure,
            view.arrival
        );
    }
    print_view(&view, global)
}

fn run_cancel(service: &BookingService, args: IdentityArgs, global: &GlobalOpts) -> Result<()> {
    let view = service.cancel_booking(&args.identity())?;

    if is_human(global) {
        println!(
            "{} Cancelled booking {}",
            style("✓").green(),
            style(&view.booking_number).cyan()
        );
    }
    print_view(&view, global)
}

fn is_human(global: &GlobalOpts) -> bool {
    matches!(
        effective_format(global.output, false),
        OutputFormat::Auto | OutputFormat::Table
    )
}

fn print_view(view: &BookingView, global: &GlobalOpts) -> Result<()> {
    match effective_format(global.output, false) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(view).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(view).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => println!("{}", view.booking_number),
        format @ (OutputFormat::Tsv | OutputFormat::Csv | OutputFormat::Md) => {
            TableFormatter::new(BOOKING_COLUMNS, "booking").output(
                vec![view_to_row(view)],
                format,
                &[],
            )?;
        }
        OutputFormat::Auto | OutputFormat::Table => print_booking(view),
    }
    Ok(())
}

/// Summary line for the number of bookings matched by a list
pub fn describe_count(count: usize) -> String {
    format!("{} booking{}", count, plural(count))
}
