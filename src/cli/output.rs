//! Output formatting utilities

use console::style;

use crate::cli::OutputFormat;
use crate::entities::BookingView;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Tsv
            } else {
                OutputFormat::Auto
            }
        }
        other => other,
    }
}

/// Print a single booking as a labelled block
pub fn print_booking(view: &BookingView) {
    let status = match view.status {
        crate::core::BookingStatus::Confirmed => style(view.status.as_str()).green(),
        crate::core::BookingStatus::Cancelled => style(view.status.as_str()).red(),
    };

    println!("{}", style("─".repeat(48)).dim());
    println!(
        "{}: {}",
        style("Booking").bold(),
        style(&view.booking_number).cyan()
    );
    println!(
        "{}: {} {}",
        style("Passenger").bold(),
        view.first_name,
        view.last_name
    );
    println!("{}: {}", style("Date").bold(), style(view.date).yellow());
    println!(
        "{}: {} → {}",
        style("Route").bold(),
        view.departure,
        view.arrival
    );
    println!("{}: {}", style("Class").bold(), view.booking_class);
    println!("{}: {}", style("Status").bold(), status);
    println!("{}", style("─".repeat(48)).dim());
}
