//! Command-line argument definitions

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::booking::BookingCommands;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::fees::FeesArgs;
use crate::cli::commands::shell::ShellArgs;

/// Flight Booking Desk - view, change and cancel flight bookings
#[derive(Parser, Debug)]
#[command(name = "fbd", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// YAML file to seed the booking store from (demo data when omitted)
    #[arg(long, global = true, env = "FBD_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Evaluate lead-time rules as if today were this date
    #[arg(long, global = true, env = "FBD_TODAY", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "auto")]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Booking management (list, show, change, cancel)
    #[command(subcommand, visible_alias = "bk")]
    Booking(BookingCommands),

    /// Show change and cancellation fees per fare class
    Fees(FeesArgs),

    /// Run booking commands interactively against one live store
    Shell(ShellArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// TSV for lists, pretty text for single bookings
    #[default]
    Auto,
    /// Tab-aligned columns
    Tsv,
    /// Comma-separated values
    Csv,
    /// JSON
    Json,
    /// YAML
    Yaml,
    /// Markdown table
    Md,
    /// Boxed table
    Table,
    /// Booking numbers only, one per line
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fbd", "booking", "list", "--today", "2030-01-01", "-o", "json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.global.today, NaiveDate::from_ymd_opt(2030, 1, 1));
        assert_eq!(cli.global.output, OutputFormat::Json);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_bad_today_is_rejected() {
        assert!(Cli::try_parse_from(["fbd", "fees", "--today", "tomorrow"]).is_err());
    }

    #[test]
    fn test_booking_alias() {
        let cli = Cli::try_parse_from(["fbd", "bk", "show", "BK101", "John", "Doe"]).unwrap();
        assert!(matches!(cli.command, Commands::Booking(BookingCommands::Show(_))));
    }
}
