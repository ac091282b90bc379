//! `fbd shell` command - interactive session over one live store
//!
//! Each line is one booking command (`list`, `show`, `change`, `cancel`,
//! `fees`). Arguments are split on whitespace. A failing command prints its
//! error and the session carries on; `exit` or `quit` ends it, as does end of
//! input.

use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::stdin_has_data;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::BookingService;

use super::booking::{self, describe_count, BookingCommands};
use super::fees::{self, FeesArgs};
use super::utils::open_service;

#[derive(clap::Args, Debug, Default)]
pub struct ShellArgs {
    /// Stop at the first failing command instead of carrying on
    #[arg(long)]
    pub fail_fast: bool,
}

/// One line of shell input
#[derive(Parser, Debug)]
#[command(name = "fbd>", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    /// Output format for this line only
    #[arg(long, short = 'o', global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Booking(BookingCommands),

    /// Show change and cancellation fees per fare class
    Fees,

    /// Leave the shell
    #[command(visible_alias = "quit")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

pub fn run(args: ShellArgs, global: &GlobalOpts) -> Result<()> {
    let service = open_service(global)?;

    if stdin_has_data() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.into_diagnostic()?;
            if step(&service, &line, global, args.fail_fast)? == Step::Exit {
                break;
            }
        }
        return Ok(());
    }

    println!("{}", banner(&service)?);
    println!(
        "type {} for commands, {} to leave",
        style("help").cyan(),
        style("exit").cyan()
    );

    let theme = ColorfulTheme::default();
    loop {
        let line = match Input::<String>::with_theme(&theme)
            .with_prompt("fbd")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Ctrl-D or a closed terminal ends the session
            Err(_) => break,
        };
        if step(&service, &line, global, args.fail_fast)? == Step::Exit {
            break;
        }
    }

    Ok(())
}

/// Session summary: bookings loaded, effective date and policy windows
fn banner(service: &BookingService) -> Result<String> {
    let count = service.get_all_bookings()?.len();
    let policy = service.policy();
    Ok(format!(
        "{} {} loaded, today is {}; changes close {}h and cancellations {}h before departure",
        style("fbd shell").bold(),
        describe_count(count),
        service.today(),
        policy.change_window_hours(),
        policy.cancel_window_hours()
    ))
}

/// Parse a line; `None` for blank lines and comments
fn parse_line(line: &str) -> Option<std::result::Result<ShellLine, clap::Error>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first() {
        None => None,
        Some(first) if first.starts_with('#') => None,
        Some(_) => Some(ShellLine::try_parse_from(tokens)),
    }
}

fn step(service: &BookingService, line: &str, global: &GlobalOpts, fail_fast: bool) -> Result<Step> {
    let parsed = match parse_line(line) {
        None => return Ok(Step::Continue),
        Some(Ok(parsed)) => parsed,
        Some(Err(e)) => {
            // Help output and usage errors both arrive here
            e.print().into_diagnostic()?;
            if fail_fast && e.use_stderr() {
                return Err(miette::miette!("invalid shell command: {}", line.trim()));
            }
            return Ok(Step::Continue);
        }
    };

    let mut line_global = global.clone();
    if let Some(output) = parsed.output {
        line_global.output = output;
    }

    let outcome = match parsed.command {
        ShellCommand::Exit => return Ok(Step::Exit),
        ShellCommand::Fees => fees::run(FeesArgs::default(), &line_global),
        ShellCommand::Booking(cmd) => booking::execute(service, cmd, &line_global),
    };

    if let Err(e) = outcome {
        if fail_fast {
            return Err(e);
        }
        eprintln!("{} {}", style("error:").red().bold(), e);
    }
    Ok(Step::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::seed::{build_bookings, SeedBooking};
    use crate::core::{BookingClass, BookingStatus, PolicyConfig};
    use crate::core::BookingStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn service() -> BookingService {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let bookings = build_bookings(vec![SeedBooking {
            booking_number: "BK101".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date: NaiveDate::from_ymd_opt(2030, 1, 10).unwrap(),
            departure: "LAX".to_string(),
            arrival: "JFK".to_string(),
            booking_class: BookingClass::Economy,
            status: BookingStatus::Confirmed,
        }])
        .unwrap();
        BookingService::with_policy(
            Arc::new(BookingStore::with_bookings(bookings)),
            PolicyConfig::default(),
            FixedClock(today),
        )
    }

    #[test]
    fn test_banner_shows_date_and_windows() {
        console::set_colors_enabled(false);
        let text = banner(&service()).unwrap();
        assert!(text.contains("1 booking loaded"), "{}", text);
        assert!(text.contains("today is 2030-01-01"), "{}", text);
        assert!(text.contains("changes close 24h"), "{}", text);
        assert!(text.contains("cancellations 48h"), "{}", text);
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("# a note").is_none());
    }

    fn command(line: &str) -> ShellCommand {
        parse_line(line).unwrap().unwrap().command
    }

    #[test]
    fn test_parse_line_commands() {
        assert!(matches!(
            command("cancel BK101 John Doe"),
            ShellCommand::Booking(BookingCommands::Cancel(_))
        ));
        assert!(matches!(
            command("change BK101 John Doe --date 2030-02-01 --from sfo --to bos"),
            ShellCommand::Booking(BookingCommands::Change(_))
        ));
        assert!(matches!(command("quit"), ShellCommand::Exit));
        assert!(matches!(command("fees"), ShellCommand::Fees));
        assert!(matches!(parse_line("fly me to the moon"), Some(Err(_))));
    }

    #[test]
    fn test_parse_line_output_override() {
        let parsed = parse_line("show BK101 John Doe -o json").unwrap().unwrap();
        assert_eq!(parsed.output, Some(OutputFormat::Json));
        assert!(parse_line("list").unwrap().unwrap().output.is_none());
    }

    #[test]
    fn test_step_keeps_going_after_errors() {
        let svc = service();
        let global = GlobalOpts::default();

        assert_eq!(step(&svc, "cancel BK101 John Doe", &global, false).unwrap(), Step::Continue);
        assert_eq!(step(&svc, "cancel BK101 John Doe", &global, false).unwrap(), Step::Continue);
        assert_eq!(step(&svc, "show BK999 No One", &global, false).unwrap(), Step::Continue);
        assert_eq!(step(&svc, "exit", &global, false).unwrap(), Step::Exit);

        let view = svc
            .get_booking_details(&crate::core::BookingIdentity::new("BK101", "John", "Doe"))
            .unwrap();
        assert_eq!(view.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_step_fail_fast() {
        let svc = service();
        let global = GlobalOpts::default();

        step(&svc, "cancel BK101 John Doe", &global, true).unwrap();
        let err = step(&svc, "cancel BK101 John Doe", &global, true).unwrap_err();
        assert_eq!(err.to_string(), "Booking has already been cancelled.");
    }
}
