use clap::Parser;
use fbd::cli::{Cli, Commands};
use fbd::core::Config;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match cli.command {
        Commands::Booking(cmd) => fbd::cli::commands::booking::run(cmd, &cli.global),
        Commands::Fees(args) => fbd::cli::commands::fees::run(args, &cli.global),
        Commands::Shell(args) => fbd::cli::commands::shell::run(args, &cli.global),
        Commands::Completions(args) => fbd::cli::commands::completions::run(args),
    }
}

/// Log to stderr so stdout stays clean for machine-readable output
///
/// `RUST_LOG` wins; otherwise `-v`/`-vv`, then the configured `log_level`,
/// then `warn`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => Config::load().log_level.unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
