//! CLI entry point for xmlcutty.

use clap::Parser;
use console::style;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use xmlcutty::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // WARN by default, RUST_LOG overrides. --verbose always enables the
    // crate's INFO match reports on top of whatever RUST_LOG says.
    // Diagnostics go to stderr so they never mix with extracted output.
    let default_level = if cli.verbose { "info" } else { "warn" };
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if cli.verbose {
        if let Ok(directive) = "xmlcutty=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(cli) {
        eprintln!("{} {e}", style("Error:").red().bold().for_stderr());
        std::process::exit(1);
    }
}
