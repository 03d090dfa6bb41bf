mod commands;
mod ops;
mod reports;
mod templates;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// Logs go to stderr and stay off unless `--verbose` or `RUST_LOG` asks for
/// them. Reports already surface every warning and failure.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
