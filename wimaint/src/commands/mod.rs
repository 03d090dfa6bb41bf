mod check;
mod clean;
mod completions;
mod init;
mod status;
mod targets;
mod templates;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use status::StatusCommand;
use targets::TargetsCommand;
use templates::TemplatesCommand;
use wimaint_manifest::{Manifest, WimaintToml};

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open the manifest, exiting with a diagnostic if it is missing or invalid.
fn open_manifest(config: &Path) -> WimaintToml {
    WimaintToml::open(config).unwrap_or_exit()
}

/// `--base-path` when given, otherwise the manifest's `base_path`.
fn resolve_base_path(manifest: &Manifest, flag: Option<&PathBuf>) -> PathBuf {
    flag.cloned().unwrap_or_else(|| manifest.base_path.clone())
}

#[derive(Parser)]
#[command(name = "wimaint")]
#[command(version)]
#[command(about = "Audit, clean up and template work-instruction record folders")]
pub(crate) struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Status(cmd) => cmd.run(),
            Commands::Targets(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Templates(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter wimaint.toml
    Init(InitCommand),

    /// Validate wimaint.toml and check that the category lists add up
    Check(CheckCommand),

    /// Reconcile the catalog against the migration category lists
    Status(StatusCommand),

    /// Find migration candidates that still have step media
    Targets(TargetsCommand),

    /// Remove empty step folders
    Clean(CleanCommand),

    /// Write the CSV input templates
    Templates(TemplatesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
