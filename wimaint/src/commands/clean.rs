use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::{UnwrapOrExit, open_manifest, resolve_base_path};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to wimaint.toml (defaults to ./wimaint.toml)
    #[arg(short, long, default_value = "wimaint.toml")]
    pub config: PathBuf,

    /// Record tree to clean (overrides base_path in wimaint.toml)
    #[arg(long)]
    pub base_path: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let toml = open_manifest(&self.config);
        let manifest = toml.manifest();
        let base_path = resolve_base_path(manifest, self.base_path.as_ref());

        if !self.dry_run && !self.yes && !Self::confirm(manifest.clean.drawings.len())? {
            println!("Aborted.");
            return Ok(());
        }

        let report = ops::clean(
            &manifest.clean,
            ops::clean::CleanOptions {
                base_path: &base_path,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn confirm(drawings: usize) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete empty step folders in {} drawing folder(s)?",
                drawings
            ))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
