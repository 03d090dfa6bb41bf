use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{open_manifest, resolve_base_path};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to wimaint.toml (defaults to ./wimaint.toml)
    #[arg(short, long, default_value = "wimaint.toml")]
    pub config: PathBuf,

    /// Record tree to look for (overrides base_path in wimaint.toml)
    #[arg(long)]
    pub base_path: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let toml = open_manifest(&self.config);
        let manifest = toml.manifest();
        let base_path = resolve_base_path(manifest, self.base_path.as_ref());

        let report = ops::check(manifest, toml.path(), &base_path);
        report.render(&mut TerminalOutput::new());

        if !report.is_consistent() {
            std::process::exit(1);
        }
        Ok(())
    }
}
