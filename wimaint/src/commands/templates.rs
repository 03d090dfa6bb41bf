use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wimaint_manifest::TemplatesSection;

use super::open_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    /// Path to wimaint.toml, read only if it exists
    #[arg(short, long, default_value = "wimaint.toml")]
    pub config: PathBuf,

    /// Output directory (overrides templates.output_dir, default doc/csv_templates)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List the files without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None if self.config.exists() => open_manifest(&self.config)
                .manifest()
                .templates
                .output_dir
                .clone(),
            None => TemplatesSection::default().output_dir,
        };

        let report = ops::templates(ops::templates::TemplatesOptions {
            output_dir: &output_dir,
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
