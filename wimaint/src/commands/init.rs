use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wimaint_core::{File, WriteResult};
use wimaint_manifest::starter_manifest;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest
    #[arg(default_value = "wimaint.toml")]
    pub path: PathBuf,

    /// Overwrite an existing manifest
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut file = File::new(&self.path, starter_manifest());
        if !self.force {
            file = file.if_missing();
        }

        match file.write()? {
            WriteResult::Written => {
                println!("Created {}", self.path.display());
                println!();
                println!("Next steps:");
                println!("  wimaint check");
                println!("  wimaint status");
                Ok(())
            }
            WriteResult::Skipped => {
                eprintln!("error: {} already exists", self.path.display());
                eprintln!("Pass --force to overwrite it.");
                std::process::exit(1);
            }
        }
    }
}
