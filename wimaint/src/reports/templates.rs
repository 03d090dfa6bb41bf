//! Templates command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing the CSV templates.
#[derive(Debug)]
pub struct TemplatesReport {
    pub output_dir: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// File names, relative to `output_dir`.
    pub files: Vec<String>,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.section("Would write");
        } else {
            out.section("Wrote");
        }
        for file in &self.files {
            out.added_item(file);
        }

        if !self.dry_run {
            out.newline();
            out.preformatted(&format!(
                "CSV templates created in {}",
                self.output_dir.display()
            ));
        }
    }
}
