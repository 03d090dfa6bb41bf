//! Check command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    status::{Reconciliation, render_reconciliation},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub base_path: PathBuf,
    /// Whether `base_path` is an existing directory.
    pub base_exists: bool,
    /// Length of every identifier list, keyed by manifest key.
    pub lists: Vec<(&'static str, usize)>,
    pub reconciliation: Reconciliation,
}

impl CheckReport {
    /// Whether the category lists partition the catalog.
    pub fn is_consistent(&self) -> bool {
        self.reconciliation.is_consistent()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Base path", &self.base_path.display().to_string());
        if !self.base_exists {
            out.warning(&format!(
                "base path '{}' does not exist",
                self.base_path.display()
            ));
        }

        out.section("Lists");
        for (key, len) in &self.lists {
            out.key_value_indented(key, &len.to_string());
        }

        out.newline();
        render_reconciliation(&self.reconciliation, out);
    }
}
