//! Targets command report data structures.

use wimaint_core::MachineSteps;

use super::output::{Output, Report};

/// Files found in one step folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFiles {
    /// `<kind>/<name>`, e.g. `images/step_2`.
    pub label: String,
    pub files: usize,
}

/// A candidate with work steps.
#[derive(Debug, Clone)]
pub struct TargetEntry {
    pub id: String,
    pub steps: MachineSteps,
    /// Non-empty qualifying step folders.
    pub folders: Vec<FolderFiles>,
}

impl TargetEntry {
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files).sum()
    }

    pub fn has_files(&self) -> bool {
        self.file_count() > 0
    }
}

/// Report data from the migration target analysis.
#[derive(Debug, Default)]
pub struct TargetsReport {
    /// Candidates that have work steps, in candidate order.
    pub entries: Vec<TargetEntry>,
}

impl TargetsReport {
    /// Candidates with at least one file to migrate.
    pub fn with_data(&self) -> impl Iterator<Item = &TargetEntry> {
        self.entries.iter().filter(|e| e.has_files())
    }

    /// Files across all candidates with data.
    pub fn total_files(&self) -> usize {
        self.entries.iter().map(TargetEntry::file_count).sum()
    }
}

fn files(n: usize) -> String {
    format!("{} file{}", n, if n == 1 { "" } else { "s" })
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Migration Targets Analysis");

        for entry in &self.entries {
            out.newline();
            out.preformatted(&entry.id);
            out.key_value_indented("Work steps", &entry.steps.to_string());
            if entry.has_files() {
                out.key_value_indented("Total files", &entry.file_count().to_string());
                for folder in &entry.folders {
                    out.list_item(&format!("{}: {}", folder.label, files(folder.files)));
                }
            } else {
                out.preformatted("  No files in step folders");
            }
        }

        out.newline();
        out.section("Summary");
        out.key_value_indented("Drawings with data", &self.with_data().count().to_string());
        out.key_value_indented("Total files to migrate", &self.total_files().to_string());

        out.newline();
        out.section("Drawings to migrate");
        for entry in self.with_data() {
            out.list_item(&entry.id);
        }
    }
}
