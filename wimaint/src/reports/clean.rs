//! Clean command report data structures.

use super::output::{Output, Report};

/// A non-empty step folder that was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptFolder {
    pub label: String,
    pub entries: usize,
}

/// A step folder that could not be inspected or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanFailure {
    pub label: String,
    pub message: String,
}

/// What happened to one drawing's step folders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannedRecord {
    /// Empty step folders removed (or that would be removed).
    pub deleted: Vec<String>,
    pub kept: Vec<KeptFolder>,
    pub failures: Vec<CleanFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The record folder does not exist.
    Missing,
    Scanned(ScannedRecord),
}

impl CleanOutcome {
    pub fn deleted(&self) -> usize {
        match self {
            CleanOutcome::Missing => 0,
            CleanOutcome::Scanned(scan) => scan.deleted.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanEntry {
    pub id: String,
    pub outcome: CleanOutcome,
}

/// Report data from removing empty step folders.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// One entry per drawing, in list order.
    pub entries: Vec<CleanEntry>,
}

impl CleanReport {
    /// Step folders deleted across all drawings.
    pub fn total_deleted(&self) -> usize {
        self.entries.iter().map(|e| e.outcome.deleted()).sum()
    }

    /// Whether any folder failed to be inspected or removed.
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| match &e.outcome {
            CleanOutcome::Missing => false,
            CleanOutcome::Scanned(scan) => !scan.failures.is_empty(),
        })
    }

    fn verb(&self) -> &'static str {
        if self.dry_run { "Would delete" } else { "Deleted" }
    }
}

fn plural(n: usize, word: &str) -> String {
    format!("{} {}{}", n, word, if n == 1 { "" } else { "s" })
}

fn entries(n: usize) -> String {
    format!("{} {}", n, if n == 1 { "entry" } else { "entries" })
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.title("Deleting empty step folders (dry run)");
        } else {
            out.title("Deleting empty step folders");
        }

        for entry in &self.entries {
            let scan = match &entry.outcome {
                CleanOutcome::Missing => {
                    out.preformatted(&format!("SKIP {}: Folder does not exist", entry.id));
                    continue;
                }
                CleanOutcome::Scanned(scan) => scan,
            };

            for kept in &scan.kept {
                out.warning(&format!(
                    "{}/{} has {} - skipping",
                    entry.id,
                    kept.label,
                    entries(kept.entries)
                ));
            }
            for failure in &scan.failures {
                out.warning(&format!(
                    "could not clean {}/{}: {}",
                    entry.id, failure.label, failure.message
                ));
            }

            if scan.deleted.is_empty() && !scan.failures.is_empty() {
                out.preformatted(&format!(
                    "FAIL {}: Could not clean {}",
                    entry.id,
                    plural(scan.failures.len(), "folder")
                ));
            } else if scan.deleted.is_empty() {
                out.preformatted(&format!("SKIP {}: No step folders found", entry.id));
            } else {
                out.preformatted(&format!(
                    "DONE {}: {} {}",
                    entry.id,
                    self.verb(),
                    plural(scan.deleted.len(), "step folder")
                ));
                for label in &scan.deleted {
                    out.removed_item(label);
                }
            }
        }

        out.newline();
        out.preformatted(&format!(
            "Total: {} {} from {}",
            self.verb(),
            plural(self.total_deleted(), "step folder"),
            plural(self.entries.len(), "drawing")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::StringOutput;

    fn report(dry_run: bool) -> CleanReport {
        CleanReport {
            dry_run,
            entries: vec![
                CleanEntry {
                    id: "drawing-a".into(),
                    outcome: CleanOutcome::Scanned(ScannedRecord {
                        deleted: vec!["images/step_4".into(), "pdfs/step_1".into()],
                        kept: vec![KeptFolder {
                            label: "images/step_3".into(),
                            entries: 1,
                        }],
                        failures: Vec::new(),
                    }),
                },
                CleanEntry {
                    id: "drawing-b".into(),
                    outcome: CleanOutcome::Missing,
                },
                CleanEntry {
                    id: "drawing-c".into(),
                    outcome: CleanOutcome::Scanned(ScannedRecord::default()),
                },
            ],
        }
    }

    #[test]
    fn test_render() {
        insta::assert_snapshot!(StringOutput::render(&report(false)), @r"
        Deleting empty step folders
        ===========================
        warning: drawing-a/images/step_3 has 1 entry - skipping
        DONE drawing-a: Deleted 2 step folders
          - images/step_4
          - pdfs/step_1
        SKIP drawing-b: Folder does not exist
        SKIP drawing-c: No step folders found

        Total: Deleted 2 step folders from 3 drawings
        ");
    }

    #[test]
    fn test_render_dry_run() {
        let rendered = StringOutput::render(&report(true));
        assert!(rendered.contains("DONE drawing-a: Would delete 2 step folders"));
        assert!(rendered.contains("Total: Would delete 2 step folders from 3 drawings"));
    }

    #[test]
    fn test_failures_are_reported() {
        let report = CleanReport {
            dry_run: false,
            entries: vec![CleanEntry {
                id: "drawing-a".into(),
                outcome: CleanOutcome::Scanned(ScannedRecord {
                    failures: vec![CleanFailure {
                        label: "videos/step_2".into(),
                        message: "permission denied".into(),
                    }],
                    ..Default::default()
                }),
            }],
        };

        assert!(report.has_failures());
        let rendered = StringOutput::render(&report);
        assert!(rendered.contains("warning: could not clean drawing-a/videos/step_2: permission denied"));
        assert!(rendered.contains("FAIL drawing-a: Could not clean 1 folder"));
        assert!(!rendered.contains("No step folders found"));
        assert!(rendered.contains("Total: Deleted 0 step folders from 1 drawing"));
    }
}
