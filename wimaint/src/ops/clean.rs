//! Clean operation - remove empty step folders.

use std::{fs, io, path::Path};

use tracing::{debug, error, info};
use wimaint_core::{Error, MediaKind, Record, Result, StepFolder, ensure_base};
use wimaint_manifest::CleanSection;

use crate::reports::{
    CleanEntry, CleanFailure, CleanOutcome, CleanReport, KeptFolder, ScannedRecord,
};

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Root of the record tree.
    pub base_path: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Only empty step folders are removed. Non-empty ones are reported and left
/// alone. A media or step folder that cannot be inspected or removed is
/// recorded as a failure, and the run moves on to the next folder.
pub fn clean(section: &CleanSection, opts: CleanOptions) -> Result<CleanReport> {
    ensure_base(opts.base_path)?;

    let filter = section.filter();
    let mut entries = Vec::with_capacity(section.drawings.len());

    for id in &section.drawings {
        let outcome = match Record::locate(opts.base_path, id) {
            None => CleanOutcome::Missing,
            Some(record) => {
                let mut scan = ScannedRecord::default();
                for kind in MediaKind::ALL {
                    match record.media_step_folders(kind, &filter) {
                        Ok(folders) => sweep(&folders, opts.dry_run, &mut scan),
                        Err(err) => scan.failures.push(scan_failure(&record, *err)),
                    }
                }
                CleanOutcome::Scanned(scan)
            }
        };
        entries.push(CleanEntry {
            id: id.clone(),
            outcome,
        });
    }

    Ok(CleanReport {
        dry_run: opts.dry_run,
        entries,
    })
}

fn sweep(folders: &[StepFolder], dry_run: bool, scan: &mut ScannedRecord) {
    for folder in folders {
        let label = folder.label();
        let entries = match folder.entry_count() {
            Ok(n) => n,
            Err(err) => {
                error!(path = %folder.path.display(), error = %err, "failed to inspect step folder");
                scan.failures.push(CleanFailure {
                    label,
                    message: err.to_string(),
                });
                continue;
            }
        };

        if entries > 0 {
            debug!(path = %folder.path.display(), entries, "step folder not empty, skipping");
            scan.kept.push(KeptFolder { label, entries });
            continue;
        }

        if dry_run {
            debug!(path = %folder.path.display(), "would delete empty step folder");
            scan.deleted.push(label);
            continue;
        }

        match remove_empty(&folder.path) {
            Ok(()) => {
                info!(path = %folder.path.display(), "deleted empty step folder");
                scan.deleted.push(label);
            }
            Err(err) => {
                error!(path = %folder.path.display(), error = %err, "failed to delete step folder");
                scan.failures.push(CleanFailure {
                    label,
                    message: err.to_string(),
                });
            }
        }
    }
}

/// Remove `path` only if it is still empty.
fn remove_empty(path: &Path) -> io::Result<()> {
    fs::remove_dir(path)
}

fn scan_failure(record: &Record, err: Error) -> CleanFailure {
    match err {
        Error::Io { path, source } => {
            error!(path = %path.display(), error = %source, "failed to scan media folder");
            let label = path
                .strip_prefix(record.path())
                .unwrap_or(path.as_path())
                .display()
                .to_string();
            CleanFailure {
                label,
                message: source.to_string(),
            }
        }
        other => {
            error!(record = %record.id(), error = %other, "failed to scan step folders");
            CleanFailure {
                label: "*".into(),
                message: other.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn section(drawings: &[&str]) -> CleanSection {
        CleanSection {
            drawings: drawings.iter().map(|s| s.to_string()).collect(),
            exclude: None,
        }
    }

    fn scanned(report: &CleanReport, index: usize) -> &ScannedRecord {
        match &report.entries[index].outcome {
            CleanOutcome::Scanned(scan) => scan,
            CleanOutcome::Missing => panic!("record {index} was not scanned"),
        }
    }

    /// `drawing-a` with a non-empty `images/step_3`, an empty
    /// `images/step_4`, and overview folders that must survive.
    fn fixture() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("drawing-a");
        fs::create_dir_all(record.join("images/step_3")).unwrap();
        fs::write(record.join("images/step_3/photo.jpg"), "").unwrap();
        fs::create_dir_all(record.join("images/step_4")).unwrap();
        fs::create_dir_all(record.join("images/step_overview")).unwrap();
        fs::create_dir_all(record.join("videos/overview")).unwrap();
        (temp, record)
    }

    fn run(base: &Path, drawings: &[&str], dry_run: bool) -> CleanReport {
        clean(
            &section(drawings),
            CleanOptions {
                base_path: base,
                dry_run,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_deletes_only_empty_step_folders() {
        let (temp, record) = fixture();

        let report = run(temp.path(), &["drawing-a"], false);
        let scan = scanned(&report, 0);

        assert_eq!(scan.deleted, ["images/step_4"]);
        assert_eq!(
            scan.kept,
            [KeptFolder {
                label: "images/step_3".into(),
                entries: 1,
            }]
        );
        assert_eq!(report.total_deleted(), 1);
        assert!(!report.has_failures());

        assert!(record.join("images/step_3/photo.jpg").exists());
        assert!(!record.join("images/step_4").exists());
    }

    #[test]
    fn test_second_run_deletes_nothing() {
        let (temp, _record) = fixture();

        assert_eq!(run(temp.path(), &["drawing-a"], false).total_deleted(), 1);
        assert_eq!(run(temp.path(), &["drawing-a"], false).total_deleted(), 0);
    }

    #[test]
    fn test_overview_folders_survive() {
        let (temp, record) = fixture();

        run(temp.path(), &["drawing-a"], false);

        assert!(record.join("images/step_overview").is_dir());
        assert!(record.join("videos/overview").is_dir());
    }

    #[test]
    fn test_dry_run_deletes_nothing() {
        let (temp, record) = fixture();

        let report = run(temp.path(), &["drawing-a"], true);

        assert!(report.dry_run);
        assert_eq!(report.total_deleted(), 1);
        assert!(record.join("images/step_4").is_dir());
    }

    #[test]
    fn test_missing_record_is_skipped() {
        let (temp, _record) = fixture();

        let report = run(temp.path(), &["drawing-x", "drawing-a"], false);

        assert_eq!(report.entries[0].outcome, CleanOutcome::Missing);
        assert_eq!(report.total_deleted(), 1);
    }

    #[test]
    fn test_counts_across_drawings() {
        let (temp, _record) = fixture();
        let other = temp.path().join("drawing-b");
        fs::create_dir_all(other.join("pdfs/step_1")).unwrap();
        fs::create_dir_all(other.join("programs/step_2")).unwrap();

        let report = run(temp.path(), &["drawing-a", "drawing-b"], false);

        assert_eq!(scanned(&report, 1).deleted, ["pdfs/step_1", "programs/step_2"]);
        assert_eq!(report.total_deleted(), 3);
    }

    #[test]
    fn test_configured_exclusions_are_kept() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("drawing-a");
        fs::create_dir_all(record.join("images/step_1_machining")).unwrap();
        fs::create_dir_all(record.join("images/step_2")).unwrap();

        let section = CleanSection {
            drawings: vec!["drawing-a".into()],
            exclude: Some(vec!["_machining".into()]),
        };
        let report = clean(
            &section,
            CleanOptions {
                base_path: temp.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(scanned(&report, 0).deleted, ["images/step_2"]);
        assert!(record.join("images/step_1_machining").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_media_folder_does_not_stop_record() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let record = temp.path().join("drawing-a");
        let images = record.join("images");
        fs::create_dir_all(images.join("step_1")).unwrap();
        fs::create_dir_all(record.join("videos/step_1")).unwrap();
        fs::create_dir_all(record.join("pdfs/step_2")).unwrap();
        fs::write(record.join("pdfs/step_2/sheet.pdf"), "").unwrap();
        fs::create_dir_all(temp.path().join("drawing-b/programs/step_1")).unwrap();

        fs::set_permissions(&images, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&images).is_ok() {
            // Permission bits are not enforced (running as root).
            fs::set_permissions(&images, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let report = run(temp.path(), &["drawing-a", "drawing-b"], false);
        fs::set_permissions(&images, fs::Permissions::from_mode(0o755)).unwrap();

        let scan = scanned(&report, 0);
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].label, "images");
        assert_eq!(scan.deleted, ["videos/step_1"]);
        assert_eq!(
            scan.kept,
            [KeptFolder {
                label: "pdfs/step_2".into(),
                entries: 1,
            }]
        );
        assert_eq!(scanned(&report, 1).deleted, ["programs/step_1"]);
        assert!(report.has_failures());
        assert_eq!(report.total_deleted(), 2);

        assert!(images.join("step_1").is_dir());
        assert!(!record.join("videos/step_1").exists());
    }

    #[test]
    fn test_vanished_folder_is_recorded_and_sweep_continues() {
        let temp = TempDir::new().unwrap();
        let images = temp.path().join("drawing-a/images");
        fs::create_dir_all(images.join("step_2")).unwrap();

        let folders = [
            StepFolder {
                kind: MediaKind::Images,
                name: "step_1".into(),
                path: images.join("step_1"),
            },
            StepFolder {
                kind: MediaKind::Images,
                name: "step_2".into(),
                path: images.join("step_2"),
            },
        ];
        let mut scan = ScannedRecord::default();
        sweep(&folders, false, &mut scan);

        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].label, "images/step_1");
        assert_eq!(scan.deleted, ["images/step_2"]);
        assert!(!images.join("step_2").exists());
    }

    #[test]
    fn test_remove_empty_keeps_folder_that_gained_contents() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("step_1");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("late.jpg"), "").unwrap();

        assert!(remove_empty(&dir).is_err());
        assert!(dir.join("late.jpg").exists());

        fs::remove_file(dir.join("late.jpg")).unwrap();
        remove_empty(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_missing_base_fails() {
        let temp = TempDir::new().unwrap();
        let err = clean(
            &section(&["drawing-a"]),
            CleanOptions {
                base_path: &temp.path().join("absent"),
                dry_run: false,
            },
        )
        .unwrap_err();
        assert!(matches!(*err, Error::BaseNotFound { .. }));
    }
}
