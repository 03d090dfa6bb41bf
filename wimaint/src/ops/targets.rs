//! Targets operation - find candidates with data worth migrating.

use std::path::Path;

use tracing::debug;
use wimaint_core::{Lookup, Record, Result, ensure_base};
use wimaint_manifest::TargetsSection;

use crate::reports::{FolderFiles, TargetEntry, TargetsReport};

/// Execute the targets operation.
///
/// Candidates without a folder, without `instruction.json`, or without any
/// work steps are left out of the report entirely.
pub fn targets(section: &TargetsSection, base_path: &Path) -> Result<TargetsReport> {
    ensure_base(base_path)?;

    let filter = section.filter();
    let mut entries = Vec::new();

    for id in &section.candidates {
        let Some(record) = Record::locate(base_path, id) else {
            continue;
        };

        let steps = match record.machine_steps(true)? {
            Lookup::Found(steps) => steps,
            Lookup::Absent | Lookup::Empty => {
                debug!(record = %id, "no work steps, skipping");
                continue;
            }
        };

        let mut folders = Vec::new();
        for folder in record.step_folders(&filter)? {
            let files = folder.count_entries()?;
            if files > 0 {
                folders.push(FolderFiles {
                    label: folder.label(),
                    files,
                });
            }
        }

        entries.push(TargetEntry {
            id: id.clone(),
            steps,
            folders,
        });
    }

    Ok(TargetsReport { entries })
}
