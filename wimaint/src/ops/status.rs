//! Status operation - reconcile the catalog against its category lists.

use std::{collections::HashSet, path::Path};

use indexmap::IndexMap;
use tracing::debug;
use wimaint_core::{Record, Result, StepFolderFilter, ensure_base};
use wimaint_manifest::StatusSection;

use crate::reports::{
    Category, Overlap, Reconciliation, RecordStatus, StatusReport, UnknownRecord,
};

/// Execute the status operation.
///
/// Read-only. Fails before inspecting any record when `base_path` is missing,
/// and aborts on the first malformed `instruction.json`.
pub fn status(section: &StatusSection, base_path: &Path) -> Result<StatusReport> {
    ensure_base(base_path)?;

    let reconciliation = reconcile(section);
    let filter = section.filter();

    let mut unknown = Vec::with_capacity(reconciliation.unknown.len());
    for id in &reconciliation.unknown {
        let status = describe(base_path, id, &filter)?;
        debug!(record = %id, %status, "inspected unknown record");
        unknown.push(UnknownRecord {
            id: id.clone(),
            status,
        });
    }

    Ok(StatusReport {
        base_path: base_path.to_path_buf(),
        reconciliation,
        unknown,
    })
}

/// Partition the catalog into the configured categories.
///
/// Pure: looks only at the lists, never at the filesystem.
pub fn reconcile(section: &StatusSection) -> Reconciliation {
    let lists = [
        (Category::Phase1Deleted, &section.phase1_deleted),
        (Category::Migrated, &section.migrated),
        (Category::ToMigrate, &section.to_migrate),
    ];

    let mut membership: IndexMap<&str, Vec<Category>> = IndexMap::new();
    for (category, ids) in &lists {
        for id in ids.iter() {
            let categories = membership.entry(id.as_str()).or_default();
            if !categories.contains(category) {
                categories.push(*category);
            }
        }
    }

    let mut seen = HashSet::new();
    let mut catalog_duplicates = Vec::new();
    let mut unknown = Vec::new();
    for id in &section.catalog {
        if !seen.insert(id.as_str()) && !catalog_duplicates.contains(id) {
            catalog_duplicates.push(id.clone());
        }
        if !membership.contains_key(id.as_str()) {
            unknown.push(id.clone());
        }
    }

    let overlaps = membership
        .iter()
        .filter(|(_, categories)| categories.len() > 1)
        .map(|(id, categories)| Overlap {
            id: id.to_string(),
            categories: categories.clone(),
        })
        .collect();

    let outside_catalog = membership
        .iter()
        .filter(|(id, _)| !seen.contains(*id))
        .flat_map(|(id, categories)| categories.iter().map(move |c| (id.to_string(), *c)))
        .collect();

    Reconciliation {
        catalog_size: section.catalog.len(),
        phase1_deleted: section.phase1_deleted.len(),
        migrated: section.migrated.len(),
        to_migrate: section.to_migrate.len(),
        unknown,
        overlaps,
        outside_catalog,
        catalog_duplicates,
    }
}

/// Describe what is on disk for one identifier.
pub fn describe(base_path: &Path, id: &str, filter: &StepFolderFilter) -> Result<RecordStatus> {
    let Some(record) = Record::locate(base_path, id) else {
        return Ok(RecordStatus::FolderMissing);
    };

    let steps = record.machine_steps(false)?;

    let mut legacy_folders = 0;
    for folder in record.step_folders(filter)? {
        if folder.count_entries()? > 0 {
            legacy_folders += 1;
        }
    }

    Ok(RecordStatus::Inspected {
        steps,
        legacy_folders,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use wimaint_core::{Error, Lookup};

    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn section(catalog: &[&str], p: &[&str], m: &[&str], t: &[&str]) -> StatusSection {
        StatusSection {
            catalog: ids(catalog),
            phase1_deleted: ids(p),
            migrated: ids(m),
            to_migrate: ids(t),
            exclude: None,
        }
    }

    #[test]
    fn test_unknown_preserves_catalog_order() {
        let section = section(
            &["d-5", "d-1", "d-4", "d-2", "d-3"],
            &["d-1"],
            &["d-2"],
            &["d-3"],
        );
        let rec = reconcile(&section);

        assert_eq!(rec.unknown, ["d-5", "d-4"]);
        assert_eq!(rec.sum(), 5);
        assert!(rec.is_consistent());
        assert!(rec.overlaps.is_empty());
    }

    #[test]
    fn test_double_listed_identifier_is_a_mismatch() {
        let section = section(&["d-1", "d-2", "d-3"], &["d-1"], &["d-1"], &["d-2"]);
        let rec = reconcile(&section);

        assert_eq!(rec.unknown, ["d-3"]);
        assert_eq!(rec.sum(), 4);
        assert!(!rec.is_consistent());
        assert_eq!(
            rec.overlaps,
            [Overlap {
                id: "d-1".into(),
                categories: vec![Category::Phase1Deleted, Category::Migrated],
            }]
        );
    }

    #[test]
    fn test_member_outside_catalog_is_a_mismatch() {
        let section = section(&["d-1"], &["d-1"], &[], &["d-9"]);
        let rec = reconcile(&section);

        assert!(!rec.is_consistent());
        assert_eq!(rec.outside_catalog, [("d-9".to_string(), Category::ToMigrate)]);
    }

    #[test]
    fn test_catalog_duplicates_reported() {
        let section = section(&["d-1", "d-1"], &["d-1"], &[], &[]);
        let rec = reconcile(&section);

        assert!(rec.unknown.is_empty());
        assert!(!rec.is_consistent());
        assert_eq!(rec.catalog_duplicates, ["d-1"]);
    }

    #[test]
    fn test_status_describes_unknown_records() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();

        let with_steps = base.join("d-steps");
        fs::create_dir_all(&with_steps).unwrap();
        fs::write(
            with_steps.join("instruction.json"),
            r#"{"workStepsByMachine": {"machining": [{}, {}, {}], "turning": [], "yokonaka": [], "radial": [], "other": []}}"#,
        )
        .unwrap();

        let legacy = base.join("d-legacy");
        fs::create_dir_all(legacy.join("images/step_1")).unwrap();
        fs::create_dir_all(legacy.join("images/step_2")).unwrap();
        fs::create_dir_all(legacy.join("videos/overview")).unwrap();
        fs::create_dir_all(legacy.join("pdfs/step_overview")).unwrap();
        fs::write(legacy.join("images/step_1/a.jpg"), "").unwrap();
        fs::write(legacy.join("pdfs/step_overview/o.pdf"), "").unwrap();
        fs::write(legacy.join("instruction.json"), r#"{"workSteps": [{}]}"#).unwrap();

        let section = section(
            &["d-known", "d-steps", "d-missing", "d-legacy"],
            &["d-known"],
            &[],
            &[],
        );
        let report = status(&section, base).unwrap();

        let statuses: Vec<(String, String)> = report
            .unknown
            .iter()
            .map(|u| (u.id.clone(), u.status.to_string()))
            .collect();
        assert_eq!(
            statuses,
            [
                ("d-steps".to_string(), "machining:3 ".to_string()),
                ("d-missing".to_string(), "folder missing".to_string()),
                (
                    "d-legacy".to_string(),
                    "no work steps | legacy folders: 1".to_string()
                ),
            ]
        );
        assert!(report.reconciliation.is_consistent());
    }

    #[test]
    fn test_status_without_instruction_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("d-1")).unwrap();

        let status = describe(temp.path(), "d-1", &StepFolderFilter::default()).unwrap();
        assert_eq!(
            status,
            RecordStatus::Inspected {
                steps: Lookup::Absent,
                legacy_folders: 0,
            }
        );
    }

    #[test]
    fn test_missing_base_fails_first() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("public/data/work-instructions");
        let section = section(&["d-1"], &[], &[], &[]);

        let err = status(&section, &base).unwrap_err();
        assert!(matches!(*err, Error::BaseNotFound { .. }));
    }

    #[test]
    fn test_malformed_json_aborts() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d-1");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("instruction.json"), "{ not json").unwrap();

        let section = section(&["d-1"], &[], &[], &[]);
        let err = status(&section, temp.path()).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
