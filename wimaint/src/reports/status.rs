//! Status command report data structures.

use std::{fmt, path::PathBuf};

use wimaint_core::{Lookup, MachineSteps};

use super::output::{Output, Report};

/// Migration category of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Phase1Deleted,
    Migrated,
    ToMigrate,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Phase1Deleted => "phase1_deleted",
            Category::Migrated => "migrated",
            Category::ToMigrate => "to_migrate",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier listed under more than one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub id: String,
    pub categories: Vec<Category>,
}

/// Outcome of partitioning the catalog into categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Number of catalog entries.
    pub catalog_size: usize,
    /// Length of the `phase1_deleted` list.
    pub phase1_deleted: usize,
    /// Length of the `migrated` list.
    pub migrated: usize,
    /// Length of the `to_migrate` list.
    pub to_migrate: usize,
    /// Catalog entries in no list, in catalog order.
    pub unknown: Vec<String>,
    /// Identifiers listed in more than one category.
    pub overlaps: Vec<Overlap>,
    /// Category members that are not in the catalog.
    pub outside_catalog: Vec<(String, Category)>,
    /// Identifiers that appear more than once in the catalog.
    pub catalog_duplicates: Vec<String>,
}

impl Reconciliation {
    /// Category sizes, in reporting order.
    pub fn counts(&self) -> [(Category, usize); 4] {
        [
            (Category::Phase1Deleted, self.phase1_deleted),
            (Category::Migrated, self.migrated),
            (Category::ToMigrate, self.to_migrate),
            (Category::Unknown, self.unknown.len()),
        ]
    }

    /// Sum of the four category sizes.
    pub fn sum(&self) -> usize {
        self.counts().iter().map(|(_, n)| n).sum()
    }

    /// Whether the categories add up to the catalog exactly.
    pub fn is_consistent(&self) -> bool {
        self.sum() == self.catalog_size
    }
}

/// What is on disk for an identifier nobody categorised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    FolderMissing,
    Inspected {
        /// Machine-type step counts from `instruction.json`.
        steps: Lookup<MachineSteps>,
        /// Non-empty legacy step folders.
        legacy_folders: usize,
    },
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (steps, legacy_folders) = match self {
            RecordStatus::FolderMissing => return f.write_str("folder missing"),
            RecordStatus::Inspected {
                steps,
                legacy_folders,
            } => (steps, *legacy_folders),
        };

        match steps {
            Lookup::Found(steps) => {
                for (machine, count) in steps.machines() {
                    write!(f, "{}:{} ", machine, count)?;
                }
            }
            Lookup::Empty => f.write_str("no work steps")?,
            Lookup::Absent => f.write_str("no instruction.json")?,
        }

        if legacy_folders > 0 {
            write!(f, " | legacy folders: {}", legacy_folders)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UnknownRecord {
    pub id: String,
    pub status: RecordStatus,
}

/// Report data from the migration status check.
#[derive(Debug)]
pub struct StatusReport {
    /// Record tree that was inspected.
    pub base_path: PathBuf,
    pub reconciliation: Reconciliation,
    /// On-disk status of each unknown identifier.
    pub unknown: Vec<UnknownRecord>,
}

impl Report for StatusReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Migration Status Check");
        out.newline();

        let rec = &self.reconciliation;
        out.key_value("Base path", &self.base_path.display().to_string());
        out.key_value("Total", &rec.catalog_size.to_string());
        for (category, count) in rec.counts() {
            out.key_value_indented(category.as_str(), &count.to_string());
        }

        if !self.unknown.is_empty() {
            out.newline();
            out.section("Unknown records");
            for record in &self.unknown {
                out.list_item(&format!("{}: {}", record.id, record.status));
            }
        }

        out.newline();
        render_reconciliation(rec, out);
    }
}

/// Render the partition arithmetic and its pass/fail verdict.
pub fn render_reconciliation(rec: &Reconciliation, out: &mut dyn Output) {
    out.section("Reconciliation");
    out.preformatted(&format!(
        "  {} + {} + {} + {} = {}",
        rec.phase1_deleted,
        rec.migrated,
        rec.to_migrate,
        rec.unknown.len(),
        rec.sum()
    ));
    out.key_value_indented("catalog", &rec.catalog_size.to_string());

    if rec.is_consistent() {
        out.preformatted("  ✓ consistent");
    } else {
        out.preformatted("  ✗ MISMATCH");
        out.warning(&format!(
            "category lists account for {} records but the catalog has {}",
            rec.sum(),
            rec.catalog_size
        ));
    }

    for overlap in &rec.overlaps {
        let categories: Vec<&str> = overlap.categories.iter().map(Category::as_str).collect();
        out.warning(&format!(
            "'{}' is listed in {}",
            overlap.id,
            categories.join(" and ")
        ));
    }
    for (id, category) in &rec.outside_catalog {
        out.warning(&format!(
            "'{}' is listed in {} but not in the catalog",
            id, category
        ));
    }
    for id in &rec.catalog_duplicates {
        out.warning(&format!("'{}' appears more than once in the catalog", id));
    }
}
