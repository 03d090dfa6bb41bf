//! Starter manifest written by `wimaint init`.
//!
//! Seeded with the drawing lists used for the phase 1/phase 2 legacy folder
//! migration so a fresh checkout reproduces those reports.

use std::fmt::Write;

use crate::manifest::DEFAULT_BASE_PATH;

/// Drawings that had legacy per-step media folders when tracking started.
pub const CATALOG: &[&str] = &[
    "drawing-02760810650",
    "drawing-04297711725",
    "drawing-05389730954",
    "drawing-06190300668",
    "drawing-06200301496",
    "drawing-0974122270",
    "drawing-0A149002911",
    "drawing-0A224000531",
    "drawing-0A229001290",
    "drawing-0D127100014",
    "drawing-0E260800172",
    "drawing-0E260800190",
    "drawing-0F030800622",
    "drawing-12750800122",
    "drawing-16800301576",
    "drawing-1G-162-TL-05",
    "drawing-24K025_20252725",
    "drawing-25417362721",
    "drawing-25417362731",
    "drawing-4K300346",
    "drawing-4K470955",
    "drawing-4K524654-1",
    "drawing-4K524654-2",
    "drawing-5427365400",
    "drawing-82096-2-R04",
    "drawing-91260506-2",
    "drawing-A3159-500-00-A1",
    "drawing-DM-05",
    "drawing-flange_sus_sanei_20250722",
    "drawing-GSETJIG-3101",
    "drawing-INNSJ-XXXX",
    "drawing-M-2009211-060",
    "drawing-M-5329619-160",
    "drawing-P103668",
    "drawing-sanei_24K022",
    "drawing-TM2404599-1601-0",
    "drawing-TM2404599-1603-0",
    "drawing-TM2404599-1604-0",
    "drawing-TM2404599-1651-0",
    "drawing-TMT1750-P0003",
];

pub const PHASE1_DELETED: &[&str] = &[
    "drawing-02760810650",
    "drawing-04297711725",
    "drawing-05389730954",
    "drawing-06190300668",
    "drawing-06200301496",
    "drawing-0974122270",
    "drawing-0A149002911",
    "drawing-0A224000531",
    "drawing-0A229001290",
    "drawing-0E260800172",
    "drawing-0E260800190",
    "drawing-25417362731",
    "drawing-5427365400",
    "drawing-A3159-500-00-A1",
    "drawing-GSETJIG-3101",
    "drawing-INNSJ-XXXX",
    "drawing-M-2009211-060",
    "drawing-M-5329619-160",
    "drawing-TM2404599-1601-0",
    "drawing-TM2404599-1603-0",
    "drawing-TM2404599-1604-0",
    "drawing-TM2404599-1651-0",
    "drawing-TMT1750-P0003",
];

pub const MIGRATED: &[&str] = &["drawing-0D127100014", "drawing-flange_sus_sanei_20250722"];

pub const TO_MIGRATE: &[&str] = &[
    "drawing-0F030800622",
    "drawing-12750800122",
    "drawing-16800301576",
    "drawing-1G-162-TL-05",
    "drawing-24K025_20252725",
    "drawing-25417362721",
    "drawing-DM-05",
    "drawing-sanei_24K022",
    "drawing-91260506-2",
];

/// Migration candidates (drawing-0D127100014 is already done).
pub const CANDIDATES: &[&str] = &[
    "drawing-82096-2-R04",
    "drawing-flange_sus_sanei_20250722",
    "drawing-A1-46717-E",
    "drawing-0F030800622",
    "drawing-12750800122",
    "drawing-16800301576",
    "drawing-1G-162-TL-05",
    "drawing-24K025_20252725",
    "drawing-25417362721",
    "drawing-DM-05",
    "drawing-sanei_24K022",
    "drawing-4K300346",
    "drawing-4K470955",
    "drawing-4K524654-1",
    "drawing-4K524654-2",
    "drawing-91260506-2",
    "drawing-P103668",
];

/// Drawings without work steps whose step folders should all be empty.
pub const EMPTY_DRAWINGS: &[&str] = &[
    "drawing-4K300346",
    "drawing-4K470955",
    "drawing-4K524654-1",
    "drawing-4K524654-2",
    "drawing-82096-2-R04",
    "drawing-P103668",
];

/// Render the starter wimaint.toml.
pub fn starter_manifest() -> String {
    let mut out = String::new();
    out.push_str("# Work-instruction maintenance manifest\n");
    out.push_str("# Paths are relative to the directory wimaint runs in.\n\n");
    let _ = writeln!(out, "base_path = \"{}\"", DEFAULT_BASE_PATH);

    out.push_str("\n[status]\n");
    push_list(&mut out, "catalog", CATALOG);
    push_list(&mut out, "phase1_deleted", PHASE1_DELETED);
    push_list(&mut out, "migrated", MIGRATED);
    push_list(&mut out, "to_migrate", TO_MIGRATE);
    out.push_str("# exclude = [\"overview\"]\n");

    out.push_str("\n[targets]\n");
    push_list(&mut out, "candidates", CANDIDATES);
    out.push_str("# exclude = [\"overview\", \"_machining\", \"_turning\"]\n");

    out.push_str("\n[clean]\n");
    push_list(&mut out, "drawings", EMPTY_DRAWINGS);
    out.push_str("# exclude = [\"overview\"]\n");

    out.push_str("\n[templates]\n");
    out.push_str("output_dir = \"doc/csv_templates\"\n");
    out
}

fn push_list(out: &mut String, key: &str, ids: &[&str]) {
    if ids.is_empty() {
        let _ = writeln!(out, "{} = []", key);
        return;
    }
    let _ = writeln!(out, "{} = [", key);
    for id in ids {
        let _ = writeln!(out, "    \"{}\",", id);
    }
    out.push_str("]\n");
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Manifest;

    #[test]
    fn test_starter_manifest_parses() {
        let manifest = Manifest::from_str(&starter_manifest()).unwrap();
        assert_eq!(manifest.status.catalog.len(), 40);
        assert_eq!(manifest.status.phase1_deleted.len(), 23);
        assert_eq!(manifest.status.migrated.len(), 2);
        assert_eq!(manifest.status.to_migrate.len(), 9);
        assert_eq!(manifest.targets.candidates.len(), 17);
        assert_eq!(manifest.clean.drawings.len(), 6);
        assert!(manifest.status.exclude.is_none());
    }

    #[test]
    fn test_starter_categories_are_catalog_members() {
        for list in [PHASE1_DELETED, MIGRATED, TO_MIGRATE] {
            for id in list {
                assert!(CATALOG.contains(id), "{id} missing from catalog");
            }
        }
    }
}
