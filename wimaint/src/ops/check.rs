//! Check operation - manifest validation and category consistency.

use std::path::Path;

use wimaint_manifest::Manifest;

use super::status::reconcile;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest is already parsed and validated; this never reads the
/// record tree beyond checking that the base path exists.
pub fn check(manifest: &Manifest, config_path: &Path, base_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        base_path: base_path.to_path_buf(),
        base_exists: base_path.is_dir(),
        lists: manifest
            .id_lists()
            .into_iter()
            .map(|(key, ids)| (key, ids.len()))
            .collect(),
        reconciliation: reconcile(&manifest.status),
    }
}
