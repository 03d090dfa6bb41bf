use std::path::PathBuf;

use serde::Deserialize;
use wimaint_core::StepFolderFilter;

/// `[status]`: the catalog and its category lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusSection {
    /// Every identifier whose migration status is tracked.
    #[serde(default)]
    pub catalog: Vec<String>,

    /// Removed during the first cleanup phase.
    #[serde(default)]
    pub phase1_deleted: Vec<String>,

    /// Already moved to the current format.
    #[serde(default)]
    pub migrated: Vec<String>,

    /// Scheduled for migration.
    #[serde(default)]
    pub to_migrate: Vec<String>,

    /// Extra step-folder name fragments to ignore (`overview` always is)
    pub exclude: Option<Vec<String>>,
}

impl StatusSection {
    pub fn filter(&self) -> StepFolderFilter {
        match &self.exclude {
            Some(patterns) => StepFolderFilter::new(patterns.iter().cloned()),
            None => StepFolderFilter::overview_only(),
        }
    }
}

/// `[targets]`: candidates for migration analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsSection {
    #[serde(default)]
    pub candidates: Vec<String>,

    pub exclude: Option<Vec<String>>,
}

impl TargetsSection {
    pub fn filter(&self) -> StepFolderFilter {
        match &self.exclude {
            Some(patterns) => StepFolderFilter::new(patterns.iter().cloned()),
            None => StepFolderFilter::migration_targets(),
        }
    }
}

/// `[clean]`: records whose empty step folders may be removed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanSection {
    #[serde(default)]
    pub drawings: Vec<String>,

    pub exclude: Option<Vec<String>>,
}

impl CleanSection {
    pub fn filter(&self) -> StepFolderFilter {
        match &self.exclude {
            Some(patterns) => StepFolderFilter::new(patterns.iter().cloned()),
            None => StepFolderFilter::overview_only(),
        }
    }
}

/// `[templates]`: where CSV templates are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesSection {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for TemplatesSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("doc/csv_templates")
}
