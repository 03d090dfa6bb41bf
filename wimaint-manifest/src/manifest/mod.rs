//! Manifest types and parsing for wimaint.toml files.

mod file;
mod parse;
mod sections;
mod validate;

use std::path::PathBuf;

pub use file::WimaintToml;
use serde::Deserialize;
pub use sections::{CleanSection, StatusSection, TargetsSection, TemplatesSection};
pub use validate::ParseContext;

/// Default location of the record tree, relative to the working directory.
pub const DEFAULT_BASE_PATH: &str = "public/data/work-instructions";

/// Root manifest for wimaint.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory holding one folder per record
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    #[serde(default)]
    pub status: StatusSection,

    #[serde(default)]
    pub targets: TargetsSection,

    #[serde(default)]
    pub clean: CleanSection,

    #[serde(default)]
    pub templates: TemplatesSection,
}

fn default_base_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_PATH)
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            status: StatusSection::default(),
            targets: TargetsSection::default(),
            clean: CleanSection::default(),
            templates: TemplatesSection::default(),
        }
    }
}

impl Manifest {
    /// All identifier lists, with their dotted manifest keys.
    pub fn id_lists(&self) -> [(&'static str, &[String]); 6] {
        [
            ("status.catalog", self.status.catalog.as_slice()),
            ("status.phase1_deleted", self.status.phase1_deleted.as_slice()),
            ("status.migrated", self.status.migrated.as_slice()),
            ("status.to_migrate", self.status.to_migrate.as_slice()),
            ("targets.candidates", self.targets.candidates.as_slice()),
            ("clean.drawings", self.clean.drawings.as_slice()),
        ]
    }

    /// All step-folder exclusion lists that were set explicitly.
    pub fn exclude_lists(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("status.exclude", self.status.exclude.as_deref()),
            ("targets.exclude", self.targets.exclude.as_deref()),
            ("clean.exclude", self.clean.exclude.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, list)| list.map(|l| (key, l)))
    }
}
