//! Record folders and their per-step media folders.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    Error, INSTRUCTION_FILE, InstructionDocument, Lookup, MachineSteps, MediaKind, Result,
    StepFolderFilter,
};

/// Fail with [`Error::BaseNotFound`] unless `base` is an existing directory.
pub fn ensure_base(base: &Path) -> Result<()> {
    if base.is_dir() {
        Ok(())
    } else {
        Err(Box::new(Error::BaseNotFound {
            path: base.to_path_buf(),
        }))
    }
}

/// A record folder that exists on disk.
#[derive(Debug, Clone)]
pub struct Record {
    id: String,
    path: PathBuf,
}

impl Record {
    /// Locate a record under `base`. Returns `None` when its folder is missing.
    pub fn locate(base: &Path, id: &str) -> Option<Self> {
        let path = base.join(id);
        if path.is_dir() {
            Some(Self {
                id: id.to_string(),
                path,
            })
        } else {
            debug!(record = id, "record folder missing");
            None
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn instruction_path(&self) -> PathBuf {
        self.path.join(INSTRUCTION_FILE)
    }

    /// Load `instruction.json`, or `None` if the record has none.
    pub fn instruction(&self) -> Result<Option<InstructionDocument>> {
        let path = self.instruction_path();
        if !path.is_file() {
            debug!(record = %self.id, "no {}", INSTRUCTION_FILE);
            return Ok(None);
        }
        InstructionDocument::from_file(&path).map(Some)
    }

    /// Step counts from `instruction.json`.
    ///
    /// `Absent` when the file is missing, `Empty` when it has no steps.
    pub fn machine_steps(&self, include_legacy: bool) -> Result<Lookup<MachineSteps>> {
        Ok(match self.instruction()? {
            None => Lookup::Absent,
            Some(doc) => {
                let steps = doc.machine_steps(include_legacy);
                if steps.is_empty() {
                    Lookup::Empty
                } else {
                    Lookup::Found(steps)
                }
            }
        })
    }

    /// Step folders under all media kinds that pass `filter`.
    ///
    /// Ordered by media kind, then by folder name.
    pub fn step_folders(&self, filter: &StepFolderFilter) -> Result<Vec<StepFolder>> {
        let mut folders = Vec::new();
        for kind in MediaKind::ALL {
            folders.extend(self.media_step_folders(kind, filter)?);
        }

        debug!(record = %self.id, count = folders.len(), "scanned step folders");
        Ok(folders)
    }

    /// Step folders under a single media kind that pass `filter`, by name.
    ///
    /// A missing media folder yields no step folders.
    pub fn media_step_folders(
        &self,
        kind: MediaKind,
        filter: &StepFolderFilter,
    ) -> Result<Vec<StepFolder>> {
        let media_dir = self.path.join(kind.dir_name());
        if !media_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&media_dir).map_err(|e| Error::io(&media_dir, e))?;
        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&media_dir, e))?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !filter.matches(&name) || !entry.path().is_dir() {
                continue;
            }
            found.push(StepFolder {
                kind,
                path: entry.path(),
                name,
            });
        }
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }
}

/// A `step_*` folder under one of a record's media folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFolder {
    pub kind: MediaKind,
    pub name: String,
    pub path: PathBuf,
}

impl StepFolder {
    /// `<kind>/<name>`, e.g. `images/step_3`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }

    /// Number of direct entries (files and subfolders).
    pub fn entry_count(&self) -> io::Result<usize> {
        let mut count = 0;
        for entry in std::fs::read_dir(&self.path)? {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    /// Like [`entry_count`](Self::entry_count), mapped into the crate error.
    pub fn count_entries(&self) -> Result<usize> {
        self.entry_count().map_err(|e| Error::io(&self.path, e))
    }
}
