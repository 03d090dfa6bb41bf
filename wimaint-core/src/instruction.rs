//! Schema for a record's `instruction.json`.
//!
//! Only the parts the maintenance tools read are modelled. Every list is an
//! `Option<Vec<_>>` so that a missing key and an empty list stay distinct.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::{Error, MachineSteps, MachineType, Result, StepSource};

/// File name of the instruction document inside a record folder.
pub const INSTRUCTION_FILE: &str = "instruction.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionDocument {
    /// Current format: steps grouped by machine type.
    pub work_steps_by_machine: Option<WorkStepsByMachine>,
    /// Old flat step list.
    pub work_steps: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkStepsByMachine {
    pub machining: Option<Vec<Value>>,
    pub turning: Option<Vec<Value>>,
    pub yokonaka: Option<Vec<Value>>,
    pub radial: Option<Vec<Value>>,
    pub other: Option<Vec<Value>>,
}

impl WorkStepsByMachine {
    /// Steps for one machine type, `None` when the key is missing or null.
    pub fn steps(&self, machine: MachineType) -> Option<&[Value]> {
        let steps = match machine {
            MachineType::Machining => &self.machining,
            MachineType::Turning => &self.turning,
            MachineType::Yokonaka => &self.yokonaka,
            MachineType::Radial => &self.radial,
            MachineType::Other => &self.other,
        };
        steps.as_deref()
    }
}

impl InstructionDocument {
    /// Parse a document, using `path` for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, path))
    }

    /// Read and parse the document at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Count steps per machine type, in `MachineType::ALL` order.
    ///
    /// With `include_legacy`, a non-empty `workSteps` array is added under
    /// [`StepSource::Legacy`].
    pub fn machine_steps(&self, include_legacy: bool) -> MachineSteps {
        let mut counts = MachineSteps::new();

        if let Some(by_machine) = &self.work_steps_by_machine {
            for machine in MachineType::ALL {
                if let Some(steps) = by_machine.steps(machine) {
                    counts.insert(StepSource::Machine(machine), steps.len());
                }
            }
        }

        if include_legacy {
            if let Some(steps) = &self.work_steps {
                counts.insert(StepSource::Legacy, steps.len());
            }
        }

        counts
    }
}
