//! Core types for work-instruction record maintenance.
//!
//! Models a record folder (`<base>/<id>/instruction.json` plus the
//! `images`, `videos`, `pdfs` and `programs` media folders) and provides the
//! scanning primitives the maintenance operations are built on.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod csv;
mod error;
mod file;
mod filter;
mod instruction;
mod lookup;
mod machine;
mod media;
mod record;

pub use csv::{CsvTable, UTF8_BOM, escape_field};
pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use filter::{OVERVIEW, STEP_PREFIX, StepFolderFilter};
pub use instruction::{INSTRUCTION_FILE, InstructionDocument, WorkStepsByMachine};
pub use lookup::Lookup;
pub use machine::{MachineSteps, MachineType, StepSource};
pub use media::MediaKind;
pub use record::{Record, StepFolder, ensure_base};
