//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod output;
mod status;
mod targets;
mod templates;

pub use check::CheckReport;
pub use clean::{CleanEntry, CleanFailure, CleanOutcome, CleanReport, KeptFolder, ScannedRecord};
pub use output::{Report, TerminalOutput};
pub use status::{
    Category, Overlap, Reconciliation, RecordStatus, StatusReport, UnknownRecord,
};
pub use targets::{FolderFiles, TargetEntry, TargetsReport};
pub use templates::TemplatesReport;
