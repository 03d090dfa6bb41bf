// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod starter;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CleanSection, DEFAULT_BASE_PATH, Manifest, ParseContext, StatusSection, TargetsSection,
    TemplatesSection, WimaintToml,
};
pub use starter::starter_manifest;
