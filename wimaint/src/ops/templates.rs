//! Templates operation - write the CSV input templates.

use std::path::Path;

use eyre::Result;
use tracing::debug;

use crate::{reports::TemplatesReport, templates};

/// Options for the templates operation.
pub struct TemplatesOptions<'a> {
    /// Directory the templates are written to (created if missing).
    pub output_dir: &'a Path,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the templates operation.
///
/// Existing files are overwritten.
pub fn templates(opts: TemplatesOptions) -> Result<TemplatesReport> {
    let mut files = Vec::new();

    for file in templates::all() {
        let path = file.path(opts.output_dir);
        if !opts.dry_run {
            file.write(opts.output_dir)?;
            debug!(path = %path.display(), "wrote template");
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files.push(name);
    }

    Ok(TemplatesReport {
        output_dir: opts.output_dir.to_path_buf(),
        dry_run: opts.dry_run,
        files,
    })
}
