//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "wimaint.toml")
    }
}

impl Manifest {
    /// Parse a wimaint.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a wimaint.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Overlapping category lists are deliberately not rejected here: the
/// status report surfaces them as a reconciliation mismatch.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.base_path.as_os_str().is_empty() {
        return Err(ctx.error_at_key("base_path cannot be empty", "base_path"));
    }

    if manifest.templates.output_dir.as_os_str().is_empty() {
        return Err(ctx.error_at_key("templates.output_dir cannot be empty", "output_dir"));
    }

    for (key, ids) in manifest.id_lists() {
        let list_ctx = ctx.push(key);
        for id in ids {
            list_ctx.validate_id(id)?;
        }
    }

    for (key, patterns) in manifest.exclude_lists() {
        if patterns.iter().any(|p| p.is_empty()) {
            return Err(ctx.error_at_key(
                format!("{} cannot contain empty patterns", key),
                "exclude",
            ));
        }
    }

    Ok(())
}
