//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current key
/// path through the manifest, so errors can name the list they came from.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "wimaint.toml");
/// ctx.push("status.catalog").validate_id("drawing-0D127100014")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Key path segments (e.g., ["status.catalog"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a key segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Create a validation error pointing at `key = ...` if it can be found.
    pub fn error_at_key(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        self.source
            .validation_error(message, find_key_span(self.source.src(), key))
    }

    /// Validate that a record identifier names a single folder.
    pub fn validate_id(&self, id: &str) -> Result<()> {
        if let Some(reason) = validate_record_id(id) {
            let list = if self.path.is_empty() {
                "manifest".to_string()
            } else {
                format!("'{}'", self.path_string())
            };
            return Err(self.source.invalid_identifier_error(
                id,
                list,
                reason,
                find_string_span(self.source.src(), id),
            ));
        }
        Ok(())
    }
}

/// Find the span of a string literal's content in the TOML source
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Find the span of a `key =` assignment in the TOML source
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let assigns = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigns {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}

/// Validate that an identifier can be joined onto the base path as one folder.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_record_id(id: &str) -> Option<&'static str> {
    if id.is_empty() {
        return Some("identifier cannot be empty");
    }

    if id.trim() != id {
        return Some("identifier cannot start or end with whitespace");
    }

    if id == "." || id == ".." {
        return Some("identifier cannot be a relative path component");
    }

    if id.contains(['/', '\\']) {
        return Some("identifier cannot contain path separators");
    }

    if id.chars().any(char::is_control) {
        return Some("identifier cannot contain control characters");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_record_id("drawing-0D127100014").is_none());
        assert!(validate_record_id("drawing-flange_sus_sanei_20250722").is_none());
        assert!(validate_record_id("drawing-1G-162-TL-05").is_none());
    }

    #[test]
    fn test_invalid_ids() {
        assert!(validate_record_id("").is_some());
        assert!(validate_record_id(" drawing-a").is_some());
        assert!(validate_record_id("..").is_some());
        assert!(validate_record_id("a/b").is_some());
        assert!(validate_record_id("a\\b").is_some());
        assert!(validate_record_id("a\tb").is_some());
    }

    #[test]
    fn test_find_string_span() {
        let src = "catalog = [\"drawing-a\", 'drawing-b']";
        let span = find_string_span(src, "drawing-b").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "drawing-b");
        assert!(find_string_span(src, "drawing-c").is_none());
    }

    #[test]
    fn test_find_key_span() {
        let src = "[status]\ncatalog = []\n  base_path = \"\"\n";
        let span = find_key_span(src, "base_path").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "base_path");
        assert!(find_key_span(src, "cat").is_none());
    }

    #[test]
    fn test_validate_id_error_names_list() {
        let src = "[clean]\ndrawings = [\"a/b\"]\n";
        let ctx = ParseContext::new(src, "wimaint.toml");
        let err = ctx.push("clean.drawings").validate_id("a/b").unwrap_err();
        match *err {
            Error::InvalidIdentifier { list, span, .. } => {
                assert_eq!(list, "'clean.drawings'");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
