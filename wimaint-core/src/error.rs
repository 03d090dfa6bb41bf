use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for record operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("base path '{path}' does not exist")]
    #[diagnostic(
        code(wimaint::base_not_found),
        help("run from the project root, or set base_path in wimaint.toml / pass --base-path")
    )]
    BaseNotFound { path: PathBuf },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(wimaint::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(
        code(wimaint::parse_error),
        help("fix the JSON document; the run stops at the first malformed record")
    )]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a serde_json error with source context.
    ///
    /// serde_json reports 1-based line/column positions, which are converted
    /// to a byte offset so the diagnostic can point into the document.
    pub fn parse(source: serde_json::Error, src: &str, path: &Path) -> Box<Self> {
        let span = byte_offset(src, source.line(), source.column()).map(|offset| {
            let len = usize::from(offset < src.len());
            SourceSpan::from((offset, len))
        });
        Box::new(Error::Parse {
            path: path.to_path_buf(),
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            span,
            message: source.to_string(),
            source,
        })
    }
}

fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
