use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum BundlecatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No file specifiers given")]
    NoSpecifiers,
    #[error("No matching files found")]
    NoMatchingFiles,
    #[error("No text files found")]
    NoTextFiles { skipped: usize },
}
impl BundlecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundlecatError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A recoverable problem met while resolving one specifier.
///
/// Issues never stop resolution; the offending specifier or directory simply
/// contributes no files.
#[derive(Debug, Error)]
pub enum ResolveIssue {
    #[error("no file, directory or glob match for '{specifier}'")]
    NotFound { specifier: String },
    #[error("cannot read directory {path}: {message}")]
    UnreadableDirectory { path: PathBuf, message: String },
}
