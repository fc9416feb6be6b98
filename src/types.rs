use crate::error::ResolveIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single emitted file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// The path relative to the bundle root.
    pub path: PathBuf,
    /// The file content, decoded lossily as UTF-8.
    pub content: String,
}

/// The files selected for output.
#[derive(Debug)]
pub struct Bundle {
    /// Absolute directory that paths in `files` are relative to.
    pub root: PathBuf,
    /// Selected files, in resolution order and spelled as expanded.
    pub files: Vec<PathBuf>,
    /// How many candidates were dropped as binary.
    pub skipped_binary: usize,
    /// Problems met while resolving specifiers.
    pub issues: Vec<ResolveIssue>,
}

impl Bundle {
    /// Location of `path` on disk.
    pub fn locate(&self, path: &std::path::Path) -> PathBuf {
        self.root.join(path)
    }
}
