use crate::classify::classify_file;
use crate::error::BundlecatError;
use crate::options::{BinaryDetection, BundleOptions};
use crate::resolve::{Resolution, Resolver};
use crate::types::Bundle;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn absolute_root(root: &Path) -> Result<PathBuf, BundlecatError> {
    if root.is_absolute() {
        return Ok(root.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| BundlecatError::io(root, e))?;
    Ok(cwd.join(root))
}

/// Expands the configured specifiers into a deduplicated file list.
///
/// Per-specifier problems end up in [`Resolution::issues`]; an empty result
/// is not an error at this stage.
pub fn resolve(options: &BundleOptions) -> Result<Resolution, BundlecatError> {
    if options.specifiers.is_empty() {
        return Err(BundlecatError::NoSpecifiers);
    }
    let root = absolute_root(&options.root)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Resolving {} specifier(s) against {}",
        options.specifiers.len(),
        root.display()
    );
    let resolution = Resolver::new(&root, options.recursive).resolve_all(&options.specifiers);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Resolved {} file(s) with {} issue(s)",
        resolution.files.len(),
        resolution.issues.len()
    );
    Ok(resolution)
}

/// Drops binary candidates from a resolution.
///
/// # Errors
///
/// [`BundlecatError::NoMatchingFiles`] when the resolution is empty and
/// [`BundlecatError::NoTextFiles`] when every candidate was binary.
pub fn select(resolution: Resolution, options: &BundleOptions) -> Result<Bundle, BundlecatError> {
    let Resolution {
        root,
        files,
        issues,
    } = resolution;
    if files.is_empty() {
        return Err(BundlecatError::NoMatchingFiles);
    }
    let candidates = files.len();
    let files = if options.binary_detection == BinaryDetection::None {
        files
    } else {
        retain_text_files(&root, files, options.binary_detection)
    };
    let skipped_binary = candidates - files.len();
    if files.is_empty() {
        return Err(BundlecatError::NoTextFiles {
            skipped: skipped_binary,
        });
    }
    Ok(Bundle {
        root,
        files,
        skipped_binary,
        issues,
    })
}

/// Resolves and filters in one go.
pub fn bundle(options: BundleOptions) -> Result<Bundle, BundlecatError> {
    let resolution = resolve(&options)?;
    select(resolution, &options)
}

#[cfg(not(feature = "parallel"))]
fn retain_text_files(
    root: &Path,
    files: Vec<PathBuf>,
    detection: BinaryDetection,
) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|path| !classify_file(&root.join(path), detection).is_binary())
        .collect()
}

#[cfg(feature = "parallel")]
fn retain_text_files(
    root: &Path,
    files: Vec<PathBuf>,
    detection: BinaryDetection,
) -> Vec<PathBuf> {
    let verdicts: Vec<bool> = files
        .par_iter()
        .map(|path| classify_file(&root.join(path), detection).is_binary())
        .collect();
    files
        .into_iter()
        .zip(verdicts)
        .filter_map(|(path, is_binary)| (!is_binary).then_some(path))
        .collect()
}
