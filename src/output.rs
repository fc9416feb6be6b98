//! Output formatting for bundles.
//!
//! Files are read one at a time while writing. A file that cannot be read is
//! left out and returned to the caller; it never aborts the remaining files.

use crate::types::FileEntry;
use crate::{Bundle, BundlecatError};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

const FENCE: &str = "```";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `path:` header followed by the content in a code fence.
    #[default]
    Fenced,
    Json,
}

/// Writes the bundle in `format`, returning per-file read failures.
pub fn write_bundle<W: Write>(
    bundle: &Bundle,
    format: OutputFormat,
    out: &mut W,
    pretty: bool,
) -> Result<Vec<BundlecatError>, BundlecatError> {
    match format {
        OutputFormat::Fenced => write_fenced(bundle, out),
        OutputFormat::Json => write_json(bundle, out, pretty),
    }
}

/// Writes every readable file as a fenced block.
///
/// Each block is a `relative/path:` header line, an opening fence, the content
/// and a closing fence. Blocks are separated by one blank line, with none after
/// the last block.
pub fn write_fenced<W: Write>(
    bundle: &Bundle,
    out: &mut W,
) -> Result<Vec<BundlecatError>, BundlecatError> {
    let mut failures = Vec::new();
    let mut first = true;
    for path in &bundle.files {
        let content = match read_text(bundle, path) {
            Ok(content) => content,
            Err(e) => {
                failures.push(e);
                continue;
            }
        };
        if !first {
            out.write_all(b"\n").map_err(BundlecatError::Output)?;
        }
        first = false;
        let mut block = String::with_capacity(content.len() + 64);
        block.push_str(&format!(
            "{}:\n{FENCE}\n",
            display_path(&bundle.root, path).display()
        ));
        block.push_str(&content);
        if !content.is_empty() && !content.ends_with('\n') {
            block.push('\n');
        }
        block.push_str(FENCE);
        block.push('\n');
        out.write_all(block.as_bytes())
            .map_err(BundlecatError::Output)?;
    }
    out.flush().map_err(BundlecatError::Output)?;
    Ok(failures)
}

/// Reads every file into a [`FileEntry`], keeping the failures apart.
pub fn collect_entries(bundle: &Bundle) -> (Vec<FileEntry>, Vec<BundlecatError>) {
    let mut entries = Vec::with_capacity(bundle.files.len());
    let mut failures = Vec::new();
    for path in &bundle.files {
        match read_text(bundle, path) {
            Ok(content) => entries.push(FileEntry {
                path: display_path(&bundle.root, path),
                content,
            }),
            Err(e) => failures.push(e),
        }
    }
    (entries, failures)
}

/// Writes the bundle as a JSON array of `{ "path", "content" }` objects.
pub fn write_json<W: Write>(
    bundle: &Bundle,
    out: &mut W,
    pretty: bool,
) -> Result<Vec<BundlecatError>, BundlecatError> {
    let (entries, failures) = collect_entries(bundle);
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
    } else {
        serde_json::to_writer(&mut *out, &entries)?;
    }
    out.write_all(b"\n").map_err(BundlecatError::Output)?;
    out.flush().map_err(BundlecatError::Output)?;
    Ok(failures)
}

fn read_text(bundle: &Bundle, path: &Path) -> Result<String, BundlecatError> {
    let bytes = fs::read(bundle.locate(path)).map_err(|e| BundlecatError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Path of `path` relative to `root`, computed lexically.
///
/// `root` should be absolute. Relative `path`s are taken from `root`; paths
/// outside it get leading `..` components.
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    let target = normalize(&root.join(path));
    let base = normalize(root);
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();
    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
