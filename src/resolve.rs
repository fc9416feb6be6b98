//! Expansion of specifiers (paths, globs, directories) into a file list.

use crate::error::ResolveIssue;
use globset::GlobBuilder;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// How a single specifier was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// An existing directory, expanded to the regular files beneath it.
    Directory(Vec<PathBuf>),
    /// A glob pattern with at least one matching file.
    GlobMatches(Vec<PathBuf>),
    /// An existing path taken literally.
    LiteralPath(PathBuf),
    Unresolved,
}

impl Resolved {
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Resolved::Directory(paths) | Resolved::GlobMatches(paths) => paths,
            Resolved::LiteralPath(path) => vec![path],
            Resolved::Unresolved => Vec::new(),
        }
    }
}

/// Outcome of resolving a whole specifier list.
#[derive(Debug)]
pub struct Resolution {
    /// Absolute directory that relative specifiers were resolved against.
    pub root: PathBuf,
    /// Distinct paths in order of first occurrence, spelled as expanded.
    pub files: Vec<PathBuf>,
    pub issues: Vec<ResolveIssue>,
}

/// Resolves specifiers against a root directory.
///
/// Produced paths keep the spelling of the specifier they came from: `sub/`
/// yields `sub/b.txt`, an absolute pattern yields absolute paths.
pub struct Resolver<'a> {
    root: &'a Path,
    recursive: bool,
    issues: Vec<ResolveIssue>,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Path, recursive: bool) -> Self {
        Self {
            root,
            recursive,
            issues: Vec::new(),
        }
    }

    /// Issues collected so far.
    pub fn issues(&self) -> &[ResolveIssue] {
        &self.issues
    }

    pub fn resolve_all<S: AsRef<str>>(mut self, specifiers: &[S]) -> Resolution {
        let mut files = Vec::new();
        for specifier in specifiers {
            files.extend(self.resolve(specifier.as_ref()).into_paths());
        }
        Resolution {
            root: self.root.to_path_buf(),
            files: dedup_paths(files),
            issues: self.issues,
        }
    }

    /// Interprets one specifier: directory first, then glob, then literal path.
    pub fn resolve(&mut self, specifier: &str) -> Resolved {
        if specifier.is_empty() {
            self.not_found(specifier);
            return Resolved::Unresolved;
        }
        let path = Path::new(specifier);
        let located = self.root.join(path);
        if located.is_dir() {
            return Resolved::Directory(self.walk_directory(path));
        }
        match self.expand_glob(specifier) {
            Ok(matches) if !matches.is_empty() => return Resolved::GlobMatches(matches),
            Ok(_) => {}
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Invalid glob '{}', trying literal path: {}", specifier, _e);
            }
        }
        if located.exists() {
            Resolved::LiteralPath(path.to_path_buf())
        } else {
            self.not_found(specifier);
            Resolved::Unresolved
        }
    }

    fn not_found(&mut self, specifier: &str) {
        #[cfg(feature = "logging")]
        tracing::warn!("No match for specifier '{}'", specifier);
        self.issues.push(ResolveIssue::NotFound {
            specifier: specifier.to_string(),
        });
    }

    fn walk_directory(&mut self, dir: &Path) -> Vec<PathBuf> {
        let base = self.root.join(dir);
        let mut builder = walk_builder(&base);
        if !self.recursive {
            builder.max_depth(Some(1));
        }
        let mut files = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    if let Ok(relative) = entry.path().strip_prefix(&base) {
                        files.push(dir.join(relative));
                    }
                }
                Err(e) => self.walk_failed(&base, dir, &e),
            }
        }
        files
    }

    /// Matches `pattern` against regular files under the root.
    ///
    /// Traversal starts at the pattern's literal directory prefix and is bounded
    /// by its component count unless the pattern contains `**`.
    fn expand_glob(&mut self, pattern: &str) -> Result<Vec<PathBuf>, globset::Error> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()?
            .compile_matcher();
        let components: Vec<&str> = pattern.split('/').collect();
        let literal_len = components
            .iter()
            .take_while(|c| !c.contains(GLOB_META))
            .count();
        if literal_len == components.len() {
            let candidate = self.root.join(pattern);
            return Ok(if candidate.is_file() {
                vec![PathBuf::from(pattern)]
            } else {
                Vec::new()
            });
        }
        let prefix = PathBuf::from(components[..literal_len].join("/"));
        let base = self.root.join(&prefix);
        if !base.is_dir() {
            return Ok(Vec::new());
        }
        let mut builder = walk_builder(&base);
        if !pattern.contains("**") {
            builder.max_depth(Some(components.len() - literal_len));
        }
        let mut matches = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    self.walk_failed(&base, &prefix, &e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&base) else {
                continue;
            };
            let candidate = prefix.join(relative);
            if matcher.is_match(&candidate) {
                matches.push(candidate);
            }
        }
        Ok(matches)
    }

    /// Records a traversal error, naming the failing directory the way the
    /// specifier spells it (`spelled` is how `base` was written).
    fn walk_failed(&mut self, base: &Path, spelled: &Path, e: &ignore::Error) {
        #[cfg(feature = "logging")]
        tracing::warn!("Skipping unreadable directory: {}", e);
        let path = failed_path(e)
            .and_then(|p| p.strip_prefix(base).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .map_or_else(|| spelled.to_path_buf(), |relative| spelled.join(relative));
        self.issues.push(ResolveIssue::UnreadableDirectory {
            path,
            message: e.to_string(),
        });
    }
}

fn failed_path(e: &ignore::Error) -> Option<&Path> {
    match e {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            failed_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(failed_path),
        _ => None,
    }
}

fn walk_builder(base: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(base);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder
}

/// Drops repeated paths, comparing the exact OS string.
fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.as_os_str().to_os_string()))
        .collect()
}
