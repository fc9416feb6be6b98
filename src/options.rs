use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Null byte in the first 8 KiB, or fewer than 80% printable bytes in the first 1 KiB.
    #[default]
    Heuristic,
    /// Encoding-aware detection through `content_inspector`.
    Accurate,
    /// Keep every file.
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleOptions {
    pub specifiers: Vec<String>,
    pub root: PathBuf,
    pub recursive: bool,
    pub binary_detection: BinaryDetection,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            specifiers: Vec::new(),
            root: PathBuf::from("."),
            recursive: true,
            binary_detection: BinaryDetection::Heuristic,
        }
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new<I, S>(specifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: BundleOptions {
                specifiers: specifiers.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn recursive(mut self, yes: bool) -> Self {
        self.options.recursive = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    /// Turns binary filtering off when `yes`; leaves the current detection otherwise.
    pub fn include_binary(mut self, yes: bool) -> Self {
        if yes {
            self.options.binary_detection = BinaryDetection::None;
        }
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
