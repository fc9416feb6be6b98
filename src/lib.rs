//! # Bundlecat
//!
//! `bundlecat` concatenates files into a single text document. Inputs are
//! specifiers: literal paths, glob patterns or directories. Each specifier is
//! expanded, the combined list is deduplicated, binary files are dropped, and
//! every remaining file is written under a `path:` header inside a code fence.
//!
//! A specifier is interpreted in this order:
//!
//! 1. an existing directory is walked recursively;
//! 2. otherwise it is expanded as a glob against the root directory;
//! 3. when the glob is invalid or matches nothing, it is used as a literal path
//!    if that path exists.
//!
//! # Features
//!
//! - `parallel`: Classifies files in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use bundlecat::{BinaryDetection, BundleBuilder, bundle, output};
//!
//! let options = BundleBuilder::new(["Cargo.toml", "src", "tests/*.rs"])
//!     .binary_detection(BinaryDetection::Heuristic)
//!     .build();
//!
//! let bundle = bundle(options).expect("Failed to resolve files");
//! let mut stdout = std::io::stdout().lock();
//! for failure in output::write_fenced(&bundle, &mut stdout).expect("Failed to write") {
//!     eprintln!("Error: {}", failure);
//! }
//! ```

mod classify;
mod engine;
mod error;
mod options;
pub mod output;
mod resolve;
mod types;

pub use classify::{
    Classification, MIN_PRINTABLE_RATIO, PRINTABLE_WINDOW, SAMPLE_SIZE, classify_bytes,
    classify_file, classify_with, read_sample,
};
pub use engine::{bundle, resolve, select};
pub use error::{BundlecatError, ResolveIssue};
pub use options::{BinaryDetection, BundleBuilder, BundleOptions};
pub use resolve::{Resolution, Resolved, Resolver};
pub use types::{Bundle, FileEntry};
