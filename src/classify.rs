//! Text/binary classification of candidate files.
//!
//! The verdict is a pure function of a file's leading bytes, so every file can
//! be classified independently and in any order.

use crate::options::BinaryDetection;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes sampled from each file.
pub const SAMPLE_SIZE: usize = 8192;
/// Number of leading bytes used for the printable ratio.
pub const PRINTABLE_WINDOW: usize = 1024;
/// Samples below this printable ratio are binary.
pub const MIN_PRINTABLE_RATIO: f64 = 0.8;

/// Verdict for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Text,
    Binary,
}

impl Classification {
    pub fn is_binary(self) -> bool {
        matches!(self, Classification::Binary)
    }
}

/// Classifies a byte sample with the null-byte / printable-ratio heuristic.
///
/// Only the first [`SAMPLE_SIZE`] bytes are looked at. An empty sample is text.
///
/// ```
/// use bundlecat::{classify_bytes, Classification};
///
/// assert_eq!(classify_bytes(b"fn main() {}\n"), Classification::Text);
/// assert_eq!(classify_bytes(b"PK\x03\x04\x00"), Classification::Binary);
/// ```
pub fn classify_bytes(bytes: &[u8]) -> Classification {
    if bytes.is_empty() {
        return Classification::Text;
    }
    let sample = &bytes[..bytes.len().min(SAMPLE_SIZE)];
    if sample.contains(&0) {
        return Classification::Binary;
    }
    let window = &sample[..sample.len().min(PRINTABLE_WINDOW)];
    let printable = window.iter().filter(|&&b| is_printable(b)).count();
    let ratio = printable as f64 / window.len() as f64;
    if ratio < MIN_PRINTABLE_RATIO {
        Classification::Binary
    } else {
        Classification::Text
    }
}

fn is_printable(byte: u8) -> bool {
    matches!(byte, 32..=126 | b'\t' | b'\n' | b'\r')
}

/// Classifies a byte sample with the given strategy.
pub fn classify_with(bytes: &[u8], detection: BinaryDetection) -> Classification {
    match detection {
        BinaryDetection::Heuristic => classify_bytes(bytes),
        BinaryDetection::Accurate => {
            if content_inspector::inspect(bytes).is_binary() {
                Classification::Binary
            } else {
                Classification::Text
            }
        }
        BinaryDetection::None => Classification::Text,
    }
}

/// Reads at most [`SAMPLE_SIZE`] bytes from the start of `path`.
pub fn read_sample(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    file.take(SAMPLE_SIZE as u64).read_to_end(&mut sample)?;
    Ok(sample)
}

/// Classifies the file at `path`.
///
/// A file that cannot be sampled is reported as text; the emitter will hit the
/// same error when it reads the file and report it there.
pub fn classify_file(path: &Path, detection: BinaryDetection) -> Classification {
    if detection == BinaryDetection::None {
        return Classification::Text;
    }
    match read_sample(path) {
        Ok(sample) => {
            let verdict = classify_with(&sample, detection);
            #[cfg(feature = "logging")]
            if verdict.is_binary() {
                tracing::debug!("Binary file detected: {}", path.display());
            }
            verdict
        }
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot sample {}, treating as text: {}", path.display(), _e);
            Classification::Text
        }
    }
}
