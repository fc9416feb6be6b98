use bundlecat::output::{self, OutputFormat};
use bundlecat::{bundle, BinaryDetection, BundleBuilder, BundlecatError, FileEntry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
fn scenario(root: &Path) {
    fs::write(root.join("a.txt"), "alpha\n").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/b.txt"), "bravo").unwrap();
    fs::write(root.join("sub/c.bin"), b"\x00\x01\x02binary").unwrap();
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    scenario(dir.path());
    let options = BundleBuilder::new(["a.txt", "sub/"])
        .root(dir.path())
        .build();
    let result = bundle(options).unwrap();
    assert_eq!(
        result.files,
        vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]
    );
    assert_eq!(result.skipped_binary, 1);
    assert!(result.issues.is_empty());
    let mut out = Vec::new();
    let failures = output::write_fenced(&result, &mut out).unwrap();
    assert!(failures.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a.txt:\n```\nalpha\n```\n\nsub/b.txt:\n```\nbravo\n```\n"
    );
}
#[test]
fn integration_include_binary() {
    let dir = tempdir().unwrap();
    scenario(dir.path());
    let options = BundleBuilder::new(["a.txt", "sub/"])
        .root(dir.path())
        .include_binary(true)
        .build();
    let result = bundle(options).unwrap();
    assert_eq!(result.files.len(), 3);
    assert_eq!(result.skipped_binary, 0);
}
#[test]
fn integration_missing_file() {
    let dir = tempdir().unwrap();
    let options = BundleBuilder::new(["missing.txt"]).root(dir.path()).build();
    let err = bundle(options).unwrap_err();
    assert!(matches!(err, BundlecatError::NoMatchingFiles));
    assert_eq!(err.to_string(), "No matching files found");
}
#[test]
fn integration_no_specifiers() {
    let options = BundleBuilder::new(Vec::<String>::new()).build();
    assert!(matches!(bundle(options), Err(BundlecatError::NoSpecifiers)));
}
#[test]
fn integration_all_binary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.bin"), [0u8, 1, 2]).unwrap();
    fs::write(dir.path().join("y.bin"), [0xffu8; 64]).unwrap();
    let options = BundleBuilder::new(["*.bin"]).root(dir.path()).build();
    let err = bundle(options).unwrap_err();
    assert!(matches!(err, BundlecatError::NoTextFiles { skipped: 2 }));
    assert_eq!(err.to_string(), "No text files found");
}
#[test]
fn integration_accurate_detection_keeps_utf8() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "ünïcödé テキスト ".repeat(40)).unwrap();
    let heuristic = BundleBuilder::new(["notes.txt"]).root(dir.path()).build();
    assert!(matches!(
        bundle(heuristic),
        Err(BundlecatError::NoTextFiles { .. })
    ));
    let accurate = BundleBuilder::new(["notes.txt"])
        .root(dir.path())
        .binary_detection(BinaryDetection::Accurate)
        .build();
    assert_eq!(bundle(accurate).unwrap().files.len(), 1);
}
#[test]
fn integration_stable_output() {
    let dir = tempdir().unwrap();
    scenario(dir.path());
    fs::create_dir_all(dir.path().join("sub/z/y")).unwrap();
    fs::write(dir.path().join("sub/z/y/e.txt"), "echo\n").unwrap();
    fs::write(dir.path().join("sub/z/d.txt"), "delta\n").unwrap();
    let render = || {
        let options = BundleBuilder::new(["sub", "*.txt"]).root(dir.path()).build();
        let result = bundle(options).unwrap();
        let mut out = Vec::new();
        output::write_fenced(&result, &mut out).unwrap();
        out
    };
    let first = render();
    assert_eq!(first, render());
    let text = String::from_utf8(first).unwrap();
    let headers: Vec<&str> = text.lines().filter(|l| l.ends_with(':')).collect();
    assert_eq!(
        headers,
        vec!["sub/b.txt:", "sub/z/d.txt:", "sub/z/y/e.txt:", "a.txt:"]
    );
}
#[test]
fn integration_unreadable_file_is_reported() {
    let dir = tempdir().unwrap();
    scenario(dir.path());
    let options = BundleBuilder::new(["a.txt", "sub/b.txt"])
        .root(dir.path())
        .build();
    let result = bundle(options).unwrap();
    fs::remove_file(dir.path().join("a.txt")).unwrap();
    let mut out = Vec::new();
    let failures = output::write_fenced(&result, &mut out).unwrap();
    assert_eq!(failures.len(), 1);
    assert!(matches!(&failures[0], BundlecatError::Io { path, .. } if path == Path::new("a.txt")));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "sub/b.txt:\n```\nbravo\n```\n"
    );
}
#[test]
fn integration_json_output() {
    let dir = tempdir().unwrap();
    scenario(dir.path());
    let options = BundleBuilder::new(["./a.txt"]).root(dir.path()).build();
    let result = bundle(options).unwrap();
    let mut out = Vec::new();
    output::write_bundle(&result, OutputFormat::Json, &mut out, false).unwrap();
    let entries: Vec<FileEntry> = serde_json::from_slice(&out).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, PathBuf::from("a.txt"));
    assert_eq!(entries[0].content, "alpha\n");
}
#[test]
fn integration_display_path() {
    let root = Path::new("/work/project");
    assert_eq!(
        output::display_path(root, Path::new("./src/../lib.rs")),
        PathBuf::from("lib.rs")
    );
    assert_eq!(
        output::display_path(root, Path::new("/work/other/x.rs")),
        PathBuf::from("../other/x.rs")
    );
    assert_eq!(output::display_path(root, Path::new(".")), PathBuf::from("."));
}
