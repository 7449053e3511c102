//! Hygiene — scans the client crate's production sources for calls that can
//! crash the page script or swallow an error. Every budget is zero.

use std::fs;
use std::path::{Path, PathBuf};

/// Forbidden substrings and the reason each is banned.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a result without inspecting it"),
    (".ok()", "discards an error without inspecting it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

fn hits(pattern: &str) -> Vec<String> {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    files
        .iter()
        .filter_map(|path| {
            let content = fs::read_to_string(path).ok()?;
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", path.display()))
        })
        .collect()
}

#[test]
fn sources_are_scanned() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|p| p.ends_with("bind.rs")), "bind.rs not found under src/");
}

#[test]
fn banned_patterns_are_absent() {
    let mut failures = Vec::new();
    for (pattern, reason) in BANNED {
        let found = hits(pattern);
        if !found.is_empty() {
            failures.push(format!("`{pattern}` ({reason}):\n{}", found.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn listeners_register_through_logging_helper() {
    let found = hits("add_event_listener_with_callback(");
    assert_eq!(
        found,
        vec!["  src/bind.rs: 1".to_owned()],
        "listener registration must go through `attach_listener` so failures are logged"
    );
}
