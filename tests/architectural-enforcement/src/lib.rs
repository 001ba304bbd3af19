//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleep() calls in production code (timers go through the scheduler)
//! - The carousel core stays free of UI framework dependencies
//! - The carousel core propagates errors instead of panicking
//! - The terminal host never logs to the terminal it draws on
//!
//! These tests are designed to catch violations early in the development cycle.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, two levels above this package
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// A production source line: file, 1-based line number and text
#[derive(Debug)]
pub struct SourceLine {
    pub path: PathBuf,
    pub line_number: usize,
    pub text: String,
}

impl std::fmt::Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} - {}",
            self.path.display(),
            self.line_number,
            self.text.trim()
        )
    }
}

/// Every `.rs` file under `dir` (relative to the workspace root)
#[must_use]
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Production code lines in `dir`: comments stripped, and each file cut at
/// its `#[cfg(test)]` module
#[must_use]
pub fn production_lines(dir: &str) -> Vec<SourceLine> {
    let mut lines = Vec::new();

    for path in rust_files(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, line) in content.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            let code_part = line.split("//").next().unwrap_or(line);
            if code_part.trim().is_empty() {
                continue;
            }
            lines.push(SourceLine {
                path: path.clone(),
                line_number: idx + 1,
                text: code_part.to_string(),
            });
        }
    }

    lines
}
