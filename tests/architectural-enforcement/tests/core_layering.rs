//! Integration Test: Core Layering
//!
//! **Policy**: `carousel-core` is headless. It must not depend on terminal
//! or UI crates, and its production code reports contract violations as
//! `Result`s rather than panicking.

use std::fs;

use architectural_enforcement::{production_lines, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("carousel/core/Cargo.toml"))
        .expect("carousel-core manifest is readable");

    for krate in UI_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(krate)),
            "carousel-core must not depend on {krate}"
        );
    }
}

#[test]
fn test_core_sources_do_not_import_ui_crates() {
    let violations: Vec<String> = production_lines("carousel/core/src")
        .into_iter()
        .filter(|line| UI_CRATES.iter().any(|k| line.text.contains(&format!("{k}::"))))
        .map(|line| line.to_string())
        .collect();

    assert!(violations.is_empty(), "UI imports in core:\n{}", violations.join("\n"));
}

#[test]
fn test_core_does_not_panic_on_bad_input() {
    let violations: Vec<String> = production_lines("carousel/core/src")
        .into_iter()
        .filter(|line| {
            line.text.contains(".unwrap()")
                || line.text.contains(".expect(")
                || line.text.contains("panic!(")
        })
        .map(|line| line.to_string())
        .collect();

    assert!(
        violations.is_empty(),
        "Panicking calls in carousel-core production code:\n{}",
        violations.join("\n")
    );
}
