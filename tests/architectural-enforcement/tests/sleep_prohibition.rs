//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Waiting for the
//! next slide goes through a `Scheduler`, so tests can drive time and a
//! manual navigation can cancel the wait.
//! **Exceptions**: test code (cut off at `#[cfg(test)]` and `tests/` dirs)

use architectural_enforcement::production_lines;

const PRODUCTION_DIRS: &[&str] = &["carousel/core/src", "tui/src"];

#[test]
fn test_no_sleep_in_production_code() {
    let violations: Vec<String> = PRODUCTION_DIRS
        .iter()
        .flat_map(|dir| production_lines(dir))
        .filter(|line| line.text.contains("::sleep(") || line.text.contains(".sleep("))
        .map(|line| line.to_string())
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }
        eprintln!("\n✅ Use a Scheduler (tokio::time::interval) instead.");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

#[test]
fn test_production_dirs_exist() {
    for dir in PRODUCTION_DIRS {
        assert!(
            !production_lines(dir).is_empty(),
            "{dir} has no production code; did the layout change?"
        );
    }
}
