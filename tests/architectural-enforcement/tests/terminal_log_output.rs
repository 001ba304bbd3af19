//! Integration Test: Log Output Stays Off The Terminal
//!
//! **Policy**: the terminal host draws on the alternate screen in raw mode.
//! Tracing writers in `tui/src` must never target stdout or stderr; log
//! lines go through `LogDestination` (a file, or nowhere).

use architectural_enforcement::production_lines;

const TERMINAL_WRITERS: &[&str] = &["io::stderr", "io::stdout"];

#[test]
fn test_tracing_writers_never_target_the_terminal() {
    let violations: Vec<String> = production_lines("tui/src")
        .into_iter()
        .filter(|line| {
            line.text.contains("with_writer(")
                && TERMINAL_WRITERS.iter().any(|w| line.text.contains(w))
        })
        .map(|line| line.to_string())
        .collect();

    assert!(
        violations.is_empty(),
        "Tracing writer targets the terminal:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_main_installs_logging_through_destination() {
    let main = production_lines("tui/src")
        .into_iter()
        .filter(|line| line.path.ends_with("main.rs"))
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");

    assert!(main.contains("LogDestination::from_path"));
    assert!(main.contains("destination.make_writer()"));
}
