//! Integration tests for the uniq-forest stream driver.
//!
//! These tests drive full input streams through `StreamDriver::run` and
//! check the exact bytes written, covering forest delimiting, sentence
//! passthrough, per-forest state reset, and the fatal error paths.

use std::io::Cursor;

use uniq_forest::{DriverConfig, StreamDriver, UniqForestError};

fn run(input: &str) -> String {
    run_with_config(input, DriverConfig::new())
}

fn run_with_config(input: &str, config: DriverConfig) -> String {
    let mut output = Vec::new();
    StreamDriver::new(config)
        .run(Cursor::new(input), &mut output)
        .unwrap();

    String::from_utf8(output).unwrap()
}

fn run_err(input: &str) -> UniqForestError {
    let mut output = Vec::new();
    StreamDriver::new(DriverConfig::new())
        .run(Cursor::new(input), &mut output)
        .unwrap_err()
}

#[test]
fn test_keeps_highest_score_per_key() {
    let output = run("a|||b|||1.0\na|||b|||2.0\n\n");

    assert_eq!(output, "a|||b||| 2.0\n\n");
}

#[test]
fn test_first_seen_order_survives_late_maximum() {
    let output = run("p|||3.0\nq|||1.0\np|||2.0\n\n");

    assert_eq!(output, "p||| 3.0\nq||| 1.0\n\n");
}

#[test]
fn test_unique_keys_preserve_order_and_score_text() {
    let output = run("x|||0.50\ny|||1e2\nz|||-3\n\n");

    assert_eq!(output, "x||| 0.50\ny||| 1e2\nz||| -3\n\n");
}

#[test]
fn test_sentence_marker_passes_through_with_following_line() {
    let output = run("sentence :\nThe cat sat.\nx|||0.5\n\n");

    assert_eq!(output, "sentence :\nThe cat sat.\nx||| 0.5\n\n");
}

#[test]
fn test_sentence_following_line_is_excluded_from_dedup() {
    // The line after the marker looks like a record but is echoed as-is.
    let output = run("sentence :\na|||9.0\na|||1.0\n\n");

    assert_eq!(output, "sentence :\na|||9.0\na||| 1.0\n\n");
}

#[test]
fn test_forest_state_resets_between_forests() {
    let output = run("a|||1.0\na|||2.0\n\na|||0.5\n\n");

    assert_eq!(output, "a||| 2.0\n\na||| 0.5\n\n");
}

#[test]
fn test_empty_forest_emits_single_blank_line() {
    let output = run("\n\n");

    assert_eq!(output, "\n\n");
}

#[test]
fn test_whitespace_only_line_is_a_delimiter() {
    let output = run("a|||1.0\n   \t\n");

    assert_eq!(output, "a||| 1.0\n\n");
}

#[test]
fn test_record_lines_are_trimmed_before_parsing() {
    let output = run("  a|||b|||1.5  \n\n");

    assert_eq!(output, "a|||b||| 1.5\n\n");
}

#[test]
fn test_trailing_forest_is_dropped_by_default() {
    let output = run("a|||1.0\n\nb|||2.0");

    assert_eq!(output, "a||| 1.0\n\n");
}

#[test]
fn test_trailing_forest_flushes_when_enabled() {
    let config = DriverConfig::new().with_flush_trailing_forest(true);
    let output = run_with_config("a|||1.0\n\nb|||2.0\nb|||3.0", config);

    assert_eq!(output, "a||| 1.0\n\nb||| 3.0\n\n");
}

#[test]
fn test_missing_separator_is_fatal() {
    let err = run_err("no separator at all\n\n");

    assert!(matches!(err, UniqForestError::MissingSeparator(_)));
}

#[test]
fn test_non_numeric_score_is_fatal() {
    let err = run_err("a|||b|||not-a-number\n\n");

    assert!(matches!(err, UniqForestError::InvalidScore { .. }));
}

#[test]
fn test_eof_after_sentence_marker_is_fatal() {
    let err = run_err("sentence :\n");

    assert!(matches!(err, UniqForestError::UnexpectedEndOfStream));
}

#[test]
fn test_empty_input_produces_empty_output() {
    let output = run("");

    assert_eq!(output, "");
}

#[test]
fn test_mixed_stream_of_sentences_and_forests() {
    let input = "sentence :\nFirst sentence.\n\
                 a|||b|||1.0\na|||b|||2.5\nc|||d|||0.1\n\n\
                 sentence :\nSecond sentence.\n\
                 a|||b|||0.9\n\n";
    let output = run(input);

    assert_eq!(
        output,
        "sentence :\nFirst sentence.\n\
         a|||b||| 2.5\nc|||d||| 0.1\n\n\
         sentence :\nSecond sentence.\n\
         a|||b||| 0.9\n\n"
    );
}
