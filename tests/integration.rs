//! End-to-end tests for the exercise binaries
//!
//! These run the compiled `fibonacci` and `sort` binaries with piped stdin
//! and assert on stdout, stderr and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run a binary with the given stdin and wait for it to finish
fn run_with_stdin(bin: &str, input: &str) -> Output {
    let mut child = Command::new(bin)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout not UTF-8")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr not UTF-8")
}

const FIBONACCI: &str = env!("CARGO_BIN_EXE_fibonacci");
const SORT: &str = env!("CARGO_BIN_EXE_sort");

#[test]
fn fibonacci_prints_first_ten_terms() {
    let output = run_with_stdin(FIBONACCI, "10\n");

    assert!(output.status.success());
    assert!(stdout_of(&output)
        .contains("Fibonacci sequence: 0 1 1 2 3 5 8 13 21 34\n"));
}

#[test]
fn fibonacci_single_term() {
    let output = run_with_stdin(FIBONACCI, "1\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Fibonacci sequence: 0\n"));
}

#[test]
fn fibonacci_rejects_zero_length() {
    let output = run_with_stdin(FIBONACCI, "0\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("Fibonacci sequence"));
    assert!(stderr_of(&output).contains("positive integer"));
}

#[test]
fn fibonacci_rejects_negative_length() {
    let output = run_with_stdin(FIBONACCI, "-1\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("Fibonacci sequence"));
    assert!(stderr_of(&output).contains("positive integer"));
}

#[test]
fn sort_prints_before_and_after() {
    let output = run_with_stdin(SORT, "5\n64 34 25 12 22\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Before sorting: 64 34 25 12 22\n"));
    assert!(stdout.contains("After sorting: 12 22 25 34 64\n"));
}

#[test]
fn sort_already_sorted_is_unchanged() {
    let output = run_with_stdin(SORT, "4\n1 2 3 4\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Before sorting: 1 2 3 4\n"));
    assert!(stdout.contains("After sorting: 1 2 3 4\n"));
}

#[test]
fn sort_empty_array() {
    let output = run_with_stdin(SORT, "0\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Before sorting: \n"));
    assert!(stdout.contains("After sorting: \n"));
}

#[test]
fn sort_rejects_malformed_count() {
    let output = run_with_stdin(SORT, "banana\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("expected an integer"));
}

#[test]
fn binaries_report_version() {
    for bin in [FIBONACCI, SORT] {
        let output = Command::new(bin)
            .arg("--version")
            .output()
            .expect("failed to run binary");
        assert!(output.status.success());
    }
}
