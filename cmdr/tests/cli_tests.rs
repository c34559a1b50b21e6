// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `tailn` binary, and checks its stdout, stderr, and exit status.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use test_case::test_case;

fn tailn() -> Command { Command::cargo_bin("tailn").unwrap() }

fn numbered_lines(count: usize) -> String {
    (1..=count).map(|it| format!("line {it}\n")).collect()
}

#[test]
fn test_stdin_defaults_to_last_ten_lines() {
    let expected: String = (16..=25).map(|it| format!("line {it}\n")).collect();

    tailn()
        .write_stdin(numbered_lines(25))
        .assert()
        .success()
        .stdout(expected);
}

#[test_case("3", "c\nd\ne\n" ; "fewer than the input")]
#[test_case("1", "e\n" ; "just the last line")]
#[test_case("10", "a\nb\nc\nd\ne\n" ; "more than the input")]
fn test_stdin_w_line_count(line_count: &str, expected: &str) {
    tailn()
        .args(["-n", line_count])
        .write_stdin("a\nb\nc\nd\ne\n")
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn test_empty_stdin() {
    tailn().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"one\r\ntwo\r\nthree").unwrap();

    tailn()
        .args(["--lines", "2"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("two\r\nthree");
}

#[test]
fn test_non_utf8_input_is_printed_byte_for_byte() {
    let mut input = b"first\n\xe9t\xe9\r\n".to_vec();
    input.extend(vec![0xff; 3000]);
    input.push(b'\n');
    let expected = input[b"first\n".len()..].to_vec();

    tailn()
        .args(["-n", "2"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_zero_lines_is_an_error() {
    tailn()
        .args(["-n", "0"])
        .write_stdin("a\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid number of lines"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    tailn()
        .arg(dir.path().join("does_not_exist.txt"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Could not open file"));
}

#[test]
fn test_too_long_line_is_an_error_and_nothing_is_printed() {
    tailn()
        .args(["--max-line-length", "3"])
        .write_stdin("ok\ntoolong\nok\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Line is too long"));
}

#[test_case(&["-n", "abc"] ; "not a number")]
#[test_case(&["--no-such-flag"] ; "unknown flag")]
fn test_usage_error_exit_status(args: &[&str]) {
    tailn().args(args).write_stdin("").assert().code(2);
}

#[test]
fn test_logging_writes_log_file_in_current_dir() {
    let dir = tempfile::tempdir().unwrap();

    tailn()
        .current_dir(dir.path())
        .arg("-l")
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("a\nb\n");

    let log = std::fs::read_to_string(dir.path().join("tailn_log.txt")).unwrap();
    assert!(log.contains("Start logging..."));
}
