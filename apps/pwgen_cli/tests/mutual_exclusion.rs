//! CLI-level tests for `pwgen`'s mutually-exclusive mode flags.

use clap::Parser;
use pwgen_cli::{dispatch, AppError, Cli};

#[test]
fn rejects_neither_regex_nor_counts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let cli = Cli::parse_from(["pwgen", "--out", out.to_str().unwrap()]);

    let err = dispatch(cli).unwrap_err();
    assert!(matches!(err, AppError::MutuallyExclusiveModes));
}

#[test]
fn rejects_both_regex_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let cli = Cli::parse_from([
        "pwgen",
        "--regex",
        "ab",
        "--counts",
        "a-b:1",
        "--out",
        out.to_str().unwrap(),
    ]);

    let err = dispatch(cli).unwrap_err();
    assert!(matches!(err, AppError::MutuallyExclusiveModes));
}

#[test]
fn counts_mode_writes_expected_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let cli = Cli::parse_from(["pwgen", "--counts", "a-b:2", "--out", out.to_str().unwrap()]);

    dispatch(cli).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(contents.lines().count(), 2);
}
