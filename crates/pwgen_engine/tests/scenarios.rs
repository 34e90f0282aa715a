//! End-to-end enumeration scenarios, run in-process against a real
//! `Sink` — no subprocess, matching the workspace's black-box `tests/`
//! convention for scenario coverage.

use pwgen_engine::driver::{self, Spec};
use pwgen_spec::{regex, CountsSpec};
use std::collections::HashSet;
use std::fs;
use std::time::Duration;

fn read_lines(path: &std::path::Path) -> HashSet<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn counts_without_repeat_cross_product() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let spec = CountsSpec::parse("a-b:1,0-1:1", false, pwgen_spec::DEFAULT_MAX_TOTAL_LENGTH).unwrap();

    let summary = driver::run(Spec::Counts(spec), &out, 4, Duration::from_secs(60)).unwrap();

    assert_eq!(summary.lines_written, 8);
    let lines = read_lines(&out);
    for expected in ["a0", "0a", "a1", "1a", "b0", "0b", "b1", "1b"] {
        assert!(lines.contains(expected), "missing {expected}");
    }
}

#[test]
fn counts_with_repeat_allows_repeated_characters() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let spec = CountsSpec::parse("a-b:2", true, pwgen_spec::DEFAULT_MAX_TOTAL_LENGTH).unwrap();

    let summary = driver::run(Spec::Counts(spec), &out, 4, Duration::from_secs(60)).unwrap();

    assert_eq!(summary.lines_written, 4);
    assert_eq!(
        read_lines(&out),
        HashSet::from(["aa".into(), "ab".into(), "ba".into(), "bb".into()])
    );
}

#[test]
fn counts_without_repeat_excludes_repeated_characters() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let spec = CountsSpec::parse("a-b:2", false, pwgen_spec::DEFAULT_MAX_TOTAL_LENGTH).unwrap();

    let summary = driver::run(Spec::Counts(spec), &out, 4, Duration::from_secs(60)).unwrap();

    assert_eq!(summary.lines_written, 2);
    assert_eq!(read_lines(&out), HashSet::from(["ab".into(), "ba".into()]));
}

#[test]
fn regex_char_class_concat() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let node = regex::parse("[ab][01]").unwrap();

    let summary = driver::run(Spec::Regex(node), &out, 4, Duration::from_secs(60)).unwrap();

    assert_eq!(summary.lines_written, 4);
    assert_eq!(
        read_lines(&out),
        HashSet::from(["a0".into(), "a1".into(), "b0".into(), "b1".into()])
    );
}

#[test]
fn regex_bounded_repeat() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let node = regex::parse("a{2,3}").unwrap();

    let summary = driver::run(Spec::Regex(node), &out, 4, Duration::from_secs(60)).unwrap();

    assert_eq!(summary.lines_written, 2);
    assert_eq!(read_lines(&out), HashSet::from(["aa".into(), "aaa".into()]));
}
