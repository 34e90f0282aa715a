//! End-to-end filter scenarios, driven against real input/output files.

use pwgen_filter::RuleProgram;
use std::fs;

#[test]
fn keeps_lines_with_every_bucket_contiguous() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");

    // "abXY12!@": lower {a,b} contiguous, upper {X,Y} contiguous,
    // digits {1,2} contiguous, symbols {!,@} contiguous -> kept.
    // "aXb1!2@Y": every bucket has a gap -> discarded.
    fs::write(&input, "abXY12!@\naXb1!2@Y\n").unwrap();

    let program = RuleProgram::compile("0:0:0:0", true).unwrap();
    let summary = pwgen_filter::run(program, true, &input, &output, 2).unwrap();

    assert_eq!(summary.lines_total, 2);
    assert_eq!(summary.lines_kept, 1);
    let kept = fs::read_to_string(&output).unwrap();
    assert_eq!(kept.trim(), "abXY12!@");
}

#[test]
fn case_insensitive_mode_needs_three_groups() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "abc123!!!\n").unwrap();

    let program = RuleProgram::compile("0:0:0", false).unwrap();
    let summary = pwgen_filter::run(program, false, &input, &output, 2).unwrap();

    assert_eq!(summary.lines_kept, 1);
}
