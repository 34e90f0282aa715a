//! Error types shared across the pwgen workspace.
//!
//! Every fallible entry point returns one of these enums rather than
//! panicking. Each implements [`std::fmt::Display`] with a single-line,
//! human-readable message and [`std::error::Error`] so callers can use `?`
//! freely and CLI wrappers can print `Error: {e}` uniformly.

use std::fmt;

/// Errors raised while parsing a counts-mode or regex-mode specification.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    /// `x-y` range where `x > y`.
    InvalidRange { text: String, start: char, end: char },
    /// A `set:count` part did not split into exactly two pieces.
    MalformedCountsPart { part: String },
    /// The count half of a `set:count` part was not a non-negative integer.
    InvalidCount { text: String },
    /// A character set was empty but its required count was positive.
    EmptySetWithPositiveCount { text: String, count: usize },
    /// Without-repetition mode requested more characters than the set holds.
    SetTooSmallForCount {
        text: String,
        set_size: usize,
        count: usize,
    },
    /// `Σ count` exceeded the configured maximum total length.
    TotalLengthExceedsMax { total: usize, max: usize },
    /// The regex dialect rejected the pattern outright.
    InvalidRegex { pattern: String, reason: String },
    /// A repeat operator with no upper bound (`*`, `+`, `{n,}`) was used.
    UnboundedRepeat { pattern: String },
    /// Neither or both of two mutually exclusive modes were selected.
    MutuallyExclusiveModes { first: &'static str, second: &'static str },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::InvalidRange { text, start, end } => write!(
                f,
                "invalid char range: {text} (start char '{start}' is greater than end char '{end}')"
            ),
            SpecError::MalformedCountsPart { part } => write!(
                f,
                "invalid count part format: {part}. Expected 'charset:count'"
            ),
            SpecError::InvalidCount { text } => write!(f, "invalid count number: {text}"),
            SpecError::EmptySetWithPositiveCount { text, count } => write!(
                f,
                "empty char set '{text}' requested with count {count}"
            ),
            SpecError::SetTooSmallForCount {
                text,
                set_size,
                count,
            } => write!(
                f,
                "cannot select {count} chars from a set of size {set_size} ('{text}') without replacement"
            ),
            SpecError::TotalLengthExceedsMax { total, max } => write!(
                f,
                "total password length ({total}) exceeds MAX_TOTAL_LENGTH ({max})"
            ),
            SpecError::InvalidRegex { pattern, reason } => {
                write!(f, "invalid regex '{pattern}': {reason}")
            }
            SpecError::UnboundedRepeat { pattern } => write!(
                f,
                "unbounded repeat in '{pattern}': a repeat with no upper bound is not enumerable"
            ),
            SpecError::MutuallyExclusiveModes { first, second } => write!(
                f,
                "exactly one of {first} / {second} must be specified"
            ),
        }
    }
}

impl std::error::Error for SpecError {}

/// Errors raised while compiling the filter rule DSL.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    /// The rule string did not split into the expected number of groups.
    WrongGroupCount { expected: usize, found: usize },
    /// A group contained a character that is not a decimal digit.
    NonDigitCharacter { group: String, found: char },
    /// A digit did not name a recognized predicate.
    UnknownPredicateId { id: u8 },
    /// `--avg-int-rules` was supplied; the mode is declared but unimplemented.
    AverageIntervalUnsupported,
    /// `--avg-int-rules` float parsing failed.
    MalformedFloat { text: String },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::WrongGroupCount { expected, found } => write!(
                f,
                "filter rules must have exactly {expected} colon-separated groups, found {found}"
            ),
            RuleError::NonDigitCharacter { group, found } => write!(
                f,
                "invalid character '{found}' in group '{group}'"
            ),
            RuleError::UnknownPredicateId { id } => write!(f, "unknown predicate id {id}"),
            RuleError::AverageIntervalUnsupported => write!(
                f,
                "average-interval rule mode is not implemented; use --filter-rules instead"
            ),
            RuleError::MalformedFloat { text } => {
                write!(f, "invalid average-interval float: {text}")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// I/O failures surfaced by the binaries (file creation, opening, read/write).
#[derive(Debug)]
pub enum PwgenIoError {
    CreateOutput { path: String, source: std::io::Error },
    OpenInput { path: String, source: std::io::Error },
    Write(std::io::Error),
    Read(std::io::Error),
}

impl fmt::Display for PwgenIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwgenIoError::CreateOutput { path, source } => {
                write!(f, "error creating file '{path}': {source}")
            }
            PwgenIoError::OpenInput { path, source } => {
                write!(f, "error opening file '{path}': {source}")
            }
            PwgenIoError::Write(e) => write!(f, "write failed: {e}"),
            PwgenIoError::Read(e) => write!(f, "read failed: {e}"),
        }
    }
}

impl std::error::Error for PwgenIoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_messages_are_single_line_and_descriptive() {
        let err = SpecError::TotalLengthExceedsMax { total: 20, max: 15 };
        let msg = err.to_string();
        assert!(!msg.contains('\n'));
        assert!(msg.contains("20"));
        assert!(msg.contains("15"));
    }

    #[test]
    fn rule_error_reports_group_counts() {
        let err = RuleError::WrongGroupCount {
            expected: 4,
            found: 3,
        };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('3'));
    }
}
