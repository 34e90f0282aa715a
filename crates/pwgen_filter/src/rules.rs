//! The rule-DSL compiler: `g0:g1:g2:...` into a [`RuleProgram`].

use crate::buckets::{Category, IndexInfo};
use crate::predicates;
use pwgen_base::error::RuleError;

/// One compiled rule group: the category it governs and its ordered
/// predicate IDs.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub category: Category,
    pub predicate_ids: Vec<u8>,
}

/// A fully-compiled rule program: one [`RuleGroup`] per active category,
/// in the same order [`Category::active_categories`] returns them.
#[derive(Debug, Clone)]
pub struct RuleProgram {
    pub groups: Vec<RuleGroup>,
}

fn predicate_by_id(id: u8) -> Result<fn(&[IndexInfo]) -> bool, RuleError> {
    match id {
        0 => Ok(predicates::is_compact),
        1 => Ok(predicates::is_couple),
        2 => Ok(predicates::is_equally_spaced),
        3 => Ok(predicates::is_symmetrical),
        other => Err(RuleError::UnknownPredicateId { id: other }),
    }
}

impl RuleProgram {
    /// Compiles `text` (e.g. `"0:1:23:"`) into a program for `case_sensitive`
    /// mode, validating the group count and every predicate ID as it goes.
    pub fn compile(text: &str, case_sensitive: bool) -> Result<Self, RuleError> {
        let categories = Category::active_categories(case_sensitive);
        let raw_groups: Vec<&str> = text.split(':').collect();
        if raw_groups.len() != categories.len() {
            return Err(RuleError::WrongGroupCount {
                expected: categories.len(),
                found: raw_groups.len(),
            });
        }

        let mut groups = Vec::with_capacity(categories.len());
        for (category, raw_group) in categories.into_iter().zip(raw_groups) {
            let mut predicate_ids = Vec::with_capacity(raw_group.len());
            for c in raw_group.chars() {
                let digit = c.to_digit(10).ok_or(RuleError::NonDigitCharacter {
                    group: raw_group.to_string(),
                    found: c,
                })? as u8;
                // Validate eagerly so a bad ID is reported at compile time,
                // not the first time a line happens to reach that group.
                predicate_by_id(digit)?;
                predicate_ids.push(digit);
            }
            groups.push(RuleGroup {
                category,
                predicate_ids,
            });
        }

        Ok(RuleProgram { groups })
    }

    /// Rejects any `--avg-int-rules` invocation: the average-interval
    /// dialect's semantics in the source material were never completed.
    pub fn reject_average_interval(_text: &str) -> Result<Self, RuleError> {
        Err(RuleError::AverageIntervalUnsupported)
    }

    /// Evaluates this program against one line's buckets. A line is kept
    /// only if every group finds at least one satisfying predicate; an
    /// empty group can never be satisfied.
    pub fn keep(&self, buckets: &crate::buckets::LineBuckets) -> bool {
        self.groups.iter().all(|group| {
            let bucket = buckets.get(group.category);
            group
                .predicate_ids
                .iter()
                .any(|&id| predicate_by_id(id).expect("validated at compile time")(bucket))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::LineBuckets;

    #[test]
    fn compiles_four_groups_for_case_sensitive() {
        let program = RuleProgram::compile("0:0:0:0", true).unwrap();
        assert_eq!(program.groups.len(), 4);
    }

    #[test]
    fn compiles_three_groups_for_case_insensitive() {
        let program = RuleProgram::compile("0:0:0", false).unwrap();
        assert_eq!(program.groups.len(), 3);
    }

    #[test]
    fn rejects_wrong_group_count() {
        let err = RuleProgram::compile("0:0:0", true).unwrap_err();
        assert!(matches!(err, RuleError::WrongGroupCount { expected: 4, found: 3 }));
    }

    #[test]
    fn rejects_non_digit_character() {
        let err = RuleProgram::compile("0:a:0:0", true).unwrap_err();
        assert!(matches!(err, RuleError::NonDigitCharacter { .. }));
    }

    #[test]
    fn rejects_unknown_predicate_id() {
        let err = RuleProgram::compile("9:0:0:0", true).unwrap_err();
        assert!(matches!(err, RuleError::UnknownPredicateId { id: 9 }));
    }

    #[test]
    fn empty_group_is_vacuously_unsatisfied() {
        let program = RuleProgram::compile("0:0:0:", true).unwrap();
        let buckets = LineBuckets::classify(0, "aB3", true);
        // symbols bucket is empty with an empty rule group -> reject.
        assert!(!program.keep(&buckets));
    }

    #[test]
    fn all_groups_satisfied_keeps_line() {
        let program = RuleProgram::compile("0:0:0:0", true).unwrap();
        let buckets = LineBuckets::classify(0, "aB3!", true);
        assert!(program.keep(&buckets));
    }

    #[test]
    fn average_interval_is_always_rejected() {
        let err = RuleProgram::reject_average_interval("1.0:2.0:3.0").unwrap_err();
        assert!(matches!(err, RuleError::AverageIntervalUnsupported));
    }
}
