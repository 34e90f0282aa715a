//! A priori cardinality estimation.
//!
//! The estimate must walk the *same* algebraic structure the enumerator
//! will walk — it is not a separate, hand-tuned approximation — or the
//! progress display drifts relative to what is actually emitted.

use crate::counts::CountsSpec;
use crate::regex::RegexNode;

/// The outcome of estimating how many strings a specification describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cardinality {
    Known(f64),
    /// Some sub-expression is not enumerable (only reachable defensively;
    /// the regex parser rejects unbounded repeats before this type ever
    /// sees them).
    Unknown,
}

impl Cardinality {
    pub fn as_known(self) -> Option<f64> {
        match self {
            Cardinality::Known(n) => Some(n),
            Cardinality::Unknown => None,
        }
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n as u64).map(|i| i as f64).product::<f64>().max(1.0)
}

fn combinations(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut res = 1.0;
    for i in 1..=k {
        res = res * (n - i + 1) as f64 / i as f64;
    }
    res
}

/// Estimates the total for a without-repetition counts specification:
/// `(∏ C(|setᵢ|, countᵢ)) · (total_length)!`.
pub fn estimate_counts_no_repeat(spec: &CountsSpec) -> Cardinality {
    let mut combos = 1.0;
    for s in &spec.specs {
        combos *= combinations(s.char_set.len(), s.required_count);
    }
    Cardinality::Known(combos * factorial(spec.total_length))
}

/// Estimates the total for a with-repetition counts specification:
/// `(total_length)! / ∏ countᵢ!` templates, times `∏ |setᵢ|^countᵢ` fills.
pub fn estimate_counts_with_repeat(spec: &CountsSpec) -> Cardinality {
    let mut positions = factorial(spec.total_length);
    for s in &spec.specs {
        positions /= factorial(s.required_count);
    }
    let mut content_choices = 1.0;
    for s in &spec.specs {
        content_choices *= (s.char_set.len() as f64).powi(s.required_count as i32);
    }
    Cardinality::Known(positions * content_choices)
}

/// Estimates the total number of strings described by a regex tree.
pub fn estimate_regex(node: &RegexNode) -> Cardinality {
    match node {
        RegexNode::Literal(_) => Cardinality::Known(1.0),
        RegexNode::Anchor => Cardinality::Known(1.0),
        RegexNode::CharClass(ranges) => {
            Cardinality::Known(ranges.iter().map(|r| r.len() as f64).sum())
        }
        RegexNode::Concat(children) => {
            let mut total = 1.0;
            for child in children {
                match estimate_regex(child) {
                    Cardinality::Known(n) => total *= n,
                    Cardinality::Unknown => return Cardinality::Unknown,
                }
            }
            Cardinality::Known(total)
        }
        RegexNode::Alternate(children) => {
            let mut total = 0.0;
            for child in children {
                match estimate_regex(child) {
                    Cardinality::Known(n) => total += n,
                    Cardinality::Unknown => return Cardinality::Unknown,
                }
            }
            Cardinality::Known(total)
        }
        RegexNode::Repeat { sub, min, max } => {
            let sub_count = match estimate_regex(sub) {
                Cardinality::Known(n) => n,
                Cardinality::Unknown => return Cardinality::Unknown,
            };
            if sub_count == 0.0 {
                return Cardinality::Known(1.0);
            }
            if sub_count == 1.0 {
                return Cardinality::Known((max - min + 1) as f64);
            }
            let total: f64 = (*min..=*max).map(|i| sub_count.powi(i as i32)).sum();
            Cardinality::Known(total)
        }
    }
}
