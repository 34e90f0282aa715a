//! # pwgen-filter
//!
//! Per-line character classification into category buckets, a rule-DSL
//! compiler over those categories, and a worker pool that evaluates a
//! compiled [`rules::RuleProgram`] across every line of an input file.

pub mod buckets;
pub mod driver;
pub mod engine;
pub mod predicates;
pub mod rules;

pub use buckets::{Category, IndexInfo, LineBuckets};
pub use driver::{run, RunSummary};
pub use rules::{RuleGroup, RuleProgram};
