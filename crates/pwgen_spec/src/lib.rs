//! # pwgen-spec
//!
//! Parses the two specification languages the generator accepts — counts
//! mode (`set:n,set:n,…`) and regex mode — into the structures the engine
//! enumerates against, and estimates how many strings each one describes.
//!
//! Nothing in this crate touches threads or I/O; it is pure parsing and
//! arithmetic over [`pwgen_base`] primitives.

pub mod cardinality;
pub mod counts;
pub mod regex;

pub use cardinality::{
    estimate_counts_no_repeat, estimate_counts_with_repeat, estimate_regex, Cardinality,
};
pub use counts::{CharSpec, CountsSpec, DEFAULT_MAX_TOTAL_LENGTH};
pub use regex::{CharRange, RegexNode};
