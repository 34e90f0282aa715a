//! # pwgen-base
//!
//! Pure structural atoms shared by every crate in the pwgen workspace.
//!
//! This crate has **no knowledge of concurrency, CLI parsing, or I/O**. It
//! provides only the character-set primitive and the error enums that the
//! rest of the workspace builds on.

pub mod charset;
pub mod error;

pub use charset::CharSet;
pub use error::{PwgenIoError, RuleError, SpecError};
