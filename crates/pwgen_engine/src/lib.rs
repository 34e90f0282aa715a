//! # pwgen-engine
//!
//! The enumeration pipelines: OS threads connected by bounded channels,
//! one stage per algebraic operation a specification can describe, all
//! draining into a single progress-reporting output sink.
//!
//! Candidates flow one direction only, stage to stage, through
//! [`pipe::Pipe`] — there is no shared mutable state between stages beyond
//! the [`sink::Progress`] counter every terminal stage increments.

pub mod counts_norepeat;
pub mod counts_repeat;
pub mod driver;
pub mod pipe;
pub mod regex_enum;
pub mod sink;

pub use driver::{run, RunSummary, Spec};
pub use sink::Progress;
