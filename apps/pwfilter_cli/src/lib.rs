//! `pwfilter-cli`: the `pwfilter` binary's argument parsing and dispatch.

pub mod cli;

pub use cli::{dispatch, run_cli, AppError, Cli};
