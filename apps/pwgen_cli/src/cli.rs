//! `pwgen`: command-line interface for the password enumerator.
//!
//! This module handles argument parsing and dispatch. The actual
//! enumeration pipelines live in [`pwgen_engine`]; this crate's job is to
//! turn flags into a [`pwgen_spec`] value and a [`pwgen_engine::driver::Spec`],
//! then report the result.
//!
//! # Examples
//!
//! ```bash
//! pwgen --counts "a-z:3,0-9:2" --out passwords.txt
//! pwgen --regex "[a-c]{2,3}" --allow-char-repeat
//! ```

use clap::Parser;
use pwgen_base::error::SpecError;
use pwgen_base::PwgenIoError;
use pwgen_engine::driver::{self, Spec};
use pwgen_spec::{regex, CountsSpec};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for `pwgen`.
///
/// Exactly one of `--regex` or `--counts` must be supplied; see
/// [`run_cli`] for the dispatch logic.
#[derive(Parser)]
#[command(name = "pwgen")]
#[command(about = "Enumerate every password matching a counts or regex specification")]
#[command(version)]
pub struct Cli {
    /// Regex specification (exclusive with `--counts`).
    #[arg(long)]
    pub regex: Option<String>,

    /// Counts specification `set:n,set:n,…` (exclusive with `--regex`).
    #[arg(long)]
    pub counts: Option<String>,

    /// Output file. Defaults to `password_list.txt` in the current directory.
    #[arg(long, default_value = "password_list.txt")]
    pub out: PathBuf,

    /// Enable with-repetition in counts mode.
    #[arg(long, default_value_t = false)]
    pub allow_char_repeat: bool,

    /// Hard cap on total password length.
    #[arg(long, default_value_t = pwgen_spec::DEFAULT_MAX_TOTAL_LENGTH)]
    pub max_len: usize,

    /// Thread count for the no-repeat permutation stage and the
    /// with-repetition fill pool.
    #[arg(long, default_value_t = 4)]
    pub perm_concurrency: usize,

    /// Progress redraw interval, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub progress_interval_ms: u64,
}

/// The single error type `run_cli` can fail with.
#[derive(Debug)]
pub enum AppError {
    Spec(SpecError),
    Io(PwgenIoError),
    MutuallyExclusiveModes,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Spec(e) => write!(f, "{e}"),
            AppError::Io(e) => write!(f, "{e}"),
            AppError::MutuallyExclusiveModes => {
                write!(f, "exactly one of --regex or --counts must be given")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<SpecError> for AppError {
    fn from(e: SpecError) -> Self {
        AppError::Spec(e)
    }
}

impl From<PwgenIoError> for AppError {
    fn from(e: PwgenIoError) -> Self {
        AppError::Io(e)
    }
}

/// Parses arguments and runs a full generation pass.
pub fn run_cli() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dispatch(Cli::parse())
}

/// Runs a generation pass for an already-parsed [`Cli`]. Split out from
/// [`run_cli`] so integration tests can drive it with `Cli::parse_from`
/// instead of real process arguments.
pub fn dispatch(cli: Cli) -> Result<(), AppError> {
    let spec = match (&cli.regex, &cli.counts) {
        (Some(pattern), None) => Spec::Regex(regex::parse(pattern)?),
        (None, Some(pattern)) => {
            Spec::Counts(CountsSpec::parse(pattern, cli.allow_char_repeat, cli.max_len)?)
        }
        _ => return Err(AppError::MutuallyExclusiveModes),
    };

    let summary = driver::run(
        spec,
        &cli.out,
        cli.perm_concurrency,
        Duration::from_millis(cli.progress_interval_ms),
    )?;

    println!("Wrote {} passwords to {}", summary.lines_written, cli.out.display());
    Ok(())
}
