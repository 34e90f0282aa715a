//! `pwfilter`: command-line interface for the line filter.
//!
//! # Examples
//!
//! ```bash
//! pwfilter --input-file candidates.txt --output-file kept.txt \
//!   --filter-rules "0:0:0:0" --case-sensitive
//! ```

use clap::Parser;
use pwgen_base::error::RuleError;
use pwgen_base::PwgenIoError;
use pwgen_filter::RuleProgram;
use std::fmt;
use std::path::PathBuf;

/// Command-line arguments for `pwfilter`.
///
/// Exactly one of `--filter-rules` or `--avg-int-rules` must be supplied;
/// the latter is always rejected once compiled (see [`RuleProgram::reject_average_interval`]).
#[derive(Parser)]
#[command(name = "pwfilter")]
#[command(about = "Filter a password list by per-character rule predicates")]
#[command(version)]
pub struct Cli {
    /// Input file, one candidate password per line.
    #[arg(long)]
    pub input_file: PathBuf,

    /// Output file for lines that pass the rule program.
    #[arg(long)]
    pub output_file: PathBuf,

    /// Rule-DSL program: `g0:g1:g2:g3` (or 3 groups under `--case-sensitive=false`).
    #[arg(long)]
    pub filter_rules: Option<String>,

    /// Average-interval rule dialect. Always rejected — its semantics were
    /// never completed upstream. Accepted only for CLI symmetry with
    /// `--filter-rules`.
    #[arg(long)]
    pub avg_int_rules: Option<String>,

    /// Split letters into lower/upper categories instead of merging them.
    #[arg(long, default_value_t = true)]
    pub case_sensitive: bool,
}

/// The single error type `run_cli` can fail with.
#[derive(Debug)]
pub enum AppError {
    Rule(RuleError),
    Io(PwgenIoError),
    MutuallyExclusiveModes,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Rule(e) => write!(f, "{e}"),
            AppError::Io(e) => write!(f, "{e}"),
            AppError::MutuallyExclusiveModes => {
                write!(f, "exactly one of --filter-rules or --avg-int-rules must be given")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<RuleError> for AppError {
    fn from(e: RuleError) -> Self {
        AppError::Rule(e)
    }
}

impl From<PwgenIoError> for AppError {
    fn from(e: PwgenIoError) -> Self {
        AppError::Io(e)
    }
}

/// Parses arguments, compiles the rule program, and runs the filter pass.
pub fn run_cli() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dispatch(Cli::parse())
}

/// Runs a filter pass for an already-parsed [`Cli`]. Split out from
/// [`run_cli`] so integration tests can drive it with `Cli::parse_from`
/// instead of real process arguments.
pub fn dispatch(cli: Cli) -> Result<(), AppError> {
    let program = match (&cli.filter_rules, &cli.avg_int_rules) {
        (Some(text), None) => RuleProgram::compile(text, cli.case_sensitive)?,
        (None, Some(text)) => RuleProgram::reject_average_interval(text)?,
        _ => return Err(AppError::MutuallyExclusiveModes),
    };

    let worker_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let summary = pwgen_filter::run(
        program,
        cli.case_sensitive,
        &cli.input_file,
        &cli.output_file,
        worker_count,
    )?;

    println!(
        "Kept {} of {} lines in {}",
        summary.lines_kept,
        summary.lines_total,
        cli.output_file.display()
    );
    Ok(())
}
