//! Wires the filter worker pool to an input file and an output file.

use crate::engine::{spawn_job_feeder, spawn_workers};
use crate::rules::RuleProgram;
use pwgen_base::PwgenIoError;
use pwgen_engine::pipe::Pipe;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// A completed filter run.
pub struct RunSummary {
    pub lines_kept: u64,
    pub lines_total: u64,
}

/// Runs the filter end-to-end: reads `input_path` line by line, classifies
/// and evaluates each line against `program` across a worker pool sized to
/// `worker_count`, and writes every kept line, in original order, to
/// `output_path`.
pub fn run(
    program: RuleProgram,
    case_sensitive: bool,
    input_path: &Path,
    output_path: &Path,
    worker_count: usize,
) -> Result<RunSummary, PwgenIoError> {
    let input = std::fs::File::open(input_path).map_err(|source| PwgenIoError::OpenInput {
        path: input_path.display().to_string(),
        source,
    })?;
    let lines: Vec<String> = BufReader::new(input)
        .lines()
        .collect::<Result<_, _>>()
        .map_err(PwgenIoError::Read)?;
    let lines_total = lines.len() as u64;

    let program = Arc::new(program);
    let (feed_handle, jobs_rx) = spawn_job_feeder(lines, 256);
    let (results_tx, results_rx) = Pipe::<crate::engine::Verdict>::new(256);
    let worker_handles = spawn_workers(program, case_sensitive, jobs_rx, results_tx, worker_count.max(1));

    let mut verdicts: Vec<crate::engine::Verdict> = results_rx.iter().collect();
    feed_handle.join().expect("job feeder panicked");
    for h in worker_handles {
        h.join().expect("filter worker panicked");
    }
    verdicts.sort_by_key(|v| v.line_number);

    let output = std::fs::File::create(output_path).map_err(|source| PwgenIoError::CreateOutput {
        path: output_path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(output);
    let mut lines_kept = 0u64;
    for verdict in verdicts {
        if let Some(text) = verdict.kept {
            writeln!(writer, "{text}").map_err(PwgenIoError::Write)?;
            lines_kept += 1;
        }
    }
    writer.flush().map_err(PwgenIoError::Write)?;

    Ok(RunSummary {
        lines_kept,
        lines_total,
    })
}
