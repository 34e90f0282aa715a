//! Wires a parsed specification to the sink and runs it to completion.

use crate::counts_norepeat::{spawn_combinations, spawn_permutation_workers};
use crate::counts_repeat::{spawn_fill_workers, spawn_templates};
use crate::regex_enum::spawn_regex_enum;
use crate::sink::{spawn_sink, Progress};
use pwgen_base::PwgenIoError;
use pwgen_spec::{cardinality, CountsSpec, RegexNode};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// A completed generation run.
pub struct RunSummary {
    pub lines_written: u64,
}

/// One parsed generation request: either counts mode or regex mode.
pub enum Spec {
    Counts(CountsSpec),
    Regex(RegexNode),
}

/// Runs a generation request end-to-end: spawns the enumeration pipeline
/// for `spec`, feeds it into the output sink, and blocks until every
/// candidate has been written to `out_path`.
pub fn run(
    spec: Spec,
    out_path: &Path,
    perm_concurrency: usize,
    progress_interval: Duration,
) -> Result<RunSummary, PwgenIoError> {
    let estimated_total = match &spec {
        Spec::Counts(c) if c.allow_repeat => {
            cardinality::estimate_counts_with_repeat(c).as_known()
        }
        Spec::Counts(c) => cardinality::estimate_counts_no_repeat(c).as_known(),
        Spec::Regex(r) => cardinality::estimate_regex(r).as_known(),
    };
    match estimated_total {
        Some(total) => log::info!("estimated {total:.0} candidates"),
        None => log::warn!("could not estimate candidate count; progress will show a raw tally only"),
    }

    let progress = Progress::new(estimated_total);
    let (sink_tx, sink_handle) = spawn_sink(out_path, 4096, Arc::clone(&progress), progress_interval)?;

    match spec {
        Spec::Counts(c) if !c.allow_repeat => {
            let spec = Arc::new(c);
            let (combo_handle, combo_rx) = spawn_combinations(spec, 256);
            let perm_handles = spawn_permutation_workers(combo_rx, sink_tx.clone(), perm_concurrency.max(1));
            combo_handle.join().expect("combination stage panicked");
            for h in perm_handles {
                h.join().expect("permutation worker panicked");
            }
        }
        Spec::Counts(c) => {
            let spec = Arc::new(c);
            let (tmpl_handle, tmpl_rx) = spawn_templates(Arc::clone(&spec), 256);
            let worker_count = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
            let fill_handles = spawn_fill_workers(spec, tmpl_rx, sink_tx.clone(), worker_count);
            tmpl_handle.join().expect("template stage panicked");
            for h in fill_handles {
                h.join().expect("fill worker panicked");
            }
        }
        Spec::Regex(node) => {
            let (handle, rx) = spawn_regex_enum(node, 4096);
            for candidate in rx.iter() {
                sink_tx.send(candidate).ok();
            }
            handle.join().expect("regex enumeration stage panicked");
        }
    }

    drop(sink_tx);
    let lines_written = sink_handle.join().expect("sink thread panicked")?;
    Ok(RunSummary { lines_written })
}
