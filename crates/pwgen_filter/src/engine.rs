//! The filter worker pool: a job/result pair of bounded streams, sized to
//! `std::thread::available_parallelism` like the generator's fill pool.

use crate::buckets::LineBuckets;
use crate::rules::RuleProgram;
use pwgen_engine::pipe::{spawn, Pipe, PipeReceiver, PipeSender, TaskHandle};
use std::sync::Arc;

/// One line read from the input file, paired with its zero-based line
/// number for classification.
pub struct Job {
    pub line_number: usize,
    pub text: String,
}

/// A job's verdict: the original text, if the rule program kept it.
#[derive(Clone)]
pub struct Verdict {
    pub line_number: usize,
    pub kept: Option<String>,
}

fn worker_loop(
    program: Arc<RuleProgram>,
    case_sensitive: bool,
    jobs: PipeReceiver<Job>,
    results: PipeSender<Verdict>,
) {
    for job in jobs.iter() {
        let buckets = LineBuckets::classify(job.line_number, &job.text, case_sensitive);
        let kept = if program.keep(&buckets) {
            Some(job.text)
        } else {
            None
        };
        if results
            .send(Verdict {
                line_number: job.line_number,
                kept,
            })
            .is_err()
        {
            return;
        }
    }
}

/// Spawns `worker_count` worker threads sharing one `jobs` receiver and one
/// `results` sender.
pub fn spawn_workers(
    program: Arc<RuleProgram>,
    case_sensitive: bool,
    jobs: PipeReceiver<Job>,
    results: PipeSender<Verdict>,
    worker_count: usize,
) -> Vec<TaskHandle<()>> {
    (0..worker_count.max(1))
        .map(|_| {
            let program = Arc::clone(&program);
            let jobs = jobs.clone();
            let results = results.clone();
            spawn(move || worker_loop(program, case_sensitive, jobs, results))
        })
        .collect()
}

/// Feeds every line of `lines` as a [`Job`] into a fresh job channel.
pub fn spawn_job_feeder(lines: Vec<String>, capacity: usize) -> (TaskHandle<()>, PipeReceiver<Job>) {
    let (tx, rx) = Pipe::<Job>::new(capacity);
    let handle = spawn(move || {
        for (line_number, text) in lines.into_iter().enumerate() {
            if tx
                .send(Job {
                    line_number,
                    text,
                })
                .is_err()
            {
                return;
            }
        }
    });
    (handle, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_pool_keeps_only_matching_lines() {
        let program = Arc::new(RuleProgram::compile("0:0:0:0", true).unwrap());
        let lines = vec!["abc!".to_string(), "a1b2c3".to_string()];
        let (feed_handle, jobs_rx) = spawn_job_feeder(lines, 8);
        let (results_tx, results_rx) = Pipe::<Verdict>::new(8);
        let worker_handles = spawn_workers(program, true, jobs_rx, results_tx, 2);

        feed_handle.join().unwrap();
        for h in worker_handles {
            h.join().unwrap();
        }

        let mut verdicts: Vec<Verdict> = results_rx.iter().collect();
        verdicts.sort_by_key(|v| v.line_number);
        assert!(verdicts[0].kept.is_some());
        // "a1b2c3" has letters at indices 0, 2, 4 -- not contiguous, so the
        // lower-case group's only predicate (isCompact) fails.
        assert!(verdicts[1].kept.is_none());
    }
}
