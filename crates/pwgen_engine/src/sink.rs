//! The output stage: drains the enumeration pipeline, writes to disk, and
//! redraws a progress line on a fixed interval.
//!
//! This is the one stage every enumerator feeds into, so it owns the file
//! handle and the single [`AtomicU64`] counter the rest of the pipeline
//! never touches directly — candidates only ever flow one direction,
//! through a bounded [`Pipe`].

use crate::pipe::{Pipe, PipeReceiver, PipeSender};
use pwgen_base::PwgenIoError;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared progress state, updated by the sink thread and readable from the
/// driver for a final summary.
pub struct Progress {
    emitted: AtomicU64,
    estimated_total: Option<f64>,
}

impl Progress {
    pub fn new(estimated_total: Option<f64>) -> Arc<Self> {
        Arc::new(Self {
            emitted: AtomicU64::new(0),
            estimated_total,
        })
    }

    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    fn render(&self) -> String {
        let count = self.emitted();
        match self.estimated_total {
            Some(total) if total > 0.0 => {
                let pct = (count as f64 / total * 100.0).min(100.0);
                format!("\r{count} generated ({pct:.1}% of ~{total:.0})")
            }
            _ => format!("\r{count} generated"),
        }
    }
}

/// Creates a `(sender, handle)` pair for the output stage.
///
/// The returned [`PipeSender<String>`] is what every terminal enumeration
/// stage sends completed candidates into. `progress_interval` controls how
/// often the stderr progress line is redrawn; the sink redraws once more,
/// unconditionally, after the channel closes.
pub fn spawn_sink(
    out_path: &Path,
    capacity: usize,
    progress: Arc<Progress>,
    progress_interval: Duration,
) -> Result<(PipeSender<String>, crate::pipe::TaskHandle<Result<u64, PwgenIoError>>), PwgenIoError>
{
    let (tx, rx) = Pipe::<String>::new(capacity);
    let file = std::fs::File::create(out_path).map_err(|source| PwgenIoError::CreateOutput {
        path: out_path.display().to_string(),
        source,
    })?;
    let handle = crate::pipe::spawn(move || run_sink(rx, file, progress, progress_interval));
    Ok((tx, handle))
}

fn run_sink(
    rx: PipeReceiver<String>,
    file: std::fs::File,
    progress: Arc<Progress>,
    progress_interval: Duration,
) -> Result<u64, PwgenIoError> {
    let mut writer = BufWriter::new(file);
    let ticker = crossbeam_channel::tick(progress_interval);
    let mut count = 0u64;
    loop {
        crossbeam_channel::select! {
            recv(rx.raw()) -> msg => match msg {
                Ok(line) => {
                    writeln!(writer, "{line}").map_err(PwgenIoError::Write)?;
                    count += 1;
                    progress.emitted.fetch_add(1, Ordering::Relaxed);
                }
                Err(_) => break,
            },
            recv(ticker) -> _ => {
                eprint!("{}", progress.render());
            }
        }
    }
    writer.flush().map_err(PwgenIoError::Write)?;
    eprintln!("{}", progress.render());
    Ok(count)
}
