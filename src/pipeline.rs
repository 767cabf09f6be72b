//! Corpus pipeline: fetch every entry, normalize it, write it, and assemble `all.json`.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::foundation::core::{FRAME_HEIGHT, FrameTransform};
use crate::foundation::error::{EntryFailure, StrokeError, StrokeResult};
use crate::normalize::normalize_payload;
use crate::record::CharacterRecord;
use crate::sink::{CharacterIndex, Sink};
use crate::source::{Entry, RecordSource, RemoteConfig, Source};

/// What to do when an entry fails.
///
/// Under both policies the combined index is only written when no entry failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Process every entry and report all failures together.
    #[default]
    CollectAll,
    /// Stop at the first failure.
    FailFast,
}

/// Options controlling a pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOpts {
    /// Worker threads for fetch + normalize + write. `None` (or `Some(1)`) runs
    /// sequentially in enumeration order.
    pub threads: Option<usize>,
    /// Failure handling.
    pub failure_policy: FailurePolicy,
    /// Height of the target frame. Strokes are flipped with
    /// [`FrameTransform::flip_y`] and medians inverted against the same height.
    pub frame_height: f64,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            threads: None,
            failure_policy: FailurePolicy::default(),
            frame_height: FRAME_HEIGHT,
        }
    }
}

/// Summary of a successful run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Entries that passed the name filter.
    pub entries: usize,
    /// Records written, equal to the number of keys in the combined index.
    pub written: usize,
}

/// Observer for run progress. Has no influence on results.
pub trait Progress: Sync {
    /// Called after each entry, successful or not. `done` counts completed entries.
    fn entry_done(&self, _entry: &Entry, _done: usize, _total: usize) {}

    /// Called once after the combined index has been written.
    fn finished(&self, _report: &RunReport) {}
}

/// Progress observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Run the pipeline over an already opened source.
#[tracing::instrument(skip_all, fields(source = %source.describe()))]
pub fn run(
    source: &dyn RecordSource,
    sink: &dyn Sink,
    opts: &PipelineOpts,
    progress: &dyn Progress,
) -> StrokeResult<RunReport> {
    let transform = FrameTransform::flip_y(opts.frame_height)?;
    let entries = source.entries()?;
    let total = entries.len();
    tracing::info!(total, "normalizing entries");

    let done = AtomicUsize::new(0);
    let process = |entry: &Entry| -> Result<(String, CharacterRecord), EntryFailure> {
        let result = process_entry(source, sink, entry, &transform, opts.frame_height);
        let n = done.fetch_add(1, Ordering::Relaxed) + 1;
        progress.entry_done(entry, n, total);
        match result {
            Ok(record) => Ok((entry.identifier.clone(), record)),
            Err(error) => {
                tracing::warn!(entry = %entry.name, %error, "entry failed");
                Err(EntryFailure {
                    entry: entry.name.clone(),
                    error,
                })
            }
        }
    };

    let fail_fast = opts.failure_policy == FailurePolicy::FailFast;
    let mut normalized = Vec::with_capacity(total);
    let mut failures = Vec::new();

    match opts.threads {
        None | Some(1) => {
            for entry in &entries {
                match process(entry) {
                    Ok(item) => normalized.push(item),
                    Err(failure) => {
                        failures.push(failure);
                        if fail_fast {
                            break;
                        }
                    }
                }
            }
        }
        Some(threads) => {
            let pool = build_thread_pool(threads)?;
            if fail_fast {
                let collected = pool.install(|| {
                    entries
                        .par_iter()
                        .map(&process)
                        .collect::<Result<Vec<_>, EntryFailure>>()
                });
                match collected {
                    Ok(items) => normalized = items,
                    Err(failure) => failures.push(failure),
                }
            } else {
                let collected =
                    pool.install(|| entries.par_iter().map(&process).collect::<Vec<_>>());
                for item in collected {
                    match item {
                        Ok(item) => normalized.push(item),
                        Err(failure) => failures.push(failure),
                    }
                }
            }
        }
    }

    if !failures.is_empty() {
        tracing::warn!(
            failed = failures.len(),
            "not writing the combined index because entries failed"
        );
        return Err(StrokeError::Entries(failures));
    }

    let index: CharacterIndex = normalized.into_iter().collect();
    sink.write_index(&index)?;

    let report = RunReport {
        entries: total,
        written: index.len(),
    };
    tracing::info!(written = report.written, "wrote combined index");
    progress.finished(&report);
    Ok(report)
}

/// Open `source` and run the pipeline over it.
///
/// A missing remote folder surfaces as [`StrokeError::SourceNotFound`] before any
/// output is written.
pub fn run_source(
    source: &Source,
    remote: &RemoteConfig,
    sink: &dyn Sink,
    opts: &PipelineOpts,
    progress: &dyn Progress,
) -> StrokeResult<RunReport> {
    let opened = source.open(remote)?;
    run(opened.as_ref(), sink, opts, progress)
}

#[tracing::instrument(level = "debug", skip(source, sink, transform), fields(entry = %entry.name))]
fn process_entry(
    source: &dyn RecordSource,
    sink: &dyn Sink,
    entry: &Entry,
    transform: &FrameTransform,
    frame_height: f64,
) -> StrokeResult<CharacterRecord> {
    let payload = source.fetch(entry)?;
    let record = normalize_payload(&payload, transform, frame_height)?;
    sink.write_record(&entry.identifier, &record)?;
    tracing::debug!(strokes = record.strokes.len(), "normalized");
    Ok(record)
}

fn build_thread_pool(threads: usize) -> StrokeResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(StrokeError::validation(
            "pipeline 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| StrokeError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
