//! Job queue and worker
//!
//! [`TokioJobQueue`] is the sending half of an unbounded tokio channel, so
//! enqueueing never blocks the caller. [`JobWorker`] owns the receiving half
//! and spawns every job as its own task; jobs may overlap.

use rsb_application::JobRunner;
use rsb_domain::error::{Error, Result};
use rsb_domain::ports::JobQueue;
use rsb_domain::{Job, JobOutcome};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::error_ext::ErrorContext;
use crate::settings::SettingsStore;

/// Create a connected queue and receiver
pub fn job_channel() -> (TokioJobQueue, JobReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (TokioJobQueue { sender }, JobReceiver { receiver })
}

/// Sending half of the job channel
#[derive(Clone)]
pub struct TokioJobQueue {
    sender: mpsc::UnboundedSender<Job>,
}

impl JobQueue for TokioJobQueue {
    fn enqueue(&self, job: Job) -> Result<()> {
        let name = job.name();
        self.sender
            .send(job)
            .map_err(|_| Error::queue(format!("job queue closed, dropped {name}")))?;
        debug!(job = name, "Job enqueued");
        Ok(())
    }
}

/// Receiving half of the job channel
pub struct JobReceiver {
    receiver: mpsc::UnboundedReceiver<Job>,
}

/// Consumes queued jobs
pub struct JobWorker {
    runner: JobRunner,
    receiver: JobReceiver,
    settings: Option<Arc<SettingsStore>>,
}

impl JobWorker {
    /// Create a worker executing jobs from `receiver` with `runner`
    pub fn new(runner: JobRunner, receiver: JobReceiver) -> Self {
        Self {
            runner,
            receiver,
            settings: None,
        }
    }

    /// Reload `store` at the start of each job task
    pub fn with_settings_reload(mut self, store: Arc<SettingsStore>) -> Self {
        self.settings = Some(store);
        self
    }

    /// Spawn the worker loop onto the runtime
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Process jobs until every queue handle is dropped
    ///
    /// Jobs still running when the channel closes are awaited before return.
    pub async fn run(mut self) {
        let mut tasks = JoinSet::new();
        info!("Job worker started");

        loop {
            tokio::select! {
                received = self.receiver.receiver.recv() => match received {
                    Some(job) => {
                        let runner = self.runner.clone();
                        let store = self.settings.clone();
                        let run_id = Uuid::new_v4();
                        let span = info_span!("job", name = job.name(), %run_id);
                        tasks.spawn(
                            async move {
                                if let Some(store) = store {
                                    reload_settings(store).await;
                                }
                                execute(runner, job).await
                            }
                            .instrument(span),
                        );
                    }
                    None => break,
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    log_join(joined);
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            log_join(joined);
        }
        info!("Job worker stopped");
    }
}

/// Reload `store` off the async runtime, keeping the old snapshot on failure
async fn reload_settings(store: Arc<SettingsStore>) {
    let reloaded = tokio::task::spawn_blocking(move || store.reload())
        .await
        .context("Settings reload task failed")
        .and_then(|reloaded| reloaded);
    if let Err(e) = reloaded {
        warn!(error = %e, "Settings reload failed, keeping previous settings");
    }
}

/// Run one job and log how it ended
pub async fn execute(runner: JobRunner, job: Job) -> Result<JobOutcome> {
    let result = runner.run(&job).await;
    match &result {
        Ok(outcome) => log_outcome(&job, outcome),
        Err(e) => error!(job = %job, category = e.category(), error = %e, "Job failed"),
    }
    result
}

fn log_outcome(job: &Job, outcome: &JobOutcome) {
    match outcome {
        JobOutcome::Disabled => debug!(job = %job, "Job skipped, integration disabled"),
        JobOutcome::Reconciled(report) => info!(
            job = %job,
            added = report.added.len(),
            removed = report.removed.len(),
            members = report.members.len(),
            "Job finished"
        ),
        JobOutcome::AvatarsSynced(report) => info!(
            job = %job,
            updated = report.updated,
            skipped = report.skipped.len(),
            warnings = report.warnings.len(),
            "Job finished"
        ),
        JobOutcome::MemberChanged { .. } => info!(job = %job, "Job finished"),
    }
}

fn log_join(joined: std::result::Result<Result<JobOutcome>, tokio::task::JoinError>) {
    if let Err(e) = joined {
        error!(error = %e, "Job task panicked or was cancelled");
    }
}
