//! Periodic job scheduler
//!
//! Two tokio intervals enqueue the reconciliation and avatar jobs. Whether a
//! run does anything is decided by the job itself from the live settings.

use rsb_domain::Job;
use rsb_domain::ports::SharedJobQueue;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::config::ScheduleConfig;

/// Enqueues periodic jobs
pub struct Scheduler {
    queue: SharedJobQueue,
    config: ScheduleConfig,
}

/// Running scheduler tasks; dropping the handle stops them
pub struct SchedulerHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stop all periodic tasks
    pub fn stop(&self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Scheduler {
    /// Create a scheduler feeding `queue`
    pub fn new(queue: SharedJobQueue, config: ScheduleConfig) -> Self {
        Self { queue, config }
    }

    /// Start one task per periodic job
    pub fn start(self) -> SchedulerHandle {
        info!(
            sync_interval_secs = self.config.sync_interval_secs,
            avatar_interval_secs = self.config.avatar_interval_secs,
            run_on_startup = self.config.run_on_startup,
            "Scheduler started"
        );

        let periodic = [
            (Job::SyncUsers, self.config.sync_interval()),
            (Job::SyncAvatars, self.config.avatar_interval()),
        ];
        let tasks = periodic
            .into_iter()
            .map(|(job, period)| {
                tokio::spawn(tick(
                    self.queue.clone(),
                    job,
                    period,
                    self.config.run_on_startup,
                ))
            })
            .collect();

        SchedulerHandle { tasks }
    }
}

async fn tick(queue: SharedJobQueue, job: Job, period: Duration, run_on_startup: bool) {
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    if !run_on_startup {
        interval.tick().await;
    }

    loop {
        interval.tick().await;
        debug!(job = %job, "Periodic job due");
        if let Err(e) = queue.enqueue(job.clone()) {
            error!(job = %job, error = %e, "Stopping periodic job, queue unavailable");
            break;
        }
    }
}
