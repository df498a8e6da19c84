//! Job Queue Port

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::Job;

/// Background work queue
///
/// `enqueue` is synchronous and must not block: event hooks call it inline
/// and must never wait on network I/O.
pub trait JobQueue: Send + Sync {
    /// Hand a job to the queue
    fn enqueue(&self, job: Job) -> Result<()>;
}

/// Shared job queue
pub type SharedJobQueue = Arc<dyn JobQueue>;
