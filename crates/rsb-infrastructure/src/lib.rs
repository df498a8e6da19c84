//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns supporting the application layer.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration loading and validation |
//! | [`settings`] | Live, reloadable bridge settings |
//! | [`logging`] | Structured logging with tracing |
//! | [`queue`] | Tokio job queue and worker |
//! | [`scheduler`] | Periodic job triggers |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Infrastructure constants |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod queue;
pub mod scheduler;
pub mod settings;

pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use queue::{JobReceiver, JobWorker, TokioJobQueue, job_channel};
pub use scheduler::{Scheduler, SchedulerHandle};
pub use settings::SettingsStore;
