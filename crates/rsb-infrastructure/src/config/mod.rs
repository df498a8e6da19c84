//! Configuration management
//!
//! Figment-based loading of [`AppConfig`] plus the live settings store.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RemoteConfig, ScheduleConfig, ServerConfig};
