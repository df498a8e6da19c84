//! Configuration sections
//!
//! | Section | Type |
//! |---------|------|
//! | `bridge` | [`rsb_domain::BridgeSettings`] |
//! | `remote` | [`RemoteConfig`] |
//! | `host` | [`rsb_providers::DiscourseConfig`] |
//! | `schedule` | [`ScheduleConfig`] |
//! | `server` | [`ServerConfig`] |
//! | `logging` | [`LoggingConfig`] |

mod app;
mod logging;
mod remote;
mod schedule;
mod server;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use remote::RemoteConfig;
pub use schedule::ScheduleConfig;
pub use server::ServerConfig;
