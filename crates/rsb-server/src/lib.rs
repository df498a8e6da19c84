//! # Server Layer
//!
//! Bootstrap and HTTP surface of the bridge.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`init`] | Configuration, wiring and startup |
//! | [`routes`] | Rocket routes: webhook, health, manual job trigger |
//! | [`state`] | Managed state shared by the routes |

pub mod init;
pub mod routes;
pub mod state;

pub use init::run;
pub use routes::build_rocket;
pub use state::ServerState;
