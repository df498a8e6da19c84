//! # Domain Layer
//!
//! Core types and contracts for the Roster Sync Bridge.
//!
//! The bridge keeps a messaging service's group roster in line with a
//! community platform's user group. This crate owns the vocabulary shared by
//! every other layer and depends on no I/O crate.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Usernames, user sets, settings, jobs, events and reports |
//! | [`ports`] | Traits implemented by providers and infrastructure |
//! | [`constants`] | Domain-level constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
