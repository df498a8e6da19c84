//! Application Layer - Roster Sync Bridge
//!
//! Use cases that keep the remote group roster in line with the host group.
//! Everything here talks to the outside world only through the port traits
//! in `rsb_domain::ports`.
//!
//! ## Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`Reconciler`] | Two-phase add-then-remove reconciliation with convergence check |
//! | [`IncrementalUpdater`] | Single add/remove driven by membership events |
//! | [`AvatarSyncer`] | Pushes profile image links for every remote member |
//! | [`JobRunner`] | Executes queued jobs against fresh settings |
//! | [`MembershipEventHandler`] | Translates host events into queued jobs |

pub mod use_cases;

pub use use_cases::*;
