//! Value Objects
//!
//! Immutable types shared by every layer of the bridge.

pub mod job;
pub mod membership;
pub mod reports;
pub mod settings;
pub mod user;

pub use job::{Job, JobOutcome};
pub use membership::{HostGroup, MembershipAction, MembershipEvent, MembershipEventKind};
pub use reports::{AvatarOutcome, AvatarSyncReport, AvatarWarning, ReconciliationReport};
pub use settings::BridgeSettings;
pub use user::{UserSet, Username};
