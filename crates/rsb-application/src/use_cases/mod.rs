//! Use case implementations

pub mod avatars;
pub mod events;
pub mod incremental;
pub mod jobs;
pub mod reconciler;

pub use avatars::AvatarSyncer;
pub use events::{EventDisposition, MembershipEventHandler};
pub use incremental::IncrementalUpdater;
pub use jobs::JobRunner;
pub use reconciler::Reconciler;
