//! Membership Event Subscriptions
//!
//! Translates host "user added to group" / "user removed from group"
//! notifications into queued single-user jobs. The handler runs inline with
//! the host action, so it only enqueues: it performs no network I/O and never
//! reports a failure back to the caller. Settings are refreshed on every
//! event, which may read the configuration file.

use rsb_domain::ports::{SharedJobQueue, SharedSettingsSource};
use rsb_domain::{Job, MembershipEvent, Username};
use tracing::{debug, error};

/// What the handler did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// A single-user job was queued
    Enqueued,
    /// Integration disabled
    Disabled,
    /// Event concerned a different host group
    OtherGroup,
    /// The queue refused the job; the failure was logged
    Dropped,
}

impl EventDisposition {
    /// Lowercase label for logs and responses
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enqueued => "enqueued",
            Self::Disabled => "disabled",
            Self::OtherGroup => "other_group",
            Self::Dropped => "dropped",
        }
    }
}

/// Synchronous membership event hook
#[derive(Clone)]
pub struct MembershipEventHandler {
    settings: SharedSettingsSource,
    queue: SharedJobQueue,
}

impl MembershipEventHandler {
    /// Create a handler that enqueues onto `queue`
    pub fn new(settings: SharedSettingsSource, queue: SharedJobQueue) -> Self {
        Self { settings, queue }
    }

    /// Host hook: a user joined `group`
    pub fn on_user_added_to_group(&self, username: Username, group: &str) -> EventDisposition {
        self.handle(&MembershipEvent::added(username, group))
    }

    /// Host hook: a user left `group`
    pub fn on_user_removed_from_group(&self, username: Username, group: &str) -> EventDisposition {
        self.handle(&MembershipEvent::removed(username, group))
    }

    /// Handle any membership event against freshly read settings
    pub fn handle(&self, event: &MembershipEvent) -> EventDisposition {
        let settings = self.settings.refresh();
        if !settings.enabled {
            return EventDisposition::Disabled;
        }
        if !settings.is_target_group(&event.group) {
            debug!(
                group = %event.group,
                event = event.kind.as_str(),
                "Ignoring event for other group"
            );
            return EventDisposition::OtherGroup;
        }

        let job = Job::ModifyUser {
            action: event.kind.action(),
            username: event.username.clone(),
        };
        match self.queue.enqueue(job) {
            Ok(()) => {
                debug!(
                    event = event.kind.as_str(),
                    username = %event.username,
                    "Queued membership job"
                );
                EventDisposition::Enqueued
            }
            Err(e) => {
                error!(
                    event = event.kind.as_str(),
                    username = %event.username,
                    error = %e,
                    "Failed to queue membership job"
                );
                EventDisposition::Dropped
            }
        }
    }
}
