//! Managed server state

use rsb_application::MembershipEventHandler;
use rsb_domain::ports::{SharedJobQueue, SharedSettingsSource};
use std::time::Instant;

/// State managed by Rocket and shared across routes
pub struct ServerState {
    /// Membership webhook handler
    pub events: MembershipEventHandler,
    /// Queue for manually triggered jobs
    pub queue: SharedJobQueue,
    /// Live bridge settings
    pub settings: SharedSettingsSource,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create state; the event handler shares `settings` and `queue`
    pub fn new(settings: SharedSettingsSource, queue: SharedJobQueue) -> Self {
        Self {
            events: MembershipEventHandler::new(settings.clone(), queue.clone()),
            queue,
            settings,
            started_at: Instant::now(),
        }
    }
}
