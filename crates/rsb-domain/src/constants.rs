//! Domain constants

/// Reconciliation job interval in seconds (30 minutes)
pub const SYNC_USERS_INTERVAL_SECS: u64 = 30 * 60;

/// Avatar job interval in seconds (1 day)
pub const SYNC_AVATARS_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Job name for the periodic reconciliation
pub const JOB_SYNC_USERS: &str = "sync_users";

/// Job name for the periodic avatar push
pub const JOB_SYNC_AVATARS: &str = "sync_avatars";

/// Job name for single-user membership changes
pub const JOB_MODIFY_USER: &str = "modify_user";

/// Host event emitted when a user joins a group
pub const EVENT_USER_ADDED_TO_GROUP: &str = "user_added_to_group";

/// Host event emitted when a user leaves a group
pub const EVENT_USER_REMOVED_FROM_GROUP: &str = "user_removed_from_group";
