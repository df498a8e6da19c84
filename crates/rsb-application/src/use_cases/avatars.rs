//! Avatar Sync Use Case
//!
//! Pushes each remote member's host profile image to the messaging service.
//! A failure for one member is recorded as a warning and the batch moves on.

use rsb_domain::error::Result;
use rsb_domain::ports::{SharedHostDirectory, SharedRemoteClient};
use rsb_domain::{AvatarOutcome, AvatarSyncReport, AvatarWarning};
use tracing::{debug, info, warn};

/// Batch avatar pusher
pub struct AvatarSyncer {
    remote: SharedRemoteClient,
    directory: SharedHostDirectory,
}

impl AvatarSyncer {
    /// Create a syncer reading images from `directory` and writing to `remote`
    pub fn new(remote: SharedRemoteClient, directory: SharedHostDirectory) -> Self {
        Self { remote, directory }
    }

    /// Update the avatar of every current remote member
    ///
    /// Only failures to read the remote membership (or missing credentials)
    /// abort the batch.
    pub async fn sync_avatars(&self) -> Result<AvatarSyncReport> {
        let members = self.remote.fetch_group_members().await?;
        let mut report = AvatarSyncReport::default();

        for username in &members {
            let image_url = match self.directory.avatar_url(username).await {
                Ok(Some(url)) => url,
                Ok(None) => {
                    debug!(username = %username, "No profile image, skipping");
                    report.skipped.insert(username.clone());
                    continue;
                }
                Err(e) => {
                    let warning = AvatarWarning::new(username.clone(), e.to_string());
                    warn!(username = %username, error = %e, "Profile image lookup failed");
                    report.warnings.push(warning);
                    continue;
                }
            };

            match self.remote.update_user_avatar(username, &image_url).await? {
                AvatarOutcome::Updated => report.updated += 1,
                AvatarOutcome::Rejected(warning) => {
                    warn!(username = %username, "{}", warning);
                    report.warnings.push(warning);
                }
            }
        }

        info!(
            members = members.len(),
            updated = report.updated,
            skipped = report.skipped.len(),
            warnings = report.warnings.len(),
            "Avatar sync finished"
        );
        Ok(report)
    }
}
