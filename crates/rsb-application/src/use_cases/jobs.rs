//! Job Runner
//!
//! Executes queued jobs. Settings are read once at the start of every run and
//! a remote client is built from that snapshot, so each run is stateless and
//! picks up settings changed since the previous one.

use rsb_domain::error::{Error, Result};
use rsb_domain::ports::{SharedHostDirectory, SharedRemoteClientFactory, SharedSettingsSource};
use rsb_domain::{BridgeSettings, Job, JobOutcome, MembershipAction, Username};
use tracing::{debug, info};

use super::{AvatarSyncer, IncrementalUpdater, Reconciler};

/// Runs jobs against the host directory and a freshly built remote client
#[derive(Clone)]
pub struct JobRunner {
    settings: SharedSettingsSource,
    directory: SharedHostDirectory,
    remotes: SharedRemoteClientFactory,
}

impl JobRunner {
    /// Create a runner
    pub fn new(
        settings: SharedSettingsSource,
        directory: SharedHostDirectory,
        remotes: SharedRemoteClientFactory,
    ) -> Self {
        Self {
            settings,
            directory,
            remotes,
        }
    }

    /// Execute one job
    pub async fn run(&self, job: &Job) -> Result<JobOutcome> {
        let settings = self.settings.current();
        match job {
            Job::SyncUsers => self.sync_users(&settings).await,
            Job::SyncAvatars => self.sync_avatars(&settings).await,
            Job::ModifyUser { action, username } => {
                self.modify_user(&settings, *action, username).await
            }
        }
    }

    async fn sync_users(&self, settings: &BridgeSettings) -> Result<JobOutcome> {
        if !settings.enabled {
            debug!("Integration disabled, skipping user sync");
            return Ok(JobOutcome::Disabled);
        }

        let group_name = settings.group_name.trim();
        if group_name.is_empty() {
            return Err(Error::missing_settings(&["group_name"]));
        }

        let group = self
            .directory
            .find_group(group_name)
            .await?
            .ok_or_else(|| Error::group_not_found(group_name))?;
        let desired = self.directory.group_members(&group).await?;
        info!(
            group = %group.name,
            members = desired.len(),
            "Resolved host group members"
        );

        let remote = self.remotes.create(settings)?;
        Reconciler::new(remote, settings.debug)
            .sync(&desired)
            .await
            .map(JobOutcome::Reconciled)
    }

    async fn sync_avatars(&self, settings: &BridgeSettings) -> Result<JobOutcome> {
        if !settings.enabled {
            debug!("Integration disabled, skipping avatar sync");
            return Ok(JobOutcome::Disabled);
        }

        let remote = self.remotes.create(settings)?;
        AvatarSyncer::new(remote, self.directory.clone())
            .sync_avatars()
            .await
            .map(JobOutcome::AvatarsSynced)
    }

    async fn modify_user(
        &self,
        settings: &BridgeSettings,
        action: MembershipAction,
        username: &Username,
    ) -> Result<JobOutcome> {
        if !settings.enabled {
            debug!(
                action = %action,
                username = %username,
                "Integration disabled, skipping change"
            );
            return Ok(JobOutcome::Disabled);
        }

        let remote = self.remotes.create(settings)?;
        IncrementalUpdater::new(remote).apply(action, username).await?;
        info!(action = %action, username = %username, "Remote membership updated");
        Ok(JobOutcome::MemberChanged {
            action,
            username: username.clone(),
        })
    }
}
