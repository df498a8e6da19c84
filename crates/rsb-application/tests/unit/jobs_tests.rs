//! Tests for the job runner

use rsb_application::JobRunner;
use rsb_domain::{BridgeSettings, Job, JobOutcome, MembershipAction, Username};
use std::sync::Arc;

use crate::test_utils::{
    InMemoryDirectory, InMemoryRemote, MutableSettings, RemoteCall, StaticRemoteFactory,
    enabled_settings, users,
};

struct Harness {
    remote: Arc<InMemoryRemote>,
    directory: Arc<InMemoryDirectory>,
    factory: Arc<StaticRemoteFactory>,
    settings: Arc<MutableSettings>,
    runner: JobRunner,
}

fn harness(
    settings: BridgeSettings,
    remote: InMemoryRemote,
    directory: InMemoryDirectory,
) -> Harness {
    let remote = Arc::new(remote);
    let directory = Arc::new(directory);
    let factory = Arc::new(StaticRemoteFactory::new(remote.clone()));
    let settings = Arc::new(MutableSettings::new(settings));
    let runner = JobRunner::new(settings.clone(), directory.clone(), factory.clone());
    Harness {
        remote,
        directory,
        factory,
        settings,
        runner,
    }
}

#[tokio::test]
async fn test_sync_users_reconciles_host_group() {
    let h = harness(
        enabled_settings("members"),
        InMemoryRemote::with_members(&["bob", "carol"]),
        InMemoryDirectory::default().with_group("members", &["alice", "bob"]),
    );

    let outcome = h.runner.run(&Job::SyncUsers).await.unwrap();

    match outcome {
        JobOutcome::Reconciled(report) => {
            assert_eq!(report.members, users(&["alice", "bob"]));
            assert_eq!(report.removed, users(&["carol"]));
        }
        other => panic!("expected reconciliation, got {other:?}"),
    }
    assert_eq!(h.remote.members(), users(&["alice", "bob"]));
}

#[tokio::test]
async fn test_disabled_integration_is_a_no_op() {
    let settings = BridgeSettings {
        enabled: false,
        ..enabled_settings("members")
    };
    let h = harness(
        settings,
        InMemoryRemote::with_members(&["carol"]),
        InMemoryDirectory::default().with_group("members", &["alice"]),
    );

    assert_eq!(h.runner.run(&Job::SyncUsers).await.unwrap(), JobOutcome::Disabled);
    assert_eq!(h.runner.run(&Job::SyncAvatars).await.unwrap(), JobOutcome::Disabled);
    assert_eq!(h.directory.lookups(), 0);
    assert_eq!(h.factory.created(), 0);
    assert!(h.remote.calls().is_empty());
}

#[tokio::test]
async fn test_missing_host_group_fails_without_touching_remote() {
    let h = harness(
        enabled_settings("ghosts"),
        InMemoryRemote::with_members(&["carol"]),
        InMemoryDirectory::default().with_group("members", &["alice"]),
    );

    let err = h.runner.run(&Job::SyncUsers).await.unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("ghosts"));
    assert_eq!(h.factory.created(), 0);
    assert!(h.remote.calls().is_empty());
}

#[tokio::test]
async fn test_blank_group_name_is_a_configuration_error() {
    let h = harness(
        enabled_settings("  "),
        InMemoryRemote::default(),
        InMemoryDirectory::default(),
    );

    let err = h.runner.run(&Job::SyncUsers).await.unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("group_name"));
    assert_eq!(h.directory.lookups(), 0);
}

#[tokio::test]
async fn test_missing_credentials_fail_before_any_remote_call() {
    let settings = BridgeSettings {
        authorization: String::new(),
        ..enabled_settings("members")
    };
    let h = harness(
        settings,
        InMemoryRemote::with_members(&["carol"]),
        InMemoryDirectory::default().with_group("members", &["alice"]),
    );

    let err = h.runner.run(&Job::SyncUsers).await.unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("authorization"));
    assert!(h.remote.calls().is_empty());
}

#[tokio::test]
async fn test_modify_user_applies_single_change() {
    let h = harness(
        enabled_settings("members"),
        InMemoryRemote::with_members(&["alice"]),
        InMemoryDirectory::default(),
    );
    let job = Job::ModifyUser {
        action: MembershipAction::Remove,
        username: Username::from("alice"),
    };

    let outcome = h.runner.run(&job).await.unwrap();

    assert_eq!(
        outcome,
        JobOutcome::MemberChanged {
            action: MembershipAction::Remove,
            username: Username::from("alice"),
        }
    );
    assert_eq!(
        h.remote.calls(),
        vec![RemoteCall::Apply(MembershipAction::Remove, users(&["alice"]))]
    );
    assert!(h.remote.members().is_empty());
}

#[tokio::test]
async fn test_modify_user_is_skipped_while_disabled() {
    let h = harness(
        BridgeSettings {
            enabled: false,
            ..enabled_settings("members")
        },
        InMemoryRemote::with_members(&["bob"]),
        InMemoryDirectory::default(),
    );
    let job = Job::ModifyUser {
        action: MembershipAction::Remove,
        username: Username::from("bob"),
    };

    let outcome = h.runner.run(&job).await.unwrap();

    assert_eq!(outcome, JobOutcome::Disabled);
    assert!(h.remote.calls().is_empty());
    assert_eq!(h.remote.members(), users(&["bob"]));
}

#[tokio::test]
async fn test_sync_avatars_job_pushes_images() {
    let h = harness(
        enabled_settings("members"),
        InMemoryRemote::with_members(&["alice"]),
        InMemoryDirectory::default().with_avatar("alice", "https://forum.test/a.png"),
    );

    match h.runner.run(&Job::SyncAvatars).await.unwrap() {
        JobOutcome::AvatarsSynced(report) => assert_eq!(report.updated, 1),
        other => panic!("expected avatar sync, got {other:?}"),
    }
}

#[tokio::test]
async fn test_settings_are_read_fresh_on_each_run() {
    let h = harness(
        BridgeSettings {
            enabled: false,
            ..enabled_settings("members")
        },
        InMemoryRemote::default(),
        InMemoryDirectory::default().with_group("members", &["alice"]),
    );

    assert_eq!(h.runner.run(&Job::SyncUsers).await.unwrap(), JobOutcome::Disabled);

    h.settings.set(enabled_settings("members"));

    assert!(matches!(
        h.runner.run(&Job::SyncUsers).await.unwrap(),
        JobOutcome::Reconciled(_)
    ));
    assert_eq!(h.remote.members(), users(&["alice"]));
}
