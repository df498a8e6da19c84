//! Tests for the avatar syncer

use rsb_application::AvatarSyncer;
use rsb_domain::Username;
use std::sync::Arc;

use crate::test_utils::{InMemoryDirectory, InMemoryRemote, RemoteCall, users};

#[tokio::test]
async fn test_rejected_avatar_does_not_stop_the_batch() {
    let remote = Arc::new(
        InMemoryRemote::with_members(&["alice", "bob", "carol"]).rejecting_avatars(&["bob"]),
    );
    let directory = Arc::new(
        InMemoryDirectory::default()
            .with_avatar("alice", "https://forum.test/a.png")
            .with_avatar("bob", "https://forum.test/b.png")
            .with_avatar("carol", "https://forum.test/c.png"),
    );

    let report = AvatarSyncer::new(remote.clone(), directory)
        .sync_avatars()
        .await
        .unwrap();

    let attempted: Vec<_> = remote
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            RemoteCall::Avatar(u, _) => Some(u.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(attempted, vec!["alice", "bob", "carol"]);
    assert_eq!(report.updated, 2);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].username, Username::from("bob"));
}

#[tokio::test]
async fn test_members_without_image_are_skipped() {
    let remote = Arc::new(InMemoryRemote::with_members(&["alice", "bob"]));
    let directory =
        Arc::new(InMemoryDirectory::default().with_avatar("bob", "https://forum.test/b.png"));

    let report = AvatarSyncer::new(remote.clone(), directory)
        .sync_avatars()
        .await
        .unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(report.skipped, users(&["alice"]));
    assert!(remote.calls().contains(&RemoteCall::Avatar(
        Username::from("bob"),
        "https://forum.test/b.png".to_string()
    )));
}

#[tokio::test]
async fn test_host_lookup_failure_becomes_a_warning() {
    let remote = Arc::new(InMemoryRemote::with_members(&["alice", "bob"]));
    let directory = Arc::new(
        InMemoryDirectory::default()
            .with_broken_avatar("alice")
            .with_avatar("bob", "https://forum.test/b.png"),
    );

    let report = AvatarSyncer::new(remote, directory)
        .sync_avatars()
        .await
        .unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("alice"));
}

#[tokio::test]
async fn test_membership_fetch_failure_is_fatal() {
    let remote = Arc::new(InMemoryRemote::with_members(&["alice"]).failing_fetch());
    let directory = Arc::new(InMemoryDirectory::default());

    let result = AvatarSyncer::new(remote, directory).sync_avatars().await;

    assert!(result.is_err());
}
