//! Tests for the two-phase reconciler

use rsb_application::Reconciler;
use rsb_domain::MembershipAction;
use rsb_domain::error::Error;
use std::sync::Arc;

use crate::test_utils::{InMemoryRemote, RemoteCall, users};

fn position(calls: &[RemoteCall], action: MembershipAction) -> Option<usize> {
    calls
        .iter()
        .position(|c| matches!(c, RemoteCall::Apply(a, _) if *a == action))
}

#[tokio::test]
async fn test_adds_desired_then_removes_extras() {
    let remote = Arc::new(InMemoryRemote::with_members(&["bob", "carol"]));
    let reconciler = Reconciler::new(remote.clone(), false);

    let report = reconciler.sync(&users(&["alice", "bob"])).await.unwrap();

    assert_eq!(
        remote.calls(),
        vec![
            RemoteCall::Apply(MembershipAction::Add, users(&["alice", "bob"])),
            RemoteCall::Fetch,
            RemoteCall::Apply(MembershipAction::Remove, users(&["carol"])),
            RemoteCall::Fetch,
        ]
    );
    assert_eq!(remote.members(), users(&["alice", "bob"]));
    assert_eq!(report.added, users(&["alice", "bob"]));
    assert_eq!(report.removed, users(&["carol"]));
    assert_eq!(report.members, users(&["alice", "bob"]));
}

#[tokio::test]
async fn test_empty_desired_set_skips_add_and_clears_remote() {
    let remote = Arc::new(InMemoryRemote::with_members(&["x"]));
    let reconciler = Reconciler::new(remote.clone(), false);

    let report = reconciler.sync(&users(&[])).await.unwrap();

    assert_eq!(
        remote.calls(),
        vec![
            RemoteCall::Fetch,
            RemoteCall::Apply(MembershipAction::Remove, users(&["x"])),
            RemoteCall::Fetch,
        ]
    );
    assert!(remote.members().is_empty());
    assert!(report.members.is_empty());
}

#[tokio::test]
async fn test_already_in_sync_issues_no_remove() {
    let remote = Arc::new(InMemoryRemote::with_members(&["alice", "bob"]));
    let reconciler = Reconciler::new(remote.clone(), true);

    let report = reconciler.sync(&users(&["bob", "alice"])).await.unwrap();

    assert_eq!(position(&remote.calls(), MembershipAction::Remove), None);
    assert!(report.removed.is_empty());
    assert_eq!(remote.members(), users(&["alice", "bob"]));
}

#[tokio::test]
async fn test_converges_for_assorted_inputs_with_add_before_remove() {
    let cases: [(&[&str], &[&str]); 6] = [
        (&[], &[]),
        (&["a"], &[]),
        (&[], &["a", "b"]),
        (&["a", "b", "c"], &["c", "d", "e"]),
        (&["a", "b"], &["a", "b", "c", "d"]),
        (&["z", "y", "x"], &["x"]),
    ];

    for (desired, actual) in cases {
        let remote = Arc::new(InMemoryRemote::with_members(actual));
        let reconciler = Reconciler::new(remote.clone(), false);
        let desired = users(desired);

        reconciler.sync(&desired).await.unwrap();

        assert_eq!(remote.members(), desired, "desired {desired} from {actual:?}");
        let calls = remote.calls();
        if let (Some(add), Some(remove)) = (
            position(&calls, MembershipAction::Add),
            position(&calls, MembershipAction::Remove),
        ) {
            assert!(add < remove, "add must precede remove: {calls:?}");
        }
    }
}

#[tokio::test]
async fn test_non_convergence_is_a_reconciliation_error() {
    let remote = Arc::new(InMemoryRemote::with_members(&["alice", "mallory"]).sticky(&["mallory"]));
    let reconciler = Reconciler::new(remote.clone(), false);

    let err = reconciler.sync(&users(&["alice"])).await.unwrap_err();

    match err {
        Error::Reconciliation {
            missing, unexpected, ..
        } => {
            assert!(missing.is_empty());
            assert_eq!(unexpected, users(&["mallory"]));
        }
        other => panic!("expected reconciliation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_failure_aborts_before_remove() {
    let remote = Arc::new(InMemoryRemote::with_members(&["carol"]).failing_fetch());
    let reconciler = Reconciler::new(remote.clone(), false);

    let err = reconciler.sync(&users(&["alice"])).await.unwrap_err();

    assert_eq!(err.category(), "remote");
    assert_eq!(position(&remote.calls(), MembershipAction::Remove), None);
}
