//! Tests for the Applozic group client

use mockito::{Matcher, Server};
use serde_json::json;

use rsb_domain::error::Error;
use rsb_domain::ports::{RemoteClientFactory, RemoteGroupClient};
use rsb_domain::{AvatarOutcome, BridgeSettings, MembershipAction, UserSet, Username};
use rsb_providers::{ApplozicClient, ApplozicClientFactory, HttpClientConfig};

fn settings() -> BridgeSettings {
    BridgeSettings {
        enabled: true,
        application_key: "app-key".to_string(),
        authorization: "dG9rZW4=".to_string(),
        client_group_id: "grp-1".to_string(),
        group_name: "staff".to_string(),
        debug: false,
    }
}

fn client(server: &Server, settings: BridgeSettings) -> ApplozicClient {
    let http = HttpClientConfig::default()
        .build_client()
        .expect("http client");
    ApplozicClient::new(http, server.url(), settings)
}

fn users(names: &[&str]) -> UserSet {
    names.iter().copied().collect()
}

#[tokio::test]
async fn test_fetch_group_members_parses_member_ids() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/ws/group/v2/info")
        .match_query(Matcher::UrlEncoded("clientGroupId".into(), "grp-1".into()))
        .match_header("content-type", "application/json")
        .match_header("application-key", "app-key")
        .match_header("authorization", "Basic dG9rZW4=")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"response": {"membersId": ["bob", "alice", "bob"]}}).to_string())
        .create_async()
        .await;

    let members = client(&server, settings())
        .fetch_group_members()
        .await
        .expect("fetch succeeds");

    assert_eq!(members, users(&["alice", "bob"]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_group_members_rejects_non_200_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/ws/group/v2/info")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = client(&server, settings())
        .fetch_group_members()
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, Error::Remote { .. }), "got {err:?}");
    assert!(err.to_string().contains("server error (500)"));
}

#[tokio::test]
async fn test_fetch_group_members_rejects_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/ws/group/v2/info")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"response": {"unexpected": true}}).to_string())
        .create_async()
        .await;

    let err = client(&server, settings())
        .fetch_group_members()
        .await
        .expect_err("malformed body must fail");

    assert!(matches!(err, Error::Remote { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_add_sends_create_new_flag_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/ws/group/add/users")
        .match_query(Matcher::UrlEncoded("createNew".into(), "true".into()))
        .match_header("content-type", "application/json")
        .match_header("application-key", "app-key")
        .match_header("authorization", "Basic dG9rZW4=")
        .match_body(Matcher::Json(json!({
            "userIds": ["alice", "bob"],
            "clientGroupIds": ["grp-1"]
        })))
        .with_status(200)
        .with_body(json!({"status": "success"}).to_string())
        .create_async()
        .await;

    client(&server, settings())
        .apply_membership_change(MembershipAction::Add, &users(&["bob", "alice"]))
        .await
        .expect("add succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_repeated_add_of_existing_members_succeeds() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/ws/group/add/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"status": "success"}).to_string())
        .expect(2)
        .create_async()
        .await;
    let client = client(&server, settings());
    let members = users(&["alice"]);

    client
        .apply_membership_change(MembershipAction::Add, &members)
        .await
        .expect("first add");
    client
        .apply_membership_change(MembershipAction::Add, &members)
        .await
        .expect("second add of the same member");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_remove_posts_to_remove_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/ws/group/remove/users")
        .match_query(Matcher::Missing)
        .match_header("content-type", "application/json")
        .match_header("application-key", "app-key")
        .match_header("authorization", "Basic dG9rZW4=")
        .match_body(Matcher::Json(json!({
            "userIds": ["carol"],
            "clientGroupIds": ["grp-1"]
        })))
        .with_status(200)
        .with_body(json!({"status": "success"}).to_string())
        .create_async()
        .await;

    client(&server, settings())
        .apply_membership_change(MembershipAction::Remove, &users(&["carol"]))
        .await
        .expect("remove succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_change_sends_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    client(&server, settings())
        .apply_membership_change(MembershipAction::Remove, &UserSet::new())
        .await
        .expect("empty change is a no-op");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_in_body_names_action_and_users() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/rest/ws/group/add/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"status": "error"}).to_string())
        .create_async()
        .await;

    let err = client(&server, settings())
        .apply_membership_change(MembershipAction::Add, &users(&["alice", "bob"]))
        .await
        .expect_err("status error must fail");

    assert!(matches!(err, Error::Remote { .. }), "got {err:?}");
    let message = err.to_string();
    assert!(message.contains("add"), "{message}");
    assert!(message.contains("alice, bob"), "{message}");
}

#[tokio::test]
async fn test_missing_credentials_fail_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let incomplete = BridgeSettings {
        application_key: String::new(),
        authorization: " ".to_string(),
        ..settings()
    };

    let err = client(&server, incomplete)
        .fetch_group_members()
        .await
        .expect_err("blank credentials must fail");

    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("application_key"), "{message}");
    assert!(message.contains("authorization"), "{message}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_avatar_update_sends_user_header_and_image_link() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/ws/user/update")
        .match_header("content-type", "application/json")
        .match_header("application-key", "app-key")
        .match_header("authorization", "Basic dG9rZW4=")
        .match_header("of-user-id", "alice")
        .match_body(Matcher::Json(json!({"imageLink": "https://cdn/alice.png"})))
        .with_status(200)
        .with_body(json!({"status": "success"}).to_string())
        .create_async()
        .await;

    let outcome = client(&server, settings())
        .update_user_avatar(&Username::from("alice"), "https://cdn/alice.png")
        .await
        .expect("avatar call returns an outcome");

    assert_eq!(outcome, AvatarOutcome::Updated);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_avatar_rejection_is_not_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/rest/ws/user/update")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let outcome = client(&server, settings())
        .update_user_avatar(&Username::from("alice"), "https://cdn/alice.png")
        .await
        .expect("rejection is downgraded");

    match outcome {
        AvatarOutcome::Rejected(warning) => {
            assert_eq!(warning.username.as_str(), "alice");
            assert!(warning.message.contains("authentication failed"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_avatar_with_missing_credentials_is_an_error() {
    let server = Server::new_async().await;
    let incomplete = BridgeSettings {
        client_group_id: String::new(),
        ..settings()
    };

    let err = client(&server, incomplete)
        .update_user_avatar(&Username::from("alice"), "https://cdn/alice.png")
        .await
        .expect_err("configuration problems stay fatal");

    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_factory_clients_use_its_origin_and_settings() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/ws/group/v2/info")
        .match_query(Matcher::UrlEncoded("clientGroupId".into(), "grp-2".into()))
        .with_status(200)
        .with_body(json!({"response": {"membersId": ["alice"]}}).to_string())
        .create_async()
        .await;
    let http = HttpClientConfig::default()
        .build_client()
        .expect("http client");
    let factory = ApplozicClientFactory::new(http, format!("{}/", server.url()));
    let settings = BridgeSettings {
        client_group_id: "grp-2".to_string(),
        ..settings()
    };

    let members = factory
        .create(&settings)
        .expect("client")
        .fetch_group_members()
        .await
        .expect("fetch succeeds");

    assert_eq!(members, users(&["alice"]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_member_ids_are_skipped() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/ws/group/v2/info")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"response": {"membersId": ["alice", "", "  ", " bob "]}}).to_string())
        .create_async()
        .await;

    let members = client(&server, settings())
        .fetch_group_members()
        .await
        .expect("fetch succeeds");

    assert_eq!(members, users(&["alice", "bob"]));
}
