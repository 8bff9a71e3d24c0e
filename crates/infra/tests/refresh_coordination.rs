//! Integration tests for credential refresh coordination
//!
//! **Coverage:**
//! - Concurrent 401s share one refresh call
//! - Failed shared refresh fails every waiter and wipes credentials once
//! - A settled refresh is never reused by a later 401
//! - Separate clients never share a refresh
//! - A caller dropping its request does not cancel the shared refresh
//! - A rotated refresh credential is the one sent by the next refresh

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::time::Duration;

use futures::future::join_all;
use plantview_core::CredentialStore;
use plantview_domain::ApiErrorKind;
use serde_json::{json, Value};
use support::{client_for, signed_in_store, REFRESH_PATH};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_protected(server: &MockServer, resource: &str) {
    Mock::given(method("GET"))
        .and(path(resource))
        .and(header("Authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(resource))
        .and(header("Authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resource": resource})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn concurrent_unauthorized_requests_share_one_refresh() {
    let server = MockServer::start().await;
    for resource in ["/catalog", "/production-history", "/auth/me"] {
        mount_protected(&server, resource).await;
    }
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "new"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let calls = ["/catalog", "/production-history", "/auth/me", "/catalog", "/auth/me"]
        .into_iter()
        .map(|resource| {
            let client = client.clone();
            async move { client.get::<Value>(resource).await }
        });
    let results = join_all(calls).await;

    for result in results {
        let body = result.expect("every caller should succeed after the shared refresh");
        assert!(body["resource"].is_string());
    }
    assert_eq!(store.access().await.unwrap().as_deref(), Some("new"));
    assert!(!client.is_refreshing());
}

#[tokio::test]
async fn failed_shared_refresh_fails_all_waiters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(401))
        .expect(4)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Token is blacklisted"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let results = join_all((0..4).map(|_| {
        let client = client.clone();
        async move { client.get::<Value>("/catalog").await }
    }))
    .await;

    for result in results {
        let err = result.unwrap_err();
        assert_eq!(err.status, 401);
        assert_eq!(err.message, "Token is blacklisted");
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    }
    assert!(store.access().await.unwrap().is_none());
    assert!(store.refresh().await.unwrap().is_none());
}

#[tokio::test]
async fn settled_refresh_is_not_reused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(header("Authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(header("Authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new"})))
        .expect(2)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let _: Value = client.get("/catalog").await.unwrap();
    // The backend revokes the new credential; the next 401 needs a new refresh.
    store.set_access("old").await.unwrap();
    let _: Value = client.get("/catalog").await.unwrap();
}

#[tokio::test]
async fn separate_clients_refresh_independently() {
    let server = MockServer::start().await;
    mount_protected(&server, "/catalog").await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "new"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let first = client_for(&server, signed_in_store());
    let second = client_for(&server, signed_in_store());

    let (a, b) = tokio::join!(first.get::<Value>("/catalog"), second.get::<Value>("/catalog"));
    a.unwrap();
    b.unwrap();
}

#[tokio::test]
async fn dropped_caller_does_not_cancel_refresh() {
    let server = MockServer::start().await;
    mount_protected(&server, "/catalog").await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "new", "refresh": "r2"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let abandoned = tokio::time::timeout(Duration::from_millis(50), client.get::<Value>("/catalog"));
    assert!(abandoned.await.is_err(), "caller should give up before the refresh settles");
    assert!(client.is_refreshing());

    let body: Value = client.get("/catalog").await.unwrap();
    assert_eq!(body["resource"], "/catalog");
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r2"));
}

#[tokio::test]
async fn next_refresh_sends_rotated_credential() {
    let server = MockServer::start().await;
    mount_protected(&server, "/catalog").await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(header("Authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a1"})))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(header("Authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(header("Authorization", "Bearer a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a2"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({"refresh": "r1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "a1", "refresh": "r2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({"refresh": "r2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a2"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let first: Value = client.get("/catalog").await.unwrap();
    assert_eq!(first["access"], "a1");
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r2"));

    let second: Value = client.get("/catalog").await.unwrap();
    assert_eq!(second["access"], "a2");
    assert_eq!(store.access().await.unwrap().as_deref(), Some("a2"));
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r2"));

    server.verify().await;
}
