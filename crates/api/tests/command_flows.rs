//! Command handlers driven against a mock backend

#[path = "support.rs"]
mod support;

use std::sync::Arc;

use plantview_app::{commands, AppContext};
use plantview_core::CredentialStore;
use plantview_domain::{ApiErrorKind, CatalogFilters, HistoryQuery};
use plantview_infra::InMemoryCredentialStore;
use serde_json::json;
use support::{config_for, context_for, signed_in_store, user_json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_stores_credentials_and_returns_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token/"))
        .and(body_json(json!({"email": "operator@plant.example", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a1", "refresh": "r1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryCredentialStore::new());
    let ctx = context_for(&server, Arc::clone(&store));

    let user = commands::login(&ctx, "operator@plant.example", "pw").await.expect("login");

    assert_eq!(user.email, "operator@plant.example");
    assert_eq!(store.access().await.unwrap().as_deref(), Some("a1"));
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r1"));
    assert_eq!(ctx.session.current_user(), Some(user));
}

#[tokio::test]
async fn rejected_login_is_not_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new"})))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = context_for(&server, signed_in_store());

    let err = commands::login(&ctx, "operator@plant.example", "wrong").await.unwrap_err();

    assert_eq!(err.status, 401);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn logout_wipes_credentials() {
    let server = MockServer::start().await;
    let store = signed_in_store();
    let ctx = context_for(&server, Arc::clone(&store));

    commands::logout(&ctx).await.expect("logout");

    assert_eq!(store.access().await.unwrap(), None);
    assert_eq!(store.refresh().await.unwrap(), None);
    assert!(ctx.session.current_user().is_none());
}

#[tokio::test]
async fn status_reports_signed_out_when_refresh_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let ctx = context_for(&server, Arc::clone(&store));

    let status = commands::session_status(&ctx).await.expect("status never fails");

    assert!(!status.authenticated);
    assert!(status.user.is_none());
    assert_eq!(store.access().await.unwrap(), None);
    assert_eq!(store.refresh().await.unwrap(), None);
}

#[tokio::test]
async fn me_recovers_from_expired_access() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .and(body_json(json!({"refresh": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let ctx = context_for(&server, Arc::clone(&store));

    let user = commands::current_user(&ctx).await.expect("me after refresh");

    assert_eq!(user.id, "42");
    assert_eq!(store.access().await.unwrap().as_deref(), Some("new"));
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r1"));
}

#[tokio::test]
async fn catalog_sends_client_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(query_param("client", "7"))
        .and(query_param("product_code", "P-100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "product_code": "P-100",
            "product_description": "Steel bracket",
            "units_per_package": 10.0,
            "units": 1.0,
            "price_ranges": []
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context_for(&server, signed_in_store());
    let filters = CatalogFilters { product_code: Some("P-100".into()), ..CatalogFilters::for_client(7) };

    let products = commands::list_products(&ctx, &filters).await.expect("catalog");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_code, "P-100");
}

#[tokio::test]
async fn catalog_rejects_invalid_client_without_request() {
    let server = MockServer::start().await;
    let ctx = context_for(&server, signed_in_store());

    let err = commands::list_products(&ctx, &CatalogFilters::for_client(0)).await.unwrap_err();

    assert_eq!(err.status, 400);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn history_error_message_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/production-history"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context_for(&server, signed_in_store());

    let err = commands::list_executions(&ctx, &HistoryQuery::default()).await.unwrap_err();

    assert_eq!(err.status, 503);
    assert_eq!(err.message, "maintenance window");
    assert_eq!(err.kind, ApiErrorKind::Application);
}

#[tokio::test]
async fn execution_rejects_non_positive_id_without_request() {
    let server = MockServer::start().await;
    let ctx = context_for(&server, signed_in_store());

    for id in [0, -5] {
        let err = commands::get_execution(&ctx, id).await.unwrap_err();
        assert_eq!(err.status, 400);
    }
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let server = MockServer::start().await;
    let mut config = config_for(&server);
    config.api.base_url = "http://127.0.0.1:1".to_string();
    let ctx = AppContext::with_credentials(config, signed_in_store()).expect("context");

    let err = commands::list_executions(&ctx, &HistoryQuery::default()).await.unwrap_err();

    assert_eq!(err.status, 0);
    assert!(err.is_transport());
}
