//! Wire protocol tests against a mock compute API
//!
//! The mock server lives on a private tokio runtime while the blocking
//! client runs on the test thread; declaring the runtime first keeps it
//! alive until the server's drop-time expectations have been checked.

use cwp_collections::api::ApiClient;
use cwp_collections::collection::Collection;
use cwp_collections::config::ApiConfig;
use cwp_collections::error::CollectionsError;
use cwp_collections::operations::{
    UpsertOutcome, delete_collection, delete_collections, upsert_collection,
};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn authenticated_client(rt: &Runtime, server: &MockServer) -> ApiClient {
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/v1/authenticate"))
            .and(body_json(json!({"username": "admin", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
            .mount(server),
    );

    let config = ApiConfig::new(&server.uri(), "admin", "secret", false);
    let mut client = ApiClient::new(&config).expect("Should build client");
    client
        .authenticate("admin", "secret")
        .expect("Should authenticate");
    client
}

fn record(name: &str) -> Value {
    serde_json::to_value(Collection::catch_all(name)).expect("Should encode")
}

#[test]
fn fresh_create_returns_created_without_put() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let client = authenticated_client(&rt, &server);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/v1/collections"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(json!({"name": "prod", "images": ["*"]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("PUT"))
            .and(path_regex("^/api/v1/collections/.*"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server),
    );

    let outcome = upsert_collection(&client, "prod", &record("prod"), false).unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);
}

#[test]
fn conflict_without_overwrite_never_puts() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let client = authenticated_client(&rt, &server);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/v1/collections"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"err": "collection already exists"})),
            )
            .expect(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("PUT"))
            .and(path_regex("^/api/v1/collections/.*"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server),
    );

    let outcome = upsert_collection(&client, "prod", &record("prod"), false).unwrap();
    assert_eq!(outcome, UpsertOutcome::Failed);
}

#[test]
fn conflict_with_overwrite_puts_exactly_once() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let client = authenticated_client(&rt, &server);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/v1/collections"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"err": "collection already exists"})),
            )
            .expect(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("PUT"))
            .and(path("/api/v1/collections/prod"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(json!({"name": "prod"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );

    let outcome = upsert_collection(&client, "prod", &record("prod"), true).unwrap();
    assert_eq!(outcome, UpsertOutcome::Updated);
}

#[test]
fn failed_overwrite_put_reports_failure() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let client = authenticated_client(&rt, &server);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/v1/collections"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"err": "collection already exists"})),
            )
            .expect(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("PUT"))
            .and(path("/api/v1/collections/prod"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&server),
    );

    let outcome = upsert_collection(&client, "prod", &record("prod"), true).unwrap();
    assert_eq!(outcome, UpsertOutcome::Failed);
}

#[test]
fn rejected_login_surfaces_the_error_body() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/v1/authenticate"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"err": "invalid credentials"})),
            )
            .mount(&server),
    );

    let config = ApiConfig::new(&server.uri(), "admin", "wrong", false);
    let mut client = ApiClient::new(&config).unwrap();
    let err = client.authenticate("admin", "wrong").unwrap_err();

    let collections_err = err.downcast_ref::<CollectionsError>().unwrap();
    assert!(matches!(collections_err, CollectionsError::Auth { .. }));
    assert_eq!(collections_err.exit_code(), 2);
    assert!(err.to_string().contains("invalid credentials"));
}

#[test]
fn unreachable_console_is_a_transport_error() {
    // Discard port; nothing listens there
    let config = ApiConfig::new("http://127.0.0.1:9", "admin", "secret", false);
    let mut client = ApiClient::new(&config).unwrap();

    let err = client.authenticate("admin", "secret").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CollectionsError>(),
        Some(CollectionsError::Transport(_))
    ));
}

#[test]
fn delete_reports_server_verdict() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let client = authenticated_client(&rt, &server);

    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/api/v1/collections/stale"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/api/v1/collections/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"err": "collection not found"})),
            )
            .expect(1)
            .mount(&server),
    );

    assert!(delete_collection(&client, "stale").unwrap());
    assert!(!delete_collection(&client, "missing").unwrap());
}

#[test]
fn batch_delete_attempts_every_name() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let client = authenticated_client(&rt, &server);

    for name in ["a", "c"] {
        rt.block_on(
            Mock::given(method("DELETE"))
                .and(path(format!("/api/v1/collections/{name}")))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server),
        );
    }
    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/api/v1/collections/b"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"err": "collection not found"})),
            )
            .expect(1)
            .mount(&server),
    );

    let names: Vec<String> = ["a", "b", "c"].map(str::to_owned).into();
    let summary = delete_collections(&client, &names).unwrap();

    assert_eq!(summary.deleted, vec!["a", "c"]);
    assert_eq!(summary.not_deleted, vec!["b"]);
    assert!(!summary.all_deleted());
}
