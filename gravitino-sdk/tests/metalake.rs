mod common;

use std::collections::HashMap;

use common::{dropped_response, StubServer, AUDIT};
use gravitino_sdk::{metalake::MetalakeChange, Error, NameIdentifier};
use hyper::Method;

fn metalake_response(name: &str) -> String {
    format!(r#"{{"code":0,"metalake":{{"name":"{name}","comment":"c","properties":{{}},"audit":{AUDIT}}}}}"#)
}

#[tokio::test]
async fn metalake_create_load_and_drop() {
    let server = StubServer::start().await;
    server.ok(Method::POST, "/api/metalakes", metalake_response("lake"));
    server.ok(Method::GET, "/api/metalakes/lake", metalake_response("lake"));
    server.ok(Method::DELETE, "/api/metalakes/lake", dropped_response(true));
    let sdk = server.client();
    let ident = NameIdentifier::of_metalake("lake").unwrap();

    let metalake = sdk
        .metalake
        .create(&ident, Some("c"), HashMap::new())
        .await
        .unwrap();
    assert_eq!(metalake.name, "lake");
    assert_eq!(
        server.last_request().json(),
        serde_json::json!({"name": "lake", "comment": "c", "properties": {}})
    );

    assert!(sdk.metalake.exists(&ident).await.unwrap());
    assert!(sdk.metalake.drop(&ident).await.unwrap());

    let other = NameIdentifier::of_metalake("other").unwrap();
    assert!(!sdk.metalake.exists(&other).await.unwrap());
    assert!(!sdk.metalake.drop(&other).await.unwrap());
}

#[tokio::test]
async fn list_metalakes() {
    let server = StubServer::start().await;
    server.ok(
        Method::GET,
        "/api/metalakes",
        r#"{"code":0,"metalakes":[{"name":"a","audit":{}},{"name":"b","audit":{}}]}"#,
    );
    let sdk = server.client();

    let names: Vec<String> = sdk
        .metalake
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["a", "b"]);
}

#[tokio::test]
async fn alter_metalake() {
    let server = StubServer::start().await;
    server.ok(Method::PUT, "/api/metalakes/lake", metalake_response("lake"));
    let sdk = server.client();

    sdk.metalake
        .alter(
            &NameIdentifier::of_metalake("lake").unwrap(),
            &[
                MetalakeChange::update_comment("new comment"),
                MetalakeChange::set_property("owner", ""),
            ],
        )
        .await
        .unwrap();
    assert_eq!(
        server.last_request().json(),
        serde_json::json!({
            "updates": [
                {"@type": "updateComment", "newComment": "new comment"},
                {"@type": "setProperty", "property": "owner", "value": ""}
            ]
        })
    );

    let err = sdk
        .metalake
        .alter(
            &NameIdentifier::of_metalake("lake").unwrap(),
            &[MetalakeChange::rename(" ")],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let server = StubServer::start().await;
    server.ok(
        Method::GET,
        "/api/version",
        r#"{"code":0,"version":{"version":"0.5.0","compileDate":"01/05/2024","gitCommit":"abc"}}"#,
    );
    let sdk = server.client();

    let version = sdk.version.server_version().await.unwrap();
    assert_eq!(version.version, "0.5.0");
    assert!(server.last_request().authorization.is_none());

    sdk.set_token(Some("secret".into())).await;
    sdk.version.server_version().await.unwrap();
    assert_eq!(
        server.last_request().authorization.as_deref(),
        Some("Bearer secret")
    );
}

#[tokio::test]
async fn unreachable_server() {
    let sdk = gravitino_sdk::Client::new("http://127.0.0.1:1/");
    let ident = NameIdentifier::of_metalake("lake").unwrap();

    let err = sdk.metalake.load(&ident).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(!sdk.metalake.drop(&ident).await.unwrap());
}
