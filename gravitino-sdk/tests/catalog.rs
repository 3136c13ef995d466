mod common;

use std::collections::HashMap;

use common::{catalog_response, dropped_response, identifiers_response, StubServer};
use gravitino_sdk::{
    catalog::{Capability, CatalogChange, CatalogType},
    Error, NameIdentifier, Namespace,
};
use hyper::{Method, StatusCode};

#[tokio::test]
async fn load_catalog() {
    let server = StubServer::start().await;
    let catalog = server.load_catalog("hive", "relational").await;

    assert_eq!(catalog.name(), "hive");
    assert_eq!(catalog.catalog_type(), CatalogType::Relational);
    assert_eq!(catalog.provider(), "test");
    assert_eq!(catalog.comment(), Some("comment"));
    assert_eq!(catalog.properties().get("k").map(String::as_str), Some("v"));
    assert_eq!(catalog.audit().creator.as_deref(), Some("admin"));

    let req = server.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/api/metalakes/lake/catalogs/hive");
}

#[tokio::test]
async fn narrowing_follows_catalog_type() {
    let server = StubServer::start().await;

    let relational = server.load_catalog("hive", "relational").await;
    assert!(relational.as_schemas().is_ok());
    assert!(relational.as_table_catalog().is_ok());
    let err = relational.as_fileset_catalog().unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedCapability {
            catalog_type: CatalogType::Relational,
            capability: Capability::Filesets,
            ..
        }
    ));
    assert!(relational.as_topic_catalog().is_err());

    let fileset = server.load_catalog("hdfs", "fileset").await;
    let view = fileset.as_fileset_catalog().unwrap();
    assert_eq!(view.catalog().name(), "hdfs");
    assert!(fileset.as_table_catalog().is_err());

    let messaging = server.load_catalog("kafka", "messaging").await;
    assert!(messaging.as_topic_catalog().is_ok());
    assert!(messaging.as_schemas().is_ok());

    let unsupported = server.load_catalog("odd", "unsupported").await;
    assert!(unsupported.as_schemas().is_err());
}

#[tokio::test]
async fn list_catalogs() {
    let server = StubServer::start().await;
    server.ok(
        Method::GET,
        "/api/metalakes/lake/catalogs",
        identifiers_response(&[&["lake", "hive"], &["lake", "hdfs"]]),
    );
    let sdk = server.client();

    let idents = sdk
        .catalog
        .list(&Namespace::of_catalog("lake").unwrap())
        .await
        .unwrap();
    assert_eq!(
        idents,
        vec![
            NameIdentifier::of_catalog("lake", "hive").unwrap(),
            NameIdentifier::of_catalog("lake", "hdfs").unwrap(),
        ]
    );
}

#[tokio::test]
async fn list_catalogs_info() {
    let server = StubServer::start().await;
    server.ok(
        Method::GET,
        "/api/metalakes/lake/catalogs",
        r#"{"code":0,"catalogs":[{"name":"hive","type":"relational","provider":"hive","audit":{}},{"name":"hdfs","type":"fileset","provider":"hadoop","audit":{}}]}"#,
    );
    let sdk = server.client();

    let catalogs = sdk
        .catalog
        .list_info(&Namespace::of_catalog("lake").unwrap())
        .await
        .unwrap();
    assert_eq!(catalogs.len(), 2);
    assert!(catalogs[1].as_fileset_catalog().is_ok());
    assert_eq!(server.last_request().query.as_deref(), Some("details=true"));
}

#[tokio::test]
async fn create_catalog() {
    let server = StubServer::start().await;
    server.ok(
        Method::POST,
        "/api/metalakes/lake/catalogs",
        catalog_response("hdfs", "fileset"),
    );
    let sdk = server.client();

    let catalog = sdk
        .catalog
        .create(
            &NameIdentifier::of_catalog("lake", "hdfs").unwrap(),
            CatalogType::Fileset,
            "hadoop",
            Some("files"),
            HashMap::from([("location".to_string(), "/data".to_string())]),
        )
        .await
        .unwrap();
    assert_eq!(catalog.name(), "hdfs");

    let body = server.last_request().json();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "hdfs",
            "type": "fileset",
            "provider": "hadoop",
            "comment": "files",
            "properties": {"location": "/data"}
        })
    );
}

#[tokio::test]
async fn alter_catalog_sends_update_batch() {
    let server = StubServer::start().await;
    server.ok(
        Method::PUT,
        "/api/metalakes/lake/catalogs/hive",
        catalog_response("warehouse", "relational"),
    );
    let sdk = server.client();

    let catalog = sdk
        .catalog
        .alter(
            &NameIdentifier::of_catalog("lake", "hive").unwrap(),
            &[
                CatalogChange::rename("warehouse"),
                CatalogChange::remove_property("k"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(catalog.name(), "warehouse");

    let body = server.last_request().json();
    assert_eq!(
        body,
        serde_json::json!({
            "updates": [
                {"@type": "rename", "newName": "warehouse"},
                {"@type": "removeProperty", "property": "k"}
            ]
        })
    );
}

#[tokio::test]
async fn empty_alter_fails_before_sending() {
    let server = StubServer::start().await;
    let sdk = server.client();

    let err = sdk
        .catalog
        .alter(&NameIdentifier::of_catalog("lake", "hive").unwrap(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmptyBatch));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn invalid_identifier_fails_before_sending() {
    let server = StubServer::start().await;
    let sdk = server.client();

    let schema_ident = NameIdentifier::of_schema("lake", "hive", "db").unwrap();
    let err = sdk.catalog.load(&schema_ident).await.unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));

    let err = sdk.catalog.drop(&schema_ident).await.unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn load_missing_catalog() {
    let server = StubServer::start().await;
    let sdk = server.client();
    let ident = NameIdentifier::of_catalog("lake", "missing").unwrap();

    let err = sdk.catalog.load(&ident).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!sdk.catalog.exists(&ident).await.unwrap());
}

#[tokio::test]
async fn malformed_catalog_response() {
    let server = StubServer::start().await;
    server.ok(
        Method::GET,
        "/api/metalakes/lake/catalogs/hive",
        r#"{"code":0,"catalog":{"name":"hive","type":"relational","provider":"hive"}}"#,
    );
    let sdk = server.client();

    let err = sdk
        .catalog
        .load(&NameIdentifier::of_catalog("lake", "hive").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn server_errors_are_typed() {
    let server = StubServer::start().await;
    server.respond(
        Method::POST,
        "/api/metalakes/lake/catalogs",
        StatusCode::CONFLICT,
        r#"{"code":1004,"type":"CatalogAlreadyExistsException","message":"catalog hive already exists"}"#,
    );
    let sdk = server.client();

    let err = sdk
        .catalog
        .create(
            &NameIdentifier::of_catalog("lake", "hive").unwrap(),
            CatalogType::Relational,
            "hive",
            None,
            HashMap::new(),
        )
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(
        err.to_string(),
        "CatalogAlreadyExistsException (1004): catalog hive already exists"
    );
}

#[tokio::test]
async fn drop_catalog() {
    let server = StubServer::start().await;
    server.ok(
        Method::DELETE,
        "/api/metalakes/lake/catalogs/hive",
        dropped_response(true),
    );
    let sdk = server.client();

    let dropped = sdk
        .catalog
        .drop(&NameIdentifier::of_catalog("lake", "hive").unwrap())
        .await
        .unwrap();
    assert!(dropped);
}

#[tokio::test]
async fn list_with_blank_identifier_is_rejected() {
    let server = StubServer::start().await;
    server.ok(
        Method::GET,
        "/api/metalakes/lake/catalogs",
        r#"{"code":0,"identifiers":[{"namespace":["lake"],"name":"  "}]}"#,
    );
    let sdk = server.client();

    let err = sdk
        .catalog
        .list(&Namespace::of_catalog("lake").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
}
