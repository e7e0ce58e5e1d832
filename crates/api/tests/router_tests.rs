mod common;

use api::app::build_router;
use api::config::{AppConfig, StoreSource};
use api::gql::build_schema;
use api::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use common::{sample_fixture, FlakyStore};
use infra::MemoryStore;
use serde_json::json;
use tower::ServiceExt;

fn test_config(gql_introspection: bool) -> AppConfig {
    AppConfig {
        store: StoreSource::Fixture("catalog.json".into()),
        port: 0,
        allowed_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        gql_introspection,
        batch_loading: false,
    }
}

fn router(state: AppState, gql_introspection: bool) -> Router {
    let config = test_config(gql_introspection);
    let schema = build_schema(state.clone(), config.schema_options());
    build_router(state, schema, &config)
}

fn catalog_router(gql_introspection: bool) -> Router {
    router(AppState::new(MemoryStore::new(sample_fixture())), gql_introspection)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_ok() {
    let response = catalog_router(false).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_health_store_down() {
    let app = router(
        AppState::new(FlakyStore {
            reads_available: true,
        }),
        false,
    );

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({ "error": "store unavailable" }));
}

#[tokio::test]
async fn test_post_graphql() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": "{ books(fiction: false) { title } }" }).to_string(),
        ))
        .unwrap();

    let response = catalog_router(false).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["data"], json!({ "books": [{ "title": "Sapiens" }] }));
}

#[tokio::test]
async fn test_graphiql_hidden_without_introspection() {
    let response = catalog_router(false).oneshot(get("/graphql")).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_graphiql_served_with_introspection() {
    let response = catalog_router(true).oneshot(get("/graphql")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.to_lowercase().contains("graphiql"));
}
