#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use prompt_explorer_core::seed::SeedDocument;
use prompt_explorer_db::seeder::{self, SeedSummary};
use prompt_explorer_db::{schema, DbPool};
use tower::ServiceExt;

use prompt_explorer_api::config::ServerConfig;
use prompt_explorer_api::router::build_app_router;
use prompt_explorer_api::state::AppState;

/// Seed document used by most tests: two chained prompts, one node.
pub const SAMPLE_DOCUMENT: &str = r#"{
    "project": "P",
    "mainRequest": "R",
    "prompts": [
        { "title": "T1", "description": "D1", "subprompts": [ { "name": "N1", "action": "A1" } ] },
        { "title": "T2", "description": "D2", "subprompts": [] }
    ]
}"#;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        seed_file: PathBuf::from("prompt_list.json"),
        seed_on_startup: false,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// The per-test database handed out by `#[sqlx::test]`, with the schema in
/// place.
pub struct TestDb {
    pub pool: DbPool,
}

impl TestDb {
    pub async fn empty(pool: DbPool) -> Self {
        schema::reset_and_create_schema(&pool).await.unwrap();
        Self { pool }
    }

    /// A database seeded from [`SAMPLE_DOCUMENT`].
    pub async fn seeded(pool: DbPool) -> (Self, SeedSummary) {
        let db = Self::empty(pool).await;
        let doc = SeedDocument::from_json_str(SAMPLE_DOCUMENT).unwrap();
        let summary = seeder::seed(&db.pool, &doc).await.unwrap();
        (db, summary)
    }

    /// Build the full application router, with the same middleware stack
    /// production uses.
    pub fn app(&self) -> Router {
        let state = AppState {
            pool: self.pool.clone(),
        };
        build_app_router(state, &test_config())
    }

    pub async fn count(&self, table: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap();
        row.0
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a request and return its status and parsed body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn post_for_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = post_json(app, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}
