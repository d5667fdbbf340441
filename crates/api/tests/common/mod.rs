//! Shared helpers for the HTTP integration tests.
//!
//! Every test builds the app through [`build_app_router`], so requests pass
//! through the production middleware stack.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use cinedex_api::auth::password::hash_password;
use cinedex_api::config::ServerConfig;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;
use cinedex_core::roles::{ROLE_ADMIN, ROLE_VIEWER};
use cinedex_db::models::user::CreateUser;
use cinedex_db::repositories::UserRepo;

pub const ADMIN: (&str, &str) = ("admin", "admin-password-1");
pub const VIEWER: (&str, &str) = ("viewer", "viewer-password-1");

/// Test `ServerConfig` with the dev CORS origin and a 30-second timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        bootstrap_admin: None,
    }
}

pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, &test_config())
}

pub fn build_test_app_with(pool: PgPool, config: &ServerConfig) -> Router {
    build_app_router(AppState { pool }, config)
}

/// Insert the [`ADMIN`] and [`VIEWER`] users.
pub async fn seed_users(pool: &PgPool) {
    for ((username, password), role) in [(ADMIN, ROLE_ADMIN), (VIEWER, ROLE_VIEWER)] {
        UserRepo::create(
            pool,
            &CreateUser {
                username: username.to_string(),
                password_hash: hash_password(password).expect("hashing should succeed"),
                role: role.to_string(),
            },
        )
        .await
        .expect("user creation should succeed");
    }
}

pub fn basic(credentials: (&str, &str)) -> String {
    let (username, password) = credentials;
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, credentials: (&str, &str)) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, basic(credentials))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: Value,
    credentials: (&str, &str),
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, basic(credentials))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
