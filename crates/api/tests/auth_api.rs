//! HTTP-level tests for Basic authentication and role gating.
//!
//! Reads need any valid credentials; writes need the admin role, and a
//! rejected write must not touch the catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, ADMIN, VIEWER};
use serde_json::json;
use sqlx::PgPool;

use cinedex_api::bootstrap::ensure_admin;
use cinedex_api::config::BootstrapAdmin;
use cinedex_db::repositories::UserRepo;

fn movie_body() -> serde_json::Value {
    json!({
        "name": "Inception",
        "description": "Dreams",
        "release_date": "2010-07-16",
        "rating": "8.8",
    })
}

async fn movie_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_read_without_credentials_is_401(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/movies").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("www-authenticate"));
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_password_is_401(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/movies", (ADMIN.0, "not-the-password")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_user_is_401(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/actors", ("ghost", "whatever-pass")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_viewer_can_read(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/movies", VIEWER).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_viewer_write_is_403_and_store_untouched(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(app, "/api/v1/movies/create", movie_body(), VIEWER).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(movie_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_forbidden_precedes_validation(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({ "name": "", "rating": "eleven" });
    let response = post_json_auth(app, "/api/v1/movies/create", body, VIEWER).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_write_is_401(pool: PgPool) {
    common::seed_users(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/movies/create", movie_body()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(movie_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_admin_is_created_once(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "root".into(),
        password: "correct-horse".into(),
    };

    assert!(ensure_admin(&pool, &admin).await.unwrap());
    assert!(!ensure_admin(&pool, &admin).await.unwrap());

    let user = UserRepo::find_by_username(&pool, "root").await.unwrap().unwrap();
    assert_eq!(user.role, "admin");
    assert_ne!(user.password_hash, "correct-horse");

    let app = common::build_test_app(pool);
    let credentials = ("root", "correct-horse");
    let response = post_json_auth(app, "/api/v1/movies/create", movie_body(), credentials).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_rejects_short_password(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "root".into(),
        password: "short".into(),
    };

    assert!(ensure_admin(&pool, &admin).await.is_err());
    assert!(UserRepo::find_by_username(&pool, "root").await.unwrap().is_none());
}
