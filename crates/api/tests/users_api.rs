//! HTTP-level tests for registration, login and the current-user lookup.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_with_token, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn register(pool: &PgPool, email: &str) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users/register",
        json!({"name": "Alice", "email": email, "password": "correct-horse"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_user_and_token(pool: PgPool) {
    let json = register(&pool, "Alice@Example.com").await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["user"]["name"], "Alice");
    assert_eq!(json["data"]["user"]["email"], "alice@example.com");
    assert!(json["data"]["user"].get("password_hash").is_none());
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 15 * 60);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_returns_409(pool: PgPool) {
    register(&pool, "alice@example.com").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/users/register",
        json!({"name": "Other", "email": "ALICE@example.com", "password": "another-pass"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validates_input(pool: PgPool) {
    for body in [
        json!({"name": "", "email": "a@example.com", "password": "long-enough"}),
        json!({"name": "A", "email": "nope", "password": "long-enough"}),
        json!({"name": "A", "email": "a@example.com", "password": "short"}),
    ] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/users/register",
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_and_current_user(pool: PgPool) {
    register(&pool, "alice@example.com").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users/login",
        json!({"email": "alice@example.com", "password": "correct-horse"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let login = body_json(response).await;
    let token = login["data"]["access_token"].as_str().unwrap().to_string();

    let current = body_json(
        get_with_token(
            common::build_test_app(pool),
            "/api/v1/users/current",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(current["data"]["email"], "alice@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_password_returns_401(pool: PgPool) {
    register(&pool, "alice@example.com").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users/login",
        json!({"email": "alice@example.com", "password": "wrong-horse"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let unknown = post_json(
        common::build_test_app(pool),
        "/api/v1/users/login",
        json!({"email": "nobody@example.com", "password": "whatever1"}),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user_without_token_is_null(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/users/current").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user_with_bad_token_is_401(pool: PgPool) {
    let response = get_with_token(
        common::build_test_app(pool),
        "/api/v1/users/current",
        "not-a-jwt",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
