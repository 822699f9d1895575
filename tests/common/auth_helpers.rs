//! Authentication helpers for integration tests.

use axum::Router;
use sqlx::SqlitePool;

use libchat_admin::auth::{admins, credentials};

use crate::common::http::TestRequest;

/// Seed an admin with a properly hashed credential, returning its id
pub async fn seed_admin(pool: &SqlitePool, email: &str, password: &str) -> i64 {
    let hashed = credentials::hash_password(password).expect("failed to hash password");
    admins::insert(pool, email, &hashed)
        .await
        .expect("failed to seed admin")
        .id
}

/// Seed an admin whose stored credential is legacy plaintext
pub async fn seed_admin_plaintext(pool: &SqlitePool, email: &str, password: &str) -> i64 {
    admins::insert(pool, email, password)
        .await
        .expect("failed to seed admin")
        .id
}

/// Log in through the real endpoint and return the session cookie
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = TestRequest::post("/login")
        .form(&[("email", email), ("password", password)])
        .send(app)
        .await;

    assert_eq!(
        response.location(),
        Some("/"),
        "login did not redirect to the dashboard"
    );
    response
        .session_cookie()
        .expect("login response set no session cookie")
}
