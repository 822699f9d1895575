//! Session gate integration tests.
//!
//! Every listing/mutating route must reject anonymous requests with a
//! redirect to the login page and a one-shot notice.

mod common;

use common::auth_helpers::{login, seed_admin};
use common::database::{test_pool, test_state, test_state_with_ttl};
use common::http::TestRequest;
use libchat_admin::routes::create_router;

const PROTECTED_GETS: &[&str] = &["/", "/delete/1", "/books", "/books/delete/1"];
const PROTECTED_POSTS: &[&str] = &[
    "/insert",
    "/update",
    "/books/add",
    "/books/update",
    "/admins/provision",
    "/admins/rehash",
];

#[tokio::test]
async fn test_protected_routes_redirect_anonymous_requests() {
    let app = create_router(test_state(test_pool().await));

    for path in PROTECTED_GETS {
        let response = TestRequest::get(path).send(&app).await;
        assert_eq!(
            response.location(),
            Some("/login"),
            "GET {path} was not gated"
        );
    }
    for path in PROTECTED_POSTS {
        let response = TestRequest::post(path).send(&app).await;
        assert_eq!(
            response.location(),
            Some("/login"),
            "POST {path} was not gated"
        );
    }
}

#[tokio::test]
async fn test_gate_redirect_carries_notice() {
    let app = create_router(test_state(test_pool().await));

    let response = TestRequest::get("/").send(&app).await;
    assert_eq!(response.location(), Some("/login"));

    let cookie = response
        .session_cookie()
        .expect("gate redirect should set a notice-carrying session");
    let page = TestRequest::get("/login").cookie(&cookie).send(&app).await;
    assert!(page.text().contains("Please log in first."));

    // One-shot: a reload shows no notice.
    let reload = TestRequest::get("/login").cookie(&cookie).send(&app).await;
    assert!(!reload.text().contains("Please log in first."));
}

#[tokio::test]
async fn test_expired_session_reads_as_anonymous() {
    let pool = test_pool().await;
    seed_admin(&pool, "admin@library.test", "admin1234").await;
    // Zero lifetime: the session is already expired by the next request.
    let app = create_router(test_state_with_ttl(pool, 0));

    let cookie = login(&app, "admin@library.test", "admin1234").await;
    let response = TestRequest::get("/").cookie(&cookie).send(&app).await;
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_forged_session_cookie_is_rejected() {
    let app = create_router(test_state(test_pool().await));

    let response = TestRequest::get("/")
        .cookie("libchat_admin_session=forged0000000000")
        .send(&app)
        .await;
    assert_eq!(response.location(), Some("/login"));
}
