/**
 * Router Configuration
 *
 * The canonical route table for the admin backend.
 *
 * # Routes
 *
 * ## Public
 *
 * - `GET /login` - login form
 * - `POST /login` - login submission
 * - `GET /logout` - destroy the session
 *
 * ## Protected (session gate)
 *
 * - `GET /` - intent dashboard
 * - `POST /insert`, `POST /update`, `GET /delete/{id}` - intent CRUD
 * - `GET /books`, `POST /books/add`, `POST /books/update`,
 *   `GET /books/delete/{id}` - book CRUD
 * - `POST /admins/provision`, `POST /admins/rehash` - credential
 *   maintenance
 *
 * Deletes use GET because the pages link to them directly.
 */
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{login_page, login_submit, logout, provision, rehash};
use crate::middleware::require_admin;
use crate::server::state::AppState;
use crate::{books, intents};

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Everything below the gate: listings, mutations, maintenance.
    let protected = Router::new()
        .route("/", get(intents::handlers::dashboard))
        .route("/insert", post(intents::handlers::insert))
        .route("/update", post(intents::handlers::update))
        .route("/delete/{id}", get(intents::handlers::delete))
        .route("/books", get(books::handlers::list))
        .route("/books/add", post(books::handlers::add))
        .route("/books/update", post(books::handlers::update))
        .route("/books/delete/{id}", get(books::handlers::delete))
        .route("/admins/provision", post(provision))
        .route("/admins/rehash", post(rehash))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    let public = Router::new()
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", get(logout));

    public
        .merge(protected)
        .fallback(|| async { "404 Not Found" })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
