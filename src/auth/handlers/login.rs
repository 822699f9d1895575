/**
 * Login Handlers
 *
 * GET /login renders the login form; POST /login verifies the submitted
 * email and password.
 *
 * # Authentication Process
 *
 * 1. Resolve the email to exactly one credential record
 * 2. Verify the password against the stored credential (hash or legacy
 *    plaintext, see `auth::credentials`)
 * 3. Rotate in a fresh authenticated session and redirect to the
 *    dashboard
 *
 * # Security Notes
 *
 * - An unknown email and a wrong password produce the same notice, so
 *   accounts cannot be enumerated
 * - A store failure produces a generic notice and no session transition
 * - Submitted passwords are never logged
 */
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use askama::Template;
use sqlx::SqlitePool;

use crate::auth::admins::{self, AdminCredential};
use crate::auth::credentials::verify_password;
use crate::auth::handlers::types::LoginForm;
use crate::context::RequestContext;
use crate::error::AppError;
use crate::server::state::AppState;
use crate::templates::LoginTemplate;

/// Resolve and verify a submitted email/password pair
///
/// `InvalidCredentials` covers both an unknown email and a failed
/// verification; store failures pass through as `StoreUnavailable`.
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<AdminCredential, AppError> {
    let admin = admins::find_by_email(pool, email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&admin.password, password) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(admin)
}

/// Login page handler
pub async fn login_page(
    State(_state): State<AppState>,
    mut ctx: RequestContext,
) -> Result<Response, AppError> {
    // Already logged in: straight to the dashboard.
    if ctx.is_authenticated() {
        return Ok(Redirect::to("/").into_response());
    }

    let page = LoginTemplate::new(ctx.take_notices()).render()?;
    Ok((ctx, Html(page)).into_response())
}

/// Login form submission handler
pub async fn login_submit(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<LoginForm>,
) -> Response {
    if ctx.is_authenticated() {
        return Redirect::to("/").into_response();
    }

    match authenticate(&state.db, &form.email, &form.password).await {
        Ok(admin) => {
            ctx.sign_in(admin.id);
            ctx.flash("Login successful.");
            tracing::info!(admin_id = admin.id, "admin logged in");
            (ctx, Redirect::to("/")).into_response()
        }
        Err(err) => {
            // No session transition on any failure path.
            tracing::warn!(error = %err, "login rejected");
            ctx.flash(err.notice());
            (ctx, Redirect::to("/login")).into_response()
        }
    }
}
