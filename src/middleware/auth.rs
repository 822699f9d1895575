/**
 * Session Gate Middleware
 *
 * Middleware protecting every listing/mutating route. The check is a pure
 * predicate over the session store: it never touches the credential
 * store.
 *
 * An anonymous request to a protected route gets a "Please log in first."
 * notice and a redirect to the login page. An authenticated request has
 * the admin identity attached to its extensions for handlers to extract.
 */
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::context::RequestContext;
use crate::error::AppError;
use crate::server::state::AppState;

/// Authenticated admin identity attached to gated requests
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatedAdmin {
    pub admin_id: i64,
}

/// Session gate middleware
///
/// 1. Resolves the session cookie against the session store
/// 2. Anonymous: flash a notice and redirect to `/login`
/// 3. Authenticated: attach [`AuthenticatedAdmin`] and continue
pub async fn require_admin(
    State(_state): State<AppState>,
    mut ctx: RequestContext,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(admin_id) = ctx.admin_id() else {
        tracing::debug!(path = %request.uri().path(), "anonymous request to protected route");
        ctx.flash(AppError::Unauthenticated.notice());
        return (ctx, Redirect::to("/login")).into_response();
    };

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin { admin_id });
    next.run(request).await
}

/// Axum extractor for the authenticated admin
///
/// Usable in handlers behind [`require_admin`]; rejects with 401 when the
/// middleware did not run.
#[derive(Clone, Copy, Debug)]
pub struct AuthAdmin(pub AuthenticatedAdmin);

impl axum::extract::FromRequestParts<AppState> for AuthAdmin {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAdmin not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthAdmin(admin))
    }
}
