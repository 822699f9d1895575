/**
 * Logout Handler
 *
 * Destroys the server-side session and removes the cookie. Safe to call
 * while anonymous.
 */
use axum::response::{IntoResponse, Redirect, Response};

use crate::context::RequestContext;

/// Logout handler
pub async fn logout(mut ctx: RequestContext) -> Response {
    ctx.sign_out();
    ctx.flash("Logged out.");
    (ctx, Redirect::to("/login")).into_response()
}
