/**
 * Credential Provisioning Handlers
 *
 * Maintenance endpoints for the admin credential table. Both sit behind
 * the session gate: only an authenticated admin may provision or rehash
 * credentials.
 *
 * - POST /admins/provision - upsert one credential keyed by email; the
 *   password is always stored as a bcrypt hash
 * - POST /admins/rehash - migrate one legacy plaintext credential to a
 *   hash in place; already-hashed credentials are left untouched, so the
 *   action is idempotent and the original password keeps verifying
 */
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::auth::admins;
use crate::auth::credentials::{hash_password, StoredCredential};
use crate::auth::handlers::types::{ProvisionForm, RehashForm};
use crate::context::RequestContext;
use crate::error::AppError;
use crate::middleware::AuthAdmin;
use crate::server::state::AppState;

/// Create or replace an admin credential
pub async fn provision(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    mut ctx: RequestContext,
    Form(form): Form<ProvisionForm>,
) -> Result<Response, AppError> {
    let hashed = hash_password(&form.password)?;

    match admins::upsert(&state.db, &form.email, &hashed).await {
        Ok(()) => {
            tracing::info!(
                admin_id = admin.admin_id,
                email = %form.email,
                "admin credential provisioned"
            );
            ctx.flash("Admin credential saved.");
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to provision credential");
            ctx.flash(err.notice());
        }
    }
    Ok((ctx, Redirect::to("/")).into_response())
}

/// Rehash a legacy plaintext credential in place
pub async fn rehash(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    mut ctx: RequestContext,
    Form(form): Form<RehashForm>,
) -> Result<Response, AppError> {
    match admins::find_by_email(&state.db, &form.email).await {
        Ok(Some(record)) => match StoredCredential::parse(&record.password) {
            StoredCredential::Hashed(_) => {
                // Nothing to migrate; repeat calls are no-ops.
                ctx.flash("Credential is already hashed.");
            }
            StoredCredential::Plaintext(plaintext) => {
                let hashed = hash_password(plaintext)?;
                match admins::update_password(&state.db, &form.email, &hashed).await {
                    Ok(true) => {
                        tracing::info!(
                            admin_id = admin.admin_id,
                            email = %form.email,
                            "legacy credential rehashed"
                        );
                        ctx.flash("Credential rehashed.");
                    }
                    Ok(false) => ctx.flash("No admin with that email."),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to rehash credential");
                        ctx.flash(err.notice());
                    }
                }
            }
        },
        Ok(None) => ctx.flash("No admin with that email."),
        Err(err) => {
            tracing::error!(error = %err, "failed to look up credential");
            ctx.flash(err.notice());
        }
    }
    Ok((ctx, Redirect::to("/")).into_response())
}
