/**
 * Intent CRUD Handlers
 *
 * Every mutating action runs one statement, flashes a notice (success or
 * a generic store-failure message), and redirects back to the dashboard.
 * Store failures never produce an error page here; the dashboard renders
 * with whatever could be read.
 */
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use askama::Template;
use serde::Deserialize;

use crate::context::RequestContext;
use crate::error::AppError;
use crate::intents::db;
use crate::server::state::AppState;
use crate::templates::DashboardTemplate;

/// Add-intent form data
#[derive(Debug, Deserialize)]
pub struct IntentForm {
    pub tag: String,
    pub patterns: String,
    pub responses: String,
}

/// Update-intent form data (id travels as a hidden field)
#[derive(Debug, Deserialize)]
pub struct IntentUpdateForm {
    pub id: i64,
    pub tag: String,
    pub patterns: String,
    pub responses: String,
}

/// Dashboard handler: list all intents
pub async fn dashboard(
    State(state): State<AppState>,
    mut ctx: RequestContext,
) -> Result<Response, AppError> {
    let intents = match db::list(&state.db).await {
        Ok(intents) => intents,
        Err(err) => {
            tracing::error!(error = %err, "failed to list intents");
            ctx.flash(err.notice());
            Vec::new()
        }
    };

    let page = DashboardTemplate::new(ctx.take_notices(), intents).render()?;
    Ok((ctx, Html(page)).into_response())
}

/// Add an intent, then redirect to the dashboard
pub async fn insert(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<IntentForm>,
) -> Response {
    match db::insert(&state.db, &form.tag, &form.patterns, &form.responses).await {
        Ok(intent) => {
            tracing::info!(intent_id = intent.id, tag = %intent.tag, "intent added");
            ctx.flash("Intent added.");
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to insert intent");
            ctx.flash(err.notice());
        }
    }
    (ctx, Redirect::to("/")).into_response()
}

/// Update an intent, then redirect to the dashboard
pub async fn update(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<IntentUpdateForm>,
) -> Response {
    match db::update(&state.db, form.id, &form.tag, &form.patterns, &form.responses).await {
        Ok(true) => {
            tracing::info!(intent_id = form.id, "intent updated");
            ctx.flash("Intent updated.");
        }
        Ok(false) => ctx.flash("No such intent."),
        Err(err) => {
            tracing::error!(error = %err, "failed to update intent");
            ctx.flash(err.notice());
        }
    }
    (ctx, Redirect::to("/")).into_response()
}

/// Delete an intent, then redirect to the dashboard
pub async fn delete(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Path(id): Path<i64>,
) -> Response {
    match db::delete(&state.db, id).await {
        Ok(true) => {
            tracing::info!(intent_id = id, "intent deleted");
            ctx.flash("Intent deleted.");
        }
        Ok(false) => ctx.flash("No such intent."),
        Err(err) => {
            tracing::error!(error = %err, "failed to delete intent");
            ctx.flash(err.notice());
        }
    }
    (ctx, Redirect::to("/")).into_response()
}
