//! Book CRUD handlers.
//!
//! Same shape as the intent handlers: one statement per action, flash a
//! notice, redirect back to the book listing.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use askama::Template;
use serde::Deserialize;

use crate::books::db;
use crate::context::RequestContext;
use crate::error::AppError;
use crate::server::state::AppState;
use crate::templates::BooksTemplate;

/// Add-book form data
#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub subject: String,
    pub location: String,
    pub availability: String,
}

/// Update-book form data (id travels as a hidden field)
#[derive(Debug, Deserialize)]
pub struct BookUpdateForm {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub location: String,
    pub availability: String,
}

/// List all books
pub async fn list(
    State(state): State<AppState>,
    mut ctx: RequestContext,
) -> Result<Response, AppError> {
    let books = match db::list(&state.db).await {
        Ok(books) => books,
        Err(err) => {
            tracing::error!(error = %err, "failed to list books");
            ctx.flash(err.notice());
            Vec::new()
        }
    };

    let page = BooksTemplate::new(ctx.take_notices(), books).render()?;
    Ok((ctx, Html(page)).into_response())
}

/// Add a book, then redirect to the listing
pub async fn add(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<BookForm>,
) -> Response {
    match db::insert(
        &state.db,
        &form.title,
        &form.subject,
        &form.location,
        &form.availability,
    )
    .await
    {
        Ok(book) => {
            tracing::info!(book_id = book.id, title = %book.title, "book added");
            ctx.flash("Book added.");
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to insert book");
            ctx.flash(err.notice());
        }
    }
    (ctx, Redirect::to("/books")).into_response()
}

/// Update a book, then redirect to the listing
pub async fn update(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<BookUpdateForm>,
) -> Response {
    match db::update(
        &state.db,
        form.id,
        &form.title,
        &form.subject,
        &form.location,
        &form.availability,
    )
    .await
    {
        Ok(true) => {
            tracing::info!(book_id = form.id, "book updated");
            ctx.flash("Book updated.");
        }
        Ok(false) => ctx.flash("No such book."),
        Err(err) => {
            tracing::error!(error = %err, "failed to update book");
            ctx.flash(err.notice());
        }
    }
    (ctx, Redirect::to("/books")).into_response()
}

/// Delete a book, then redirect to the listing
pub async fn delete(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Path(id): Path<i64>,
) -> Response {
    match db::delete(&state.db, id).await {
        Ok(true) => {
            tracing::info!(book_id = id, "book deleted");
            ctx.flash("Book deleted.");
        }
        Ok(false) => ctx.flash("No such book."),
        Err(err) => {
            tracing::error!(error = %err, "failed to delete book");
            ctx.flash(err.notice());
        }
    }
    (ctx, Redirect::to("/books")).into_response()
}
