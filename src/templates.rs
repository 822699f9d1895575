//! askama templates for the admin UI.

use askama::Template;

use crate::books::db::Book;
use crate::intents::db::Intent;

/// Login page template
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub notices: Vec<String>,
    pub logged_in: bool,
}

impl LoginTemplate {
    pub fn new(notices: Vec<String>) -> Self {
        Self {
            notices,
            logged_in: false,
        }
    }
}

/// Dashboard page template: intent listing plus add/edit forms
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub notices: Vec<String>,
    pub logged_in: bool,
    pub intents: Vec<Intent>,
}

impl DashboardTemplate {
    pub fn new(notices: Vec<String>, intents: Vec<Intent>) -> Self {
        Self {
            notices,
            logged_in: true,
            intents,
        }
    }
}

/// Books page template: book listing plus add/edit forms
#[derive(Template)]
#[template(path = "books.html")]
pub struct BooksTemplate {
    pub notices: Vec<String>,
    pub logged_in: bool,
    pub books: Vec<Book>,
}

impl BooksTemplate {
    pub fn new(notices: Vec<String>, books: Vec<Book>) -> Self {
        Self {
            notices,
            logged_in: true,
            books,
        }
    }
}
