//! libchat-admin - Main Library
//!
//! libchat-admin is the administrative web backend for a library chatbot
//! deployment. A single admin login gates two flat CRUD surfaces: chatbot
//! intent records (tag/patterns/responses) and library book records
//! (title/subject/location/availability).
//!
//! # Overview
//!
//! The server is a classic form-post-and-redirect application:
//!
//! - Axum HTTP server rendering askama templates
//! - SQLite persistence through sqlx (one parameterized statement per action)
//! - Cookie-backed server-side sessions gating every listing/mutating route
//! - One-shot flash notices carried through the session
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - The canonical route table
//! - **`auth`** - Credential verification, admin records, session store, auth handlers
//! - **`context`** - Per-request context (session accessor + outgoing notices)
//! - **`middleware`** - Session gate for protected routes
//! - **`intents`** - Chatbot intent records (model, queries, handlers)
//! - **`books`** - Library book records (model, queries, handlers)
//! - **`templates`** - askama page templates
//! - **`error`** - Application error types
//!
//! # Usage
//!
//! ```rust,no_run
//! use libchat_admin::server::config::ServerConfig;
//! use libchat_admin::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Application error types
pub mod error;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Credential verification, admin records, and session management
pub mod auth;

/// Per-request context: session accessor and outgoing notices
pub mod context;

/// Session gate middleware for protected routes
pub mod middleware;

/// Chatbot intent records
pub mod intents;

/// Library book records
pub mod books;

/// askama page templates
pub mod templates;

// Re-export commonly used types
pub use error::AppError;
pub use server::state::AppState;
