//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication and credential-maintenance
//! endpoints.
//!
//! # Handlers
//!
//! - **`login_page`** - GET /login - login form
//! - **`login_submit`** - POST /login - verify credentials, open a session
//! - **`logout`** - GET /logout - destroy the session
//! - **`provision`** - POST /admins/provision - upsert a hashed credential (gated)
//! - **`rehash`** - POST /admins/rehash - migrate a plaintext credential (gated)

/// Form payload types
pub mod types;

/// Login page and submission handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Credential provisioning and rehash handlers
pub mod provision;

// Re-export commonly used types and handlers
pub use login::{login_page, login_submit};
pub use logout::logout;
pub use provision::{provision, rehash};
pub use types::{LoginForm, ProvisionForm, RehashForm};
