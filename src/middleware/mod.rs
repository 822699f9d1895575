//! Middleware Module
//!
//! HTTP middleware for the server. Currently provides:
//!
//! - **`auth`** - the session gate protecting listing/mutating routes

pub mod auth;

pub use auth::{require_admin, AuthAdmin, AuthenticatedAdmin};
