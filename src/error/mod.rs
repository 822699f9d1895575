//! Error Module
//!
//! Application-level error types for the admin backend and their
//! conversion into HTTP responses.
//!
//! # Design
//!
//! No failure in this application is fatal to the process. Every error
//! degrades to a user-visible generic notice plus a safe redirect (auth
//! failures) or a plain status page (internal failures). Secrets such as
//! submitted passwords or stored hashes never appear in messages or logs.

/// Error type definitions
pub mod types;

/// Conversion of errors into HTTP responses
pub mod conversion;

pub use types::AppError;
