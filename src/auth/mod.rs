//! Authentication Module
//!
//! This module handles admin authentication and session management.
//!
//! # Architecture
//!
//! - **`credentials`** - Dual-mode password verification (bcrypt hash or
//!   legacy plaintext) and hashing
//! - **`admins`** - Admin credential records and database operations
//! - **`sessions`** - In-memory server-side session store
//! - **`handlers`** - HTTP handlers for login, logout, and credential
//!   provisioning
//!
//! # Authentication Flow
//!
//! 1. **Login**: email resolves to one credential record, the submitted
//!    password is verified against it, and a fresh session is created
//! 2. **Gate**: protected routes check the session cookie against the
//!    store (see `middleware::auth`)
//! 3. **Logout**: the session entry is destroyed
//!
//! # Security
//!
//! - New and rehashed credentials are stored as bcrypt hashes
//! - Unknown email and wrong password produce the same notice
//! - Session IDs rotate on login and are HttpOnly cookies
//! - Passwords are never logged

/// Dual-mode credential verification and hashing
pub mod credentials;

/// Admin credential records and database operations
pub mod admins;

/// Server-side session store
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use admins::AdminCredential;
pub use credentials::{hash_password, verify_password, StoredCredential};
pub use sessions::{SessionStore, SESSION_COOKIE};
