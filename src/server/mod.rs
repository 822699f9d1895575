//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! # Module Structure
//!
//! - **`config`** - environment configuration and pool construction
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - `create_app`: wiring it all together

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
