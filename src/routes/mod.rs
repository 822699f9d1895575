//! Route Configuration Module
//!
//! One canonical route table (see `router`): public login/logout plus the
//! gated CRUD and maintenance routes.

/// Main router creation
pub mod router;

pub use router::create_router;
