//! Application state management.
//!
//! This module defines the shared application state passed to the app-level
//! handlers (readiness). Domain routers receive their own repositories.

use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloned into handlers; `DatabaseConnection` is an internally pooled handle,
/// so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
}
