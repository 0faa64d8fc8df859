//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the API. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::auth::JwtManager;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types: `DatabaseConnection` is a connection
/// pool (clones share the pool) and `JwtManager` holds pre-derived keys.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates bearer tokens for protected endpoints.
    pub jwt: JwtManager,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token manager built from the configured secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtManager) -> Self {
        Self { db, jwt }
    }
}
