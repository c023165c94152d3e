//! Shared application state.

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Cloned into the readiness handler and used to build domain services;
/// the connection pool is shared, not copied.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
