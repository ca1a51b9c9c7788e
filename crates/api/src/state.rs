use std::sync::Arc;

use kotsadm_core::preflight::PreflightStore;
use kotsadm_db::PgPendingPreflightSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kotsadm_db::DbPool,
    /// Server configuration, including the endpoint snapshot.
    pub config: Arc<ServerConfig>,
    /// Pending preflight lookups backed by the pool.
    pub preflights: Arc<PreflightStore<PgPendingPreflightSource>>,
}

impl AppState {
    pub fn new(pool: kotsadm_db::DbPool, config: ServerConfig) -> Self {
        let preflights = PreflightStore::new(PgPendingPreflightSource::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            preflights: Arc::new(preflights),
        }
    }
}
