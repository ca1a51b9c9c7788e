//! PostgreSQL-backed [`PendingPreflightSource`].

use kotsadm_core::error::CoreError;
use kotsadm_core::preflight::{PendingPreflightRecord, PendingPreflightSource};

use crate::repositories::DownstreamVersionRepo;
use crate::DbPool;

/// Reads pending preflights from the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgPendingPreflightSource {
    pool: DbPool,
}

impl PgPendingPreflightSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PendingPreflightSource for PgPendingPreflightSource {
    async fn list_pending_preflights(&self) -> Result<Vec<PendingPreflightRecord>, CoreError> {
        let rows = DownstreamVersionRepo::list_pending_preflight(&self.pool)
            .await
            .map_err(CoreError::store)?;
        Ok(rows.into_iter().map(PendingPreflightRecord::from).collect())
    }
}
