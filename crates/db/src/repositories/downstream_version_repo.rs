//! Repository for the `app_downstream_version` table.

use kotsadm_core::preflight::STATUS_PENDING_PREFLIGHT;
use sqlx::PgPool;

use crate::models::downstream_version::PendingPreflightRow;

/// Provides read access to downstream versions.
pub struct DownstreamVersionRepo;

impl DownstreamVersionRepo {
    /// List every downstream version awaiting preflight, with app and
    /// cluster slugs. No ordering is applied.
    pub async fn list_pending_preflight(
        pool: &PgPool,
    ) -> Result<Vec<PendingPreflightRow>, sqlx::Error> {
        sqlx::query_as::<_, PendingPreflightRow>(
            "SELECT
                adv.sequence::BIGINT AS sequence,
                adv.preflight_ignore_permissions,
                app.slug AS app_slug,
                cluster.slug AS cluster_slug
             FROM app_downstream_version adv
             INNER JOIN app ON adv.app_id = app.id
             INNER JOIN cluster ON adv.cluster_id = cluster.id
             WHERE adv.status = $1",
        )
        .bind(STATUS_PENDING_PREFLIGHT)
        .fetch_all(pool)
        .await
    }
}
