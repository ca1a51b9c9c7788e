//! Downstream version rows as read for preflight dispatch.

use kotsadm_core::preflight::PendingPreflightRecord;
use kotsadm_core::types::Sequence;
use sqlx::FromRow;

/// One `app_downstream_version` row in `pending_preflight`, joined with its
/// app and cluster slugs.
#[derive(Debug, Clone, FromRow)]
pub struct PendingPreflightRow {
    pub sequence: Sequence,
    /// Nullable upstream; NULL means permission failures stay blocking.
    pub preflight_ignore_permissions: Option<bool>,
    pub app_slug: String,
    pub cluster_slug: String,
}

impl From<PendingPreflightRow> for PendingPreflightRecord {
    fn from(row: PendingPreflightRow) -> Self {
        Self {
            sequence: row.sequence,
            ignore_permissions: row.preflight_ignore_permissions.unwrap_or(false),
            app_slug: row.app_slug,
            cluster_slug: row.cluster_slug,
        }
    }
}
