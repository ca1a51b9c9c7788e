//! Pending preflight discovery, URL resolution and operator commands.
//!
//! [`PreflightStore`] composes a [`PendingPreflightSource`] (the single read
//! query against deployment-version state) with the pure URL and command
//! builders in this module. Slugs and sequences are interpolated verbatim;
//! upstream guarantees they are DNS-label-safe identifiers.

use std::future::Future;

use serde::Serialize;

use crate::endpoints::EndpointConfig;
use crate::error::CoreError;
use crate::types::Sequence;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Deployment version status awaiting a preflight check.
pub const STATUS_PENDING_PREFLIGHT: &str = "pending_preflight";

/// Path prefix of the preflight resource served by the API.
pub const PREFLIGHT_PATH: &str = "/api/v1/preflight";

/// Query suffix marking a URL as fetched from inside the cluster.
pub const IN_CLUSTER_QUERY: &str = "?incluster=true";

/// First line of the operator command: installs the kubectl plugin.
pub const PREFLIGHT_INSTALL_LINE: &str = "curl https://krew.sh/preflight | bash";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A deployment version currently in the `pending_preflight` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPreflightRecord {
    pub sequence: Sequence,
    pub ignore_permissions: bool,
    pub app_slug: String,
    pub cluster_slug: String,
}

/// Where to fetch a pending preflight from, and how to treat RBAC failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreflightParams {
    pub url: String,
    pub ignore_permissions: bool,
}

impl PendingPreflightRecord {
    /// Convert into [`PreflightParams`] for the given network context.
    pub fn to_params(
        &self,
        endpoints: &EndpointConfig,
        in_cluster: bool,
    ) -> Result<PreflightParams, CoreError> {
        let url = resolve_url(
            endpoints,
            &self.app_slug,
            &self.cluster_slug,
            self.sequence,
            in_cluster,
        )?;
        Ok(PreflightParams {
            url,
            ignore_permissions: self.ignore_permissions,
        })
    }
}

// ---------------------------------------------------------------------------
// Pure builders
// ---------------------------------------------------------------------------

/// Build the absolute URL of a deployment version's preflight resource.
///
/// In-cluster URLs use `ship_api_endpoint` and carry `?incluster=true`;
/// external URLs use `api_advertise_endpoint` with no query string.
pub fn resolve_url(
    endpoints: &EndpointConfig,
    app_slug: &str,
    cluster_slug: &str,
    sequence: Sequence,
    in_cluster: bool,
) -> Result<String, CoreError> {
    let base = endpoints.base_for(in_cluster)?;
    let mut url = format!("{base}{PREFLIGHT_PATH}/{app_slug}/{cluster_slug}/{sequence}");
    if in_cluster {
        url.push_str(IN_CLUSTER_QUERY);
    }
    Ok(url)
}

/// Build the two-line shell snippet an operator pastes to run a preflight
/// manually. Always targets the externally advertised endpoint.
pub fn preflight_command(
    endpoints: &EndpointConfig,
    app_slug: &str,
    cluster_slug: &str,
    sequence: Sequence,
) -> Result<String, CoreError> {
    let url = resolve_url(endpoints, app_slug, cluster_slug, sequence, false)?;
    Ok(format!("{PREFLIGHT_INSTALL_LINE}\nkubectl preflight {url}"))
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Read access to deployment versions awaiting preflight.
///
/// Implementations issue exactly one read and return rows in whatever order
/// the backing store produces. Failures are reported as
/// [`CoreError::StoreUnavailable`].
pub trait PendingPreflightSource: Send + Sync {
    fn list_pending_preflights(
        &self,
    ) -> impl Future<Output = Result<Vec<PendingPreflightRecord>, CoreError>> + Send;
}

/// Preflight lookups over an injected [`PendingPreflightSource`].
///
/// Holds no mutable state; share it behind an `Arc` across tasks.
#[derive(Debug, Clone)]
pub struct PreflightStore<S> {
    source: S,
}

impl<S: PendingPreflightSource> PreflightStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List fetch parameters for every deployment version pending preflight.
    ///
    /// The selected base endpoint is checked before the query runs, so a
    /// missing base fails even when nothing is pending. No rows is an empty
    /// result, not an error.
    pub async fn get_pending_preflight_params(
        &self,
        endpoints: &EndpointConfig,
        in_cluster: bool,
    ) -> Result<Vec<PreflightParams>, CoreError> {
        endpoints.base_for(in_cluster)?;

        let records = self.source.list_pending_preflights().await?;
        tracing::debug!(count = records.len(), in_cluster, "Loaded pending preflights");

        records
            .iter()
            .map(|record| record.to_params(endpoints, in_cluster))
            .collect()
    }

    /// Operator command for one explicitly identified deployment version.
    pub fn get_preflight_command(
        &self,
        endpoints: &EndpointConfig,
        app_slug: &str,
        cluster_slug: &str,
        sequence: Sequence,
    ) -> Result<String, CoreError> {
        preflight_command(endpoints, app_slug, cluster_slug, sequence)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
