//! Base endpoint snapshot used to build preflight URLs.

use crate::error::CoreError;

/// Field name reported when the in-cluster base is missing.
pub const FIELD_SHIP_API_ENDPOINT: &str = "ship_api_endpoint";

/// Field name reported when the externally advertised base is missing.
pub const FIELD_API_ADVERTISE_ENDPOINT: &str = "api_advertise_endpoint";

/// Snapshot of the two base endpoints a preflight URL can be built on.
///
/// Resolved once by the caller and passed down by reference. Values are
/// used verbatim; no trailing-slash normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Base reachable from inside the cluster (e.g. `http://kotsadm-api:3000`).
    pub ship_api_endpoint: String,
    /// Base advertised to callers outside the cluster.
    pub api_advertise_endpoint: String,
}

impl EndpointConfig {
    pub fn new(
        ship_api_endpoint: impl Into<String>,
        api_advertise_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            ship_api_endpoint: ship_api_endpoint.into(),
            api_advertise_endpoint: api_advertise_endpoint.into(),
        }
    }

    /// Select the base endpoint for the given network context.
    ///
    /// Fails with [`CoreError::ConfigurationMissing`] when the selected base
    /// is empty or whitespace-only.
    pub fn base_for(&self, in_cluster: bool) -> Result<&str, CoreError> {
        let (value, field) = if in_cluster {
            (&self.ship_api_endpoint, FIELD_SHIP_API_ENDPOINT)
        } else {
            (&self.api_advertise_endpoint, FIELD_API_ADVERTISE_ENDPOINT)
        };

        if value.trim().is_empty() {
            return Err(CoreError::ConfigurationMissing { field });
        }
        Ok(value)
    }
}
