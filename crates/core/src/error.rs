/// Boxed error produced by a backing store.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The backing store could not be reached or the query failed.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    /// A required base endpoint is unset or empty.
    #[error("Configuration missing: {field} is not set")]
    ConfigurationMissing { field: &'static str },
}

impl CoreError {
    /// Wrap any store-level error without altering it.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::StoreUnavailable(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_configuration_missing() {
        let err = CoreError::ConfigurationMissing {
            field: "ship_api_endpoint",
        };
        assert_eq!(
            err.to_string(),
            "Configuration missing: ship_api_endpoint is not set"
        );
    }

    #[test]
    fn store_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = CoreError::store(inner);
        assert_eq!(err.to_string(), "Store unavailable: refused");
        assert_eq!(err.source().unwrap().to_string(), "refused");
    }
}
