use kotsadm_core::endpoints::EndpointConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// preflight endpoints, which are reported as missing when a URL is built.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base endpoints used to build preflight URLs.
    pub endpoints: EndpointConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default   |
    /// |--------------------------|-----------|
    /// | `HOST`                   | `0.0.0.0` |
    /// | `PORT`                   | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`      |
    /// | `SHIP_API_ENDPOINT`      | (empty)   |
    /// | `API_ADVERTISE_ENDPOINT` | (empty)   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            request_timeout_secs,
            endpoints: endpoints_from_env(),
        }
    }
}

/// Read the preflight base endpoints. Unset variables become empty strings.
pub fn endpoints_from_env() -> EndpointConfig {
    EndpointConfig::new(
        std::env::var("SHIP_API_ENDPOINT").unwrap_or_default(),
        std::env::var("API_ADVERTISE_ENDPOINT").unwrap_or_default(),
    )
}
