use std::time::Duration;

/// Board client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST surface, e.g. `http://localhost:3000/api`.
    pub api_url: String,
    /// Upper bound on each HTTP request; expiry is reported as a request error.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                      |
    /// |------------------------------|------------------------------|
    /// | `BOARD_API_URL`              | `http://localhost:3000/api`  |
    /// | `BOARD_REQUEST_TIMEOUT_SECS` | `10`                         |
    pub fn from_env() -> Self {
        let api_url = std::env::var("BOARD_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".into());

        let timeout_secs: u64 = std::env::var("BOARD_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("BOARD_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self::new(api_url, Duration::from_secs(timeout_secs))
    }

    /// Build a config, dropping any trailing slash from `api_url`.
    pub fn new(api_url: impl Into<String>, request_timeout: Duration) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            request_timeout,
        }
    }
}
