//! Client configuration

use std::time::Duration;

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default route announced in [`SessionEvent::Expired`](crate::SessionEvent::Expired)
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Environment variable overriding the base URL
pub const ENV_API_URL: &str = "TRAVEL_API_URL";

/// Environment variable overriding the login route
pub const ENV_LOGIN_ROUTE: &str = "TRAVEL_LOGIN_ROUTE";

/// Client configuration for connecting to the travel backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL including the `/api` prefix (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Route the host should navigate to once the session expires
    pub login_route: String,

    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            timeout: None,
        }
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env_non_empty(ENV_API_URL) {
            config = config.with_base_url(url);
        }
        if let Some(route) = env_non_empty(ENV_LOGIN_ROUTE) {
            config = config.with_login_route(route);
        }
        config
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Set the login route
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.login_route, "/login");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://travel.example.com/api/");
        assert_eq!(config.base_url, "https://travel.example.com/api");
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.5:9000/api")
            .with_login_route("/signin")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.login_route, "/signin");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
