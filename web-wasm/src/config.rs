//! API endpoint configuration
//!
//! The dev server proxies `/api` to the classification service; production
//! builds post directly to the deployed host. Resolved once at startup from
//! the page origin and injected into the app.

/// Production endpoint of the classification service
const PRODUCTION_API_URL: &str = "https://car-classifier-tilhbeahgq-uc.a.run.app";

/// Path prefix the dev server proxies to the service
const DEV_PROXY_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Pick the endpoint for the current page origin.
    pub fn resolve() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        Self::for_hostname(&hostname)
    }

    fn for_hostname(hostname: &str) -> Self {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            Self::new(DEV_PROXY_PREFIX)
        } else {
            Self::new(PRODUCTION_API_URL)
        }
    }

    /// Full URL for an endpoint path such as `/predict/brand`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_uses_dev_proxy() {
        assert_eq!(ApiConfig::for_hostname("localhost").base_url, "/api");
        assert_eq!(ApiConfig::for_hostname("127.0.0.1").base_url, "/api");
    }

    #[test]
    fn test_other_hosts_use_production() {
        let config = ApiConfig::for_hostname("classify.example.com");
        assert_eq!(config.base_url, PRODUCTION_API_URL);
    }

    #[test]
    fn test_endpoint_joins_path() {
        let config = ApiConfig::new("/api");
        assert_eq!(config.endpoint("/predict/brand"), "/api/predict/brand");

        let config = ApiConfig::new("https://example.test/");
        assert_eq!(
            config.endpoint("/predict/body-type"),
            "https://example.test/predict/body-type"
        );
    }
}
