use std::env;

/// Runtime configuration for the API and auth clients.
///
/// `Default` targets the production Uber hosts; `from_env` lets deployments
/// and tests redirect traffic without code changes.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub auth_url: String,
    pub api_version: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Retry budget for 429/5xx on resource GETs. Zero disables retry.
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.uber.com".to_string(),
            auth_url: "https://login.uber.com".to_string(),
            api_version: "v1.2".to_string(),
            user_agent: format!("uber-rides/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment, falling back to defaults.
    ///
    /// Env vars:
    /// - UBER_API_URL (default: https://api.uber.com)
    /// - UBER_AUTH_URL (default: https://login.uber.com)
    /// - UBER_API_VERSION (default: v1.2)
    /// - UBER_USER_AGENT (default: uber-rides/<version>)
    /// - UBER_HTTP_TIMEOUT_SECS (default: 30)
    /// - UBER_HTTP_MAX_RETRIES (default: 3)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_url = env::var("UBER_API_URL").unwrap_or(defaults.api_url);
        let auth_url = env::var("UBER_AUTH_URL").unwrap_or(defaults.auth_url);
        let api_version = env::var("UBER_API_VERSION").unwrap_or(defaults.api_version);
        let user_agent = env::var("UBER_USER_AGENT").unwrap_or(defaults.user_agent);
        let timeout_secs = env::var("UBER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.timeout_secs);
        let max_retries = env::var("UBER_HTTP_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.max_retries);

        Self {
            api_url,
            auth_url,
            api_version,
            user_agent,
            timeout_secs,
            max_retries,
        }
    }

    /// Token endpoint for the OAuth2 flows.
    pub fn token_url(&self) -> String {
        format!("{}/oauth/v2/token", self.auth_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_production_hosts() {
        let cfg = Config::default();
        assert_eq!(cfg.api_url, "https://api.uber.com");
        assert_eq!(cfg.token_url(), "https://login.uber.com/oauth/v2/token");
        assert_eq!(cfg.api_version, "v1.2");
    }

    #[test]
    fn token_url_tolerates_trailing_slash() {
        let cfg = Config {
            auth_url: "https://login.example.com/".into(),
            ..Config::default()
        };
        assert_eq!(cfg.token_url(), "https://login.example.com/oauth/v2/token");
    }
}
