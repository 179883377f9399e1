//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`,
//! then `install` it so the page shell can hand the API base to the browser.

use std::sync::OnceLock;

/// Backend used when `BLOGGEN_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Name of the `<meta>` tag carrying the API base into the page
pub const API_BASE_META: &str = "bloggen-api-base";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the REST backend, without a trailing slash
    /// Example: https://api.bloggen.ai
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_api_url(std::env::var("BLOGGEN_API_URL").ok().as_deref())
    }

    /// Build a config from an optional raw URL, falling back to the default
    pub fn from_api_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(normalize_base_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self { api_base_url }
    }

    /// Whether the backend URL came from the environment
    pub fn is_default(&self) -> bool {
        self.api_base_url == DEFAULT_API_BASE_URL
    }

    /// Make this the process-wide config. Later calls are ignored.
    pub fn install(self) -> &'static Config {
        CONFIG.get_or_init(|| self)
    }

    /// The installed config, or defaults when none was installed
    pub fn current() -> &'static Config {
        CONFIG.get_or_init(|| Self::from_api_url(None))
    }
}

/// Trim whitespace and trailing slashes
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Join the API base with an endpoint path
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_from_explicit_url() {
        let config = Config::from_api_url(Some("https://api.example.com/"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(!config.is_default());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_api_url(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.is_default());

        let blank = Config::from_api_url(Some("  / "));
        assert_eq!(blank.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://x:8000// "), "http://x:8000");
        assert_eq!(normalize_base_url("http://x"), "http://x");
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("http://x:8000", "/api/login"),
            "http://x:8000/api/login"
        );
        assert_eq!(
            endpoint("http://x:8000/", "api/blog-posts/4/"),
            "http://x:8000/api/blog-posts/4/"
        );
    }

    #[test]
    fn test_config_clone() {
        let config = Config::from_api_url(Some("http://clone.test"));
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
