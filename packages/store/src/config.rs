//! # Form configuration
//!
//! [`FormConfig`] carries the backend base URL into the view. It is built once at
//! startup and handed to the component as a prop; every request path (list, create,
//! update, delete) uses the same value.
//!
//! ## Resolution order
//!
//! 1. An explicit value (desktop: `config.toml` in the platform config directory).
//! 2. The `BACKEND_URL` environment variable at runtime.
//! 3. `BACKEND_URL` as it was set when the crate was compiled (the only source on web).
//! 4. [`DEFAULT_BACKEND_URL`].
//!
//! ## File format
//!
//! ```toml
//! backend_url = "https://users.example.com"
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Settings the user form needs to reach its backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
        }
    }
}

impl FormConfig {
    /// Name of the environment variable holding the backend base URL.
    pub const ENV_VAR: &'static str = "BACKEND_URL";

    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Resolve from the environment, falling back to the default.
    pub fn from_env() -> Self {
        Self::or_from_env(None)
    }

    /// Use `explicit` if given, otherwise resolve from the environment.
    pub fn or_from_env(explicit: Option<Self>) -> Self {
        explicit
            .or_else(|| env_backend_url().map(Self::new))
            .unwrap_or_default()
    }

    /// Base URL without trailing slashes. An empty setting means the default.
    pub fn base_url(&self) -> &str {
        let trimmed = self.backend_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_BACKEND_URL
        } else {
            trimmed
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn env_backend_url() -> Option<String> {
    std::env::var(FormConfig::ENV_VAR)
        .ok()
        .or_else(|| option_env!("BACKEND_URL").map(str::to_string))
        .filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = FormConfig::default();
        assert_eq!(config.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = FormConfig::new("https://api.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        assert_eq!(FormConfig::new("  ").base_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_explicit_wins_over_env() {
        let explicit = FormConfig::new("http://10.0.0.2:8080");
        assert_eq!(FormConfig::or_from_env(Some(explicit.clone())), explicit);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FormConfig::from_toml(r#"backend_url = "http://users.local""#).unwrap();
        assert_eq!(config.backend_url, "http://users.local");

        let written = config.to_toml().unwrap();
        assert_eq!(FormConfig::from_toml(&written).unwrap(), config);

        // Missing key means the default
        assert_eq!(FormConfig::from_toml("").unwrap(), FormConfig::default());
    }
}
