//! # Client configuration — `notes.toml`
//!
//! Defines the TOML configuration for the notes client. Nothing about the
//! remote service is hard-coded elsewhere: the API base URL and the identity
//! settings are read from here and injected into the client and resolver.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://acme-users-api-rev.herokuapp.com/api"
//!
//! [identity]
//! storage_key = "userId"   # key of the persisted user id
//! max_attempts = 3         # identity lookups before giving up
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`NotesConfig`] | Top-level config. Builder helpers (`with_base_url`, `with_max_attempts`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the REST service. |
//! | [`IdentityConfig`] | Storage key for the persisted user id and the retry bound used by identity resolution. |
//!
//! All structs derive `Default` so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://acme-users-api-rev.herokuapp.com/api";

/// Top-level configuration stored in `notes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Remote service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Persisted identity settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Failed resolution attempts tolerated before giving up. Clearing a stale
    /// stored id and requesting a random user happen within one attempt.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_storage_key() -> String {
    "userId".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl NotesConfig {
    /// Builder method to point the client at another service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the identity retry bound.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.identity.max_attempts = attempts;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = NotesConfig::from_toml("").unwrap();
        assert_eq!(config, NotesConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.identity.storage_key, "userId");
        assert_eq!(config.identity.max_attempts, 3);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = NotesConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000/api/"

            [identity]
            max_attempts = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.identity.max_attempts, 5);
        assert_eq!(config.identity.storage_key, "userId");
    }

    #[test]
    fn test_builders() {
        let config = NotesConfig::default()
            .with_base_url("http://example.test/")
            .with_max_attempts(1);
        assert_eq!(config.api.base_url, "http://example.test");
        assert_eq!(config.identity.max_attempts, 1);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = NotesConfig::default().with_base_url("http://example.test");
        let text = config.to_toml().unwrap();
        assert_eq!(NotesConfig::from_toml(&text).unwrap(), config);
    }
}
