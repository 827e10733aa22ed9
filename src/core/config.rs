//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::core::errors::{Result, TranslationError};
use crate::core::identity::AppIdentity;

/// Default Cloud Translation v2 endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Configuration for the translation client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub api_endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub identity: AppIdentity,
}

fn default_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: default_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            identity: AppIdentity::Unknown,
        }
    }
}

impl ClientConfig {
    /// Configuration with the given key and defaults elsewhere
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn with_identity(mut self, identity: AppIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from the environment, with explicit key and endpoint taking precedence
    pub fn from_env_with(api_key: Option<String>, api_endpoint: Option<String>) -> Result<Self> {
        Self::from_lookup_with(|key| std::env::var(key).ok(), api_key, api_endpoint)
    }

    /// Like [`ClientConfig::from_lookup`], answering the key and endpoint
    /// from the given values when present
    pub fn from_lookup_with<F>(
        lookup: F,
        api_key: Option<String>,
        api_endpoint: Option<String>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key: &str| match key {
            "TRANSLATE_API_KEY" if api_key.is_some() => api_key.clone(),
            "TRANSLATE_API_ENDPOINT" if api_endpoint.is_some() => api_endpoint.clone(),
            _ => lookup(key),
        })
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TRANSLATE_API_KEY").ok_or_else(|| TranslationError::ConfigError {
            message: "TRANSLATE_API_KEY environment variable is required".to_string(),
        })?;

        let api_endpoint = lookup("TRANSLATE_API_ENDPOINT").unwrap_or_else(default_endpoint);

        let timeout_ms = match lookup("REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| TranslationError::ConfigError {
                message: format!("REQUEST_TIMEOUT_MS must be an integer: {}", e),
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key,
            api_endpoint,
            timeout_ms,
            identity: AppIdentity::from_lookup(&lookup),
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration.
    ///
    /// The API key is not checked beyond a warning: a bad key only surfaces
    /// as a failure from the service.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            warn!("API key is empty, requests will be rejected by the service");
        }

        if self.api_endpoint.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL for an endpoint path; `""` is the endpoint root
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.api_endpoint.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}
