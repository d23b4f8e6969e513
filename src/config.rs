//! Configuration for the flowdeck CLI.

use std::path::{Path, PathBuf};

use flowdeck_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`FlowdeckConfig::storage_path`].
pub const ENV_STORAGE_PATH: &str = "FLOWDECK_STORAGE_PATH";

/// Environment variable overriding [`FlowdeckConfig::default_namespace`].
pub const ENV_DEFAULT_NAMESPACE: &str = "FLOWDECK_DEFAULT_NAMESPACE";

/// Environment variable overriding [`FlowdeckConfig::log_filter`].
pub const ENV_LOG: &str = "FLOWDECK_LOG";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowdeckConfig {
    /// File backing the namespace preferences. In-memory when unset.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Namespace used when neither managed, explicit nor stored is set.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for FlowdeckConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            default_namespace: default_namespace(),
            log_filter: default_log_filter(),
        }
    }
}

impl FlowdeckConfig {
    /// Set the storage path.
    #[must_use]
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Set the default namespace.
    #[must_use]
    pub fn default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    /// Load configuration from environment variables over the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a lookup function.
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(path) = lookup(ENV_STORAGE_PATH) {
            self.storage_path = Some(PathBuf::from(path));
        }

        if let Some(namespace) = lookup(ENV_DEFAULT_NAMESPACE) {
            self.default_namespace = namespace;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }

        self
    }

    /// Load configuration from a file.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or sets
    /// an empty default namespace.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;

        let config: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.default_namespace.trim().is_empty() {
            return Err(Error::invalid_config("default_namespace must not be empty"));
        }
        Ok(self)
    }
}

fn default_namespace() -> String {
    flowdeck_ui::DEFAULT_NAMESPACE.to_string()
}

fn default_log_filter() -> String {
    "warn,flowdeck=info".to_string()
}
