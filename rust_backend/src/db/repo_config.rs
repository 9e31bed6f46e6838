//! Repository configuration file support.
//!
//! This module reads the store and latency settings from a TOML file:
//!
//! ```toml
//! [repository]
//! seed_fixtures = true
//!
//! [latency]
//! enabled = true
//! list_ms = 500
//! lookup_ms = 300
//! write_ms = 500
//! generate_ms = 1000
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::latency::LatencyProfile;
use super::repository::RepositoryError;

/// File name searched for by [`RepositoryConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "coldroom.toml";

/// Repository configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub latency: LatencyProfile,
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError::ConfigurationError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `coldroom.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::ConfigurationError(format!(
            "No {} found in standard locations",
            CONFIG_FILE_NAME
        )))
    }

    /// Latency profile with the environment override applied.
    pub fn effective_latency(&self) -> LatencyProfile {
        self.latency.with_env_override()
    }
}
