// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modgit.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modgit.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. MODGIT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODGIT_GLOBAL__OUTPUT_LOG_LEVEL=4 → global.output_log_level = 4
//! MODGIT_CATALOG__DISCOVER=false    → catalog.discover = false
//! ```
//!
//! The module definitions themselves live in `.modgit`, not here.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, ModgitResult, Result};

use loader::ConfigLoader;
use types::{CatalogConfig, GlobalConfig};

/// Default name of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "modgit.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "MODGIT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Definition store location.
    pub catalog: CatalogConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modgit::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modgit.toml")
    ///     .with_env_prefix("MODGIT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `catalog.file` is empty or
    /// `global.log_file` names a directory.
    pub fn validate(&self) -> ModgitResult<()> {
        if self.catalog.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "catalog".to_string(),
                key: "file".to_string(),
                message: "definition file path is empty".to_string(),
            }
            .into());
        }
        if let Some(log_file) = &self.global.log_file
            && log_file.is_dir()
        {
            return Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_file".to_string(),
                message: format!("{} is a directory", log_file.display()),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options as sorted `key = value` lines.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("catalog.file", self.catalog.file.display().to_string());
        options.insert("catalog.discover", self.catalog.discover.to_string());

        let max_key_len = options.keys().map(|key| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
