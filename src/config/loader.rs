// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::for_invocation(--config files)
//!   = modgit.toml (optional) + --config (required) + MODGIT_* env
//!   .with_overrides(CLI flags)
//!        |
//!        v
//!    build() --> Config::validate() --> Config
//! ```

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::Result;

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// The standard source stack of a command-line run: `modgit.toml` in the
    /// working directory if present, each of `configs` in order, then
    /// `MODGIT_*` environment variables.
    #[must_use]
    pub fn for_invocation(configs: &[PathBuf]) -> Self {
        configs
            .iter()
            .fold(
                Self::new().add_toml_file_optional(DEFAULT_CONFIG_FILE),
                |loader, path| loader.add_toml_file(path),
            )
            .with_env_prefix(ENV_PREFIX)
    }

    /// Adds a required TOML configuration file.
    ///
    /// `build()` fails if the file is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML configuration file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.files.push(path.to_path_buf());
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies `(key, value)` overrides, typically from command-line flags.
    ///
    /// # Errors
    ///
    /// Returns an error if any override is rejected by [`set`](Self::set).
    pub fn with_overrides<I, V>(self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<config::Value>,
    {
        overrides
            .into_iter()
            .try_fold(self, |loader, (key, value)| loader.set(key, value))
    }

    /// Builds and validates the configuration from all added sources.
    ///
    /// Environment variables map as `MODGIT_<SECTION>__<KEY>`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file has invalid TOML
    /// syntax, an environment variable cannot be parsed, the merged result
    /// does not match the `Config` structure, or a value fails validation.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Files that contributed to the configuration, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
