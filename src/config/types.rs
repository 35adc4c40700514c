// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modgit.
//!
//! ```text
//! Config: GlobalConfig, CatalogConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::DEFAULT_FILE_NAME;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console (stderr) output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// Where module definitions are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Definition file, relative to the worktree root unless absolute.
    pub file: PathBuf,
    /// Locate the worktree root with git discovery.
    pub discover: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE_NAME),
            discover: true,
        }
    }
}
