// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for modgit.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Display current configuration options, the effective definition file and
/// the configuration files they were read from.
pub fn run_options_command(config: &Config, definitions: &Path, config_files: &[PathBuf]) {
    for line in config.format_options() {
        println!("{line}");
    }
    println!();
    println!("definitions: {}", definitions.display());
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for file in config_files {
            println!("config: {}", file.display());
        }
    }
}
