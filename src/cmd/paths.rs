// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Paths command implementation for modgit.

use serde_json::json;

use crate::catalog::{Catalog, DefinitionStore};
use crate::cli::module::{OutputFormat, PathsArgs};
use crate::error::Result;
use crate::resolve::Resolution;

/// Main handler for paths command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the module is not defined.
pub fn run_paths_command<S: DefinitionStore>(args: &PathsArgs, catalog: &Catalog<S>) -> Result<()> {
    let resolution = catalog.resolve(&args.module)?;
    tracing::info!(
        module = %resolution.module,
        paths = resolution.paths.len(),
        warnings = resolution.warnings.len(),
        "Resolved module"
    );
    super::emit(&render_paths(&resolution, args.format)?);
    Ok(())
}

/// Render a resolved path set. Warnings are left to the log.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_paths(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(resolution.paths.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "module": resolution.module,
            "paths": resolution.paths,
        }))?),
    }
}
