// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation for modgit.

use crate::catalog::{Catalog, DefinitionStore};
use crate::cli::module::{OutputFormat, ShowArgs};
use crate::error::Result;
use crate::module::Module;

/// Main handler for show command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the module is not defined.
pub fn run_show_command<S: DefinitionStore>(args: &ShowArgs, catalog: &Catalog<S>) -> Result<()> {
    let module = catalog.load(&args.module)?;
    super::emit(&render_show(&module, args.format)?);
    Ok(())
}

/// Render a loaded module record.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_show(module: &Module, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(module)?),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("name: {}", module.name),
                format!("paths: {}", module.paths.join(" ")),
            ];
            if !module.depends_on.is_empty() {
                let suffix = if module.inherited_depends {
                    " (inherited)"
                } else {
                    ""
                };
                lines.push(format!(
                    "depends: {}{suffix}",
                    module.depends_on.join(" ")
                ));
            }
            let labels = module.flags.labels();
            if !labels.is_empty() {
                lines.push(format!("flags: {}", labels.join(" ")));
            }
            Ok(lines.join("\n"))
        }
    }
}
