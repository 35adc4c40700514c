// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan command implementation for modgit.
//!
//! ```text
//! text         /*            json   {"module": .., "patterns": [..]}
//!              !/docs/
//! text --raw   include /*    json   {"module": .., "include": [..],
//!              exclude docs           "exclude": [..]}
//! ```

use serde_json::json;

use crate::catalog::{Catalog, DefinitionStore};
use crate::cli::module::{OutputFormat, PlanArgs};
use crate::error::Result;
use crate::visibility::VisibilityPlan;

/// Main handler for plan command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the module is not defined.
pub fn run_plan_command<S: DefinitionStore>(args: &PlanArgs, catalog: &Catalog<S>) -> Result<()> {
    let plan = catalog.plan_dev_visibility(&args.module)?;
    tracing::info!(
        module = %plan.module,
        excluded = plan.exclude.len(),
        warnings = plan.warnings.len(),
        "Planned visibility"
    );
    super::emit(&render_plan(&plan, args.format, args.raw)?);
    Ok(())
}

/// Render a visibility plan.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_plan(plan: &VisibilityPlan, format: OutputFormat, raw: bool) -> Result<String> {
    let rendered = match (format, raw) {
        (OutputFormat::Text, false) => plan.sparse_patterns().join("\n"),
        (OutputFormat::Text, true) => plan
            .include
            .iter()
            .map(|path| format!("include {path}"))
            .chain(plan.exclude.iter().map(|path| format!("exclude {path}")))
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&json!({
            "module": plan.module,
            "patterns": plan.sparse_patterns(),
        }))?,
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&json!({
            "module": plan.module,
            "include": plan.include,
            "exclude": plan.exclude,
        }))?,
    };
    Ok(rendered)
}
