// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Visibility planning for "everything except other modules" mode.
//!
//! ```text
//! allowed = resolve(target).paths
//! include = ["/*"]
//! for module in catalog, module != target, !module.is_infrastructure():
//!     for p in module.paths (own paths only):
//!         p in allowed                  -> keep visible
//!         p ancestor of an allowed path -> keep visible (excluding p would
//!                                          hide the allowed subtree)
//!         p is or encloses an infra path -> keep visible
//!         otherwise                     -> exclude p/
//!
//! sparse_patterns():   /*
//!                      !/docs/
//!                      !/services/billing/
//! ```

use serde::Serialize;

use crate::catalog::Definitions;
use crate::error::ResolveWarning;
use crate::module::Module;
use crate::paths;
use crate::resolve::{self, Resolution};

/// Include-everything baseline marker.
pub const INCLUDE_ALL: &str = "/*";

/// Inclusion/exclusion pattern set for a filesystem-visibility mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityPlan {
    /// Target module name.
    pub module: String,
    /// Baseline include markers.
    pub include: Vec<String>,
    /// Paths to hide, each meaning "this directory and its contents".
    pub exclude: Vec<String>,
    /// Warnings from resolving the target and scanning the catalog.
    pub warnings: Vec<ResolveWarning>,
}

impl VisibilityPlan {
    /// Render as non-cone sparse-checkout patterns.
    #[must_use]
    pub fn sparse_patterns(&self) -> Vec<String> {
        self.include
            .iter()
            .cloned()
            .chain(self.exclude.iter().map(|path| format!("!/{path}/")))
            .collect()
    }
}

/// Returns `true` if hiding `path` would hide nothing the target needs.
fn can_exclude(path: &str, allowed: &[String]) -> bool {
    !allowed
        .iter()
        .any(|kept| kept == path || paths::is_ancestor(path, kept))
}

/// Plan which paths to hide so that only `target`'s transitive paths and
/// infrastructure modules stay apart from the rest of the tree.
///
/// Modules that fail to load are skipped with a warning.
#[must_use]
pub fn plan_dev_visibility(definitions: &Definitions, target: &Module) -> VisibilityPlan {
    let Resolution {
        paths: allowed,
        mut warnings,
        ..
    } = resolve::resolve(definitions, target);

    let mut others: Vec<Module> = Vec::new();
    for name in definitions.names() {
        if name == target.name {
            continue;
        }
        // `names()` only lists modules with a declared path, so this branch
        // fires only if listing and lookup disagree on what a module is.
        let Some(module) = definitions.load(&name) else {
            let warning = ResolveWarning::ModuleSkipped { module: name };
            warning.report();
            warnings.push(warning);
            continue;
        };
        others.push(module);
    }

    // Infrastructure paths stay visible even when another module owns an
    // enclosing directory.
    let protected: Vec<String> = others
        .iter()
        .filter(|module| module.is_infrastructure())
        .flat_map(|module| module.paths.iter().cloned())
        .collect();

    let mut exclude: Vec<String> = Vec::new();

    for module in others {
        if module.is_infrastructure() {
            tracing::trace!(module = %module.name, "Infrastructure module stays visible");
            continue;
        }

        for path in module.paths {
            if !can_exclude(&path, &allowed) {
                tracing::trace!(module = %module.name, path = %path, "Path needed by target");
                continue;
            }
            if !can_exclude(&path, &protected) {
                tracing::trace!(
                    module = %module.name,
                    path = %path,
                    "Path encloses an infrastructure module"
                );
                continue;
            }
            if !exclude.contains(&path) {
                tracing::debug!(module = %module.name, path = %path, "Excluding path");
                exclude.push(path);
            }
        }
    }

    VisibilityPlan {
        module: target.name.clone(),
        include: vec![INCLUDE_ALL.to_string()],
        exclude,
        warnings,
    }
}
