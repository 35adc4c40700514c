// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transitive dependency resolution.
//!
//! ```text
//! resolve(app)                      app.paths      --> [src/app]
//!   app  depends [ui, core]         ui  (depth 1)  --> [src/app, web/ui]
//!   ui   depends [core]             core (depth 2) --> [.., lib/core]
//!   core depends [app]              app  visited   --> CircularDependency
//!                                   core visited   --> CircularDependency
//! ```
//!
//! Depth-first, `depends_on` in declaration order. The first occurrence of a
//! path wins; later duplicates are dropped. Missing modules, cycles and the
//! depth bound degrade to "contributes nothing further" and are reported as
//! [`ResolveWarning`]s next to the partial result.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Definitions;
use crate::error::ResolveWarning;
use crate::module::Module;
use crate::paths;

/// Deepest dependency level that still contributes paths. The requested
/// module is level 0, its direct dependencies level 1.
pub const MAX_DEPTH: usize = 50;

/// Outcome of resolving one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Name of the resolved module.
    pub module: String,
    /// Deduplicated transitive paths, in first-seen order.
    pub paths: Vec<String>,
    /// Degraded conditions met during traversal.
    pub warnings: Vec<ResolveWarning>,
}

/// Traversal state threaded through the recursion.
struct ResolveContext<'a> {
    definitions: &'a Definitions,
    visited: BTreeSet<String>,
    seen_paths: BTreeSet<String>,
    paths: Vec<String>,
    warnings: Vec<ResolveWarning>,
}

impl<'a> ResolveContext<'a> {
    fn new(definitions: &'a Definitions) -> Self {
        Self {
            definitions,
            visited: BTreeSet::new(),
            seen_paths: BTreeSet::new(),
            paths: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, warning: ResolveWarning) {
        warning.report();
        self.warnings.push(warning);
    }

    fn add_paths(&mut self, module: &Module) {
        for path in &module.paths {
            if self.seen_paths.insert(path.clone()) {
                tracing::trace!(module = %module.name, path = %path, "Adding path");
                self.paths.push(path.clone());
            }
        }
    }

    /// Warn about own paths of `module` outside every path of its parent.
    fn check_parent(&mut self, module: &Module) {
        let Some(parent_name) = module.parent() else {
            return;
        };
        let Some(parent) = self.definitions.load(parent_name) else {
            return;
        };
        for path in &module.paths {
            if !paths::belongs_to(path, &parent.paths) {
                self.warn(ResolveWarning::PathOutsideParent {
                    module: module.name.clone(),
                    parent: parent.name.clone(),
                    path: path.clone(),
                });
            }
        }
    }

    fn visit(&mut self, from: &str, name: &str, depth: usize) {
        if self.visited.contains(name) {
            self.warn(ResolveWarning::CircularDependency {
                module: from.to_string(),
                dependency: name.to_string(),
            });
            return;
        }

        if depth > MAX_DEPTH {
            self.warn(ResolveWarning::DepthExceeded {
                module: name.to_string(),
                depth,
            });
            return;
        }

        self.visited.insert(name.to_string());

        let Some(module) = self.definitions.load(name) else {
            self.warn(ResolveWarning::MissingDependency {
                module: from.to_string(),
                dependency: name.to_string(),
            });
            return;
        };

        tracing::debug!(module = %name, depth, "Resolving dependency");
        self.check_parent(&module);
        self.add_paths(&module);

        for dependency in &module.depends_on {
            self.visit(&module.name, dependency, depth + 1);
        }
    }
}

/// Resolve the transitive path set of `module` against one catalog snapshot.
///
/// `module` is used as given; its dependencies are loaded from `definitions`.
#[must_use]
pub fn resolve(definitions: &Definitions, module: &Module) -> Resolution {
    let mut ctx = ResolveContext::new(definitions);

    ctx.visited.insert(module.name.clone());
    ctx.check_parent(module);
    ctx.add_paths(module);

    for dependency in &module.depends_on {
        ctx.visit(&module.name, dependency, 1);
    }

    tracing::debug!(
        module = %module.name,
        paths = ctx.paths.len(),
        warnings = ctx.warnings.len(),
        "Resolved module"
    );

    Resolution {
        module: module.name.clone(),
        paths: ctx.paths,
        warnings: ctx.warnings,
    }
}
