// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module catalog loading from the `.modgit` definition store.
//!
//! ```text
//! .modgit (git-config syntax)
//!   [module "core"]
//!       path = lib/core
//!   [module "team"]
//!       path = team
//!       depends = core
//!   [module "team/ui"]          (no depends: inherits ["core"] from "team")
//!       path = team/ui
//!        |
//!        v
//! DefinitionStore::snapshot() --> Definitions (gix::config::File)
//!        |                             |
//!        v                             v
//!   Catalog::load(name)          Definitions::load(name)
//!   Catalog::list()              Definitions::names()
//! ```
//!
//! Nothing is cached between operations: every `Catalog` call takes a fresh
//! snapshot of the store. A single resolution or plan shares one snapshot.

use std::path::{Path, PathBuf};

use gix::bstr::ByteSlice;
use wax::{Glob, Program};

use crate::error::{CatalogError, ModgitResult};
use crate::module::{Module, ModuleFlags};
use crate::paths;
use crate::resolve::{self, Resolution};
use crate::visibility::{self, VisibilityPlan};

/// Default name of the definition file at the worktree root.
pub const DEFAULT_FILE_NAME: &str = ".modgit";

/// Section name holding module definitions (`[module "<name>"]`).
const SECTION: &str = "module";

/// `role` value that marks an always-visible module.
const ROLE_INFRASTRUCTURE: &str = "infrastructure";

/// Source of module definitions.
///
/// Implementors re-read their backing store on every call; the returned
/// [`Definitions`] is an immutable snapshot.
pub trait DefinitionStore {
    /// Parse the current content of the store.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the store cannot be read or parsed.
    fn snapshot(&self) -> ModgitResult<Definitions>;
}

/// Definitions stored in a file on disk.
///
/// A missing file yields an empty catalog.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefinitionStore for FileStore {
    fn snapshot(&self) -> ModgitResult<Definitions> {
        let origin = self.path.display().to_string();
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Definitions::parse(&text, origin),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %origin, "Definition file not found, catalog is empty");
                Definitions::parse("", origin)
            }
            Err(source) => Err(CatalogError::Read {
                path: origin,
                source,
            }
            .into()),
        }
    }
}

/// Definitions held in memory.
#[derive(Debug, Clone)]
pub struct InlineStore {
    text: String,
}

impl InlineStore {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DefinitionStore for InlineStore {
    fn snapshot(&self) -> ModgitResult<Definitions> {
        Definitions::parse(&self.text, "<inline>")
    }
}

/// A parsed snapshot of the definition store.
pub struct Definitions {
    file: gix::config::File<'static>,
    source: String,
}

impl std::fmt::Debug for Definitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Definitions")
            .field("source", &self.source)
            .field("modules", &self.names())
            .finish()
    }
}

impl Definitions {
    /// Parse git-config formatted definitions.
    ///
    /// `source` names the origin of `text` in error messages.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if `text` is not valid git-config syntax.
    pub fn parse(text: &str, source: impl Into<String>) -> ModgitResult<Self> {
        let source = source.into();
        let file = text
            .parse::<gix::config::File<'static>>()
            .map_err(|e| CatalogError::Parse {
                path: source.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { file, source })
    }

    /// Where this snapshot was read from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `(module name, section)` for every module section, in file order.
    fn module_sections(
        &self,
    ) -> impl Iterator<Item = (String, &gix::config::file::Section<'static>)> {
        self.file.sections().filter_map(|section| {
            let header = section.header();
            if !header.name().eq_ignore_ascii_case(SECTION.as_bytes()) {
                return None;
            }
            let name = header.subsection_name()?.to_str_lossy().into_owned();
            Some((name, section))
        })
    }

    /// All module names declaring at least one path, in first-seen order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (name, section) in self.module_sections() {
            let has_path = section
                .body()
                .values("path")
                .iter()
                .any(|value| paths::normalize(&value.to_str_lossy()).is_some());
            if has_path && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Look up one module by exact name.
    ///
    /// A module without any `path` entry is reported as absent, even when it
    /// declares dependencies. A nested module with no `depends` of its own
    /// receives its parent's dependency list.
    #[must_use]
    pub fn load(&self, name: &str) -> Option<Module> {
        let mut module = self.parse_module(name)?;

        if module.depends_on.is_empty()
            && let Some(parent_name) = module.parent()
            && let Some(parent) = self.load(parent_name)
            && !parent.depends_on.is_empty()
        {
            tracing::trace!(
                module = %module.name,
                parent = %parent.name,
                "Inheriting parent dependencies"
            );
            module.depends_on = parent.depends_on;
            module.inherited_depends = true;
        }

        Some(module)
    }

    /// Parse the entries of a single module, without parent inheritance.
    fn parse_module(&self, name: &str) -> Option<Module> {
        let mut module = Module::new(name);

        for (_, section) in self
            .module_sections()
            .filter(|(section_name, _)| section_name == name)
        {
            let body = section.body();
            module.paths.extend(
                body.values("path")
                    .iter()
                    .filter_map(|value| paths::normalize(&value.to_str_lossy())),
            );
            module.depends_on.extend(
                body.values("depends")
                    .iter()
                    .map(|value| value.to_str_lossy().trim().to_string())
                    .filter(|dep| !dep.is_empty()),
            );
            if let Some(value) = body.value_implicit("readonly") {
                module.flags.set(
                    ModuleFlags::READ_ONLY,
                    value.is_none_or(|value| parse_bool(&value.to_str_lossy())),
                );
            }
            if let Some(value) = body.value_implicit("ownersonly") {
                module.flags.set(
                    ModuleFlags::OWNERS_ONLY,
                    value.is_none_or(|value| parse_bool(&value.to_str_lossy())),
                );
            }
            if let Some(value) = body.value("role") {
                module.flags.set(
                    ModuleFlags::INFRASTRUCTURE,
                    value
                        .to_str_lossy()
                        .trim()
                        .eq_ignore_ascii_case(ROLE_INFRASTRUCTURE),
                );
            }
        }

        if module.paths.is_empty() {
            tracing::trace!(module = %name, "No paths declared");
            return None;
        }

        tracing::trace!(
            module = %name,
            paths = module.paths.len(),
            depends = module.depends_on.len(),
            "Loaded module"
        );
        Some(module)
    }

    /// Resolves module names or glob patterns to concrete module names.
    ///
    /// Exact names match directly; anything else is matched as a glob
    /// (`frontend/*`, `**`). Results are deduplicated and keep catalog order
    /// within each pattern.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPattern` if a pattern is not a valid glob.
    pub fn matching(&self, patterns: &[String]) -> ModgitResult<Vec<String>> {
        let names = self.names();
        let mut result: Vec<String> = Vec::new();

        for pattern in patterns {
            let matches: Vec<&String> = if names.contains(pattern) {
                names.iter().filter(|name| *name == pattern).collect()
            } else {
                let glob = Glob::new(pattern).map_err(|e| CatalogError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                names
                    .iter()
                    .filter(|name| glob.is_match(name.as_str()))
                    .collect()
            };

            if matches.is_empty() {
                tracing::warn!(pattern = %pattern, "Pattern matched no modules");
            }

            for name in matches {
                if !result.contains(name) {
                    result.push(name.clone());
                }
            }
        }

        Ok(result)
    }
}

/// Parse a git-config boolean.
///
/// `true/yes/on/1` are true; `false/no/off/0` and the empty string are false.
fn parse_bool(value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" | "" => false,
        other => {
            tracing::debug!(value = %other, "Unrecognised boolean, treating as false");
            false
        }
    }
}

/// Module catalog backed by a [`DefinitionStore`].
///
/// Every operation re-reads the store.
#[derive(Debug, Clone)]
pub struct Catalog<S = FileStore> {
    store: S,
}

impl Catalog<FileStore> {
    /// Catalog reading the definition file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(path))
    }
}

impl<S: DefinitionStore> Catalog<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Take a fresh snapshot of the store.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the store cannot be read or parsed.
    pub fn snapshot(&self) -> ModgitResult<Definitions> {
        self.store.snapshot()
    }

    /// Load one module by name.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the module declares no path, or a
    /// read/parse error from the store.
    pub fn load(&self, name: &str) -> ModgitResult<Module> {
        self.snapshot()?.load(name).ok_or_else(|| {
            CatalogError::NotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// All module names, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns a read/parse error from the store.
    pub fn list(&self) -> ModgitResult<Vec<String>> {
        Ok(self.snapshot()?.names())
    }

    /// Resolve the transitive path set of a module.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the requested module does not exist.
    /// Problems further down the dependency graph are reported as warnings in
    /// the [`Resolution`].
    pub fn resolve(&self, name: &str) -> ModgitResult<Resolution> {
        let definitions = self.snapshot()?;
        let module = require(&definitions, name)?;
        Ok(resolve::resolve(&definitions, &module))
    }

    /// Plan the visibility pattern set for working on `name`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the target module does not exist.
    pub fn plan_dev_visibility(&self, name: &str) -> ModgitResult<VisibilityPlan> {
        let definitions = self.snapshot()?;
        let module = require(&definitions, name)?;
        Ok(visibility::plan_dev_visibility(&definitions, &module))
    }
}

fn require(definitions: &Definitions, name: &str) -> ModgitResult<Module> {
    definitions.load(name).ok_or_else(|| {
        CatalogError::NotFound {
            name: name.to_string(),
        }
        .into()
    })
}
