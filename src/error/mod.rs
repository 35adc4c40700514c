// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        ModgitError (16 bytes)
//!               |
//!      +--------+--------+
//!      |        |        |
//!      v        v        v
//!   Catalog    Git     Config
//!     Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Catalog  NotFound, Read, Parse, InvalidPattern
//!   Git      Gix(Discover), BareRepository
//!   Config   InvalidValue
//!
//! Degraded traversal conditions are not errors:
//!   ResolveWarning  MissingDependency, CircularDependency,
//!                   DepthExceeded, PathOutsideParent, ModuleSkipped
//! ```

use serde::Serialize;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModgitError`].
pub type ModgitResult<T> = std::result::Result<T, ModgitError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum ModgitError {
    /// Module catalog error.
    #[error("catalog error: {0}")]
    Catalog(#[from] Box<CatalogError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl ModgitError {
    /// Returns `true` if this error is a lookup of an undefined module.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Catalog(e) if matches!(**e, CatalogError::NotFound { .. }))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModgitError {
                fn from(err: $error) -> Self {
                    ModgitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    CatalogError => Catalog,
    GitError => Git,
    ConfigError => Config,
}

// --- Catalog Errors ---

/// Module definition store errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No `path` entry is declared for the module.
    #[error("module '{name}' not found")]
    NotFound { name: String },

    /// Failed to read the definition file.
    #[error("failed to read module definitions '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The definition file is not valid git-config syntax.
    #[error("failed to parse module definitions '{path}': {message}")]
    Parse { path: String, message: String },

    /// A module name pattern is not a valid glob.
    #[error("invalid module pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),
}

// --- Git Errors ---

/// Git query errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Repository has no worktree, so there is nowhere to read `.modgit` from.
    #[error("repository at '{path}' has no worktree (bare repository)")]
    BareRepository { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Resolution Warnings ---

/// Kind of a degraded, non-fatal resolution condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    MissingDependency,
    CircularDependency,
    DepthExceeded,
    PathOutsideParent,
    ModuleSkipped,
}

/// A condition that degraded a resolution or plan without aborting it.
///
/// Resolution and planning always return a usable partial result together
/// with the list of warnings raised while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolveWarning {
    /// `module` depends on a name that has no definition.
    #[error("dependency '{dependency}' of module '{module}' not found")]
    MissingDependency { module: String, dependency: String },

    /// `dependency` was already visited when `module` referenced it again.
    #[error("circular dependency detected: '{dependency}' (from '{module}') already visited, skipping")]
    CircularDependency { module: String, dependency: String },

    /// Traversal passed the depth bound at `module`.
    #[error("dependency depth limit exceeded at module '{module}' (depth {depth})")]
    DepthExceeded { module: String, depth: usize },

    /// A nested module declares a path outside every path of its parent.
    #[error("path '{path}' of module '{module}' is not under any path of parent '{parent}'")]
    PathOutsideParent {
        module: String,
        parent: String,
        path: String,
    },

    /// A catalog module could not be loaded while planning and was ignored.
    #[error("module '{module}' could not be loaded, skipping")]
    ModuleSkipped { module: String },
}

impl ResolveWarning {
    /// The kind of this warning.
    #[must_use]
    pub const fn kind(&self) -> WarningKind {
        match self {
            Self::MissingDependency { .. } => WarningKind::MissingDependency,
            Self::CircularDependency { .. } => WarningKind::CircularDependency,
            Self::DepthExceeded { .. } => WarningKind::DepthExceeded,
            Self::PathOutsideParent { .. } => WarningKind::PathOutsideParent,
            Self::ModuleSkipped { .. } => WarningKind::ModuleSkipped,
        }
    }

    /// Emit this warning through `tracing`.
    pub(crate) fn report(&self) {
        tracing::warn!(kind = ?self.kind(), "{self}");
    }
}
