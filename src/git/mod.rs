// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Worktree discovery.
//!
//! ```text
//! cwd (anywhere inside the worktree)
//!   gix::discover --> repo.workdir() --> <root>/.modgit
//! ```
//!
//! Read-only: nothing here touches the index, refs or the working tree.

use std::path::{Path, PathBuf};

use crate::error::{GitError, GixError, ModgitResult};

/// Locate the worktree root of the repository containing `path`.
///
/// # Errors
///
/// Returns a `GitError` if no repository encloses `path`, or if the
/// repository is bare.
pub fn worktree_root(path: &Path) -> ModgitResult<PathBuf> {
    let repo =
        gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
    let workdir = repo.workdir().ok_or_else(|| GitError::BareRepository {
        path: path.display().to_string(),
    })?;
    Ok(workdir.to_path_buf())
}

/// Resolve the definition file location.
///
/// Absolute `file` is used as is. A relative `file` is joined to the worktree
/// root when `discover` is set and a worktree encloses `cwd`, otherwise to
/// `cwd`.
#[must_use]
pub fn definitions_path(cwd: &Path, file: &Path, discover: bool) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    if discover {
        match worktree_root(cwd) {
            Ok(root) => return root.join(file),
            Err(e) => {
                tracing::debug!(error = %e, "No worktree found, using current directory");
            }
        }
    }
    cwd.join(file)
}

#[cfg(test)]
mod tests;
