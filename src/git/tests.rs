// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tempfile::TempDir;

use super::{definitions_path, worktree_root};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_definitions_path_absolute_is_kept() {
    let temp = temp_dir();
    let file = temp.path().join("custom.modgit");
    assert_eq!(definitions_path(Path::new("/elsewhere"), &file, true), file);
}

#[test]
fn test_definitions_path_without_discovery() {
    let temp = temp_dir();
    let path = definitions_path(temp.path(), Path::new(".modgit"), false);
    assert_eq!(path, temp.path().join(".modgit"));
}

#[test]
fn test_definitions_path_falls_back_to_cwd() {
    // A fresh temp dir is not inside any repository.
    let temp = temp_dir();
    if worktree_root(temp.path()).is_ok() {
        return;
    }
    let path = definitions_path(temp.path(), Path::new(".modgit"), true);
    assert_eq!(path, temp.path().join(".modgit"));
}
