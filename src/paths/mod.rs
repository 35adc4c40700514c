// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory-boundary path predicates.
//!
//! ```text
//! belongs_to("src/app/x",     {"src/app"})  true   (boundary '/')
//! belongs_to("src/app",       {"src/app"})  true   (equal)
//! belongs_to("src/application", {"src/app"}) false (no boundary)
//! is_ancestor("apps", "apps/web")           true
//! ```
//!
//! Paths are repository-relative and always use `/` as separator.

use serde::Serialize;

/// Path separator used in module definitions and repository paths.
pub const SEPARATOR: char = '/';

/// Normalise a declared path: trim whitespace, strip a leading `./` and any
/// trailing separators. Returns `None` for paths that end up empty.
#[must_use]
pub fn normalize(path: &str) -> Option<String> {
    let mut path = path.trim();
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    let path = path.trim_end_matches(SEPARATOR);
    if path.is_empty() || path == "." {
        None
    } else {
        Some(path.to_string())
    }
}

/// Returns `true` if `path` equals `prefix` or lies below it.
#[must_use]
pub fn is_within(path: &str, prefix: &str) -> bool {
    path == prefix || is_ancestor(prefix, path)
}

/// Returns `true` if `dir` is a strict directory-boundary ancestor of `path`.
#[must_use]
pub fn is_ancestor(dir: &str, path: &str) -> bool {
    path.strip_prefix(dir)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Returns `true` if `path` belongs to any member of `set`.
///
/// A member matches when it equals `path` or is a directory-boundary prefix
/// of it; `"src/app"` never matches `"src/application"`.
#[must_use]
pub fn belongs_to<S: AsRef<str>>(path: &str, set: &[S]) -> bool {
    set.iter().any(|member| is_within(path, member.as_ref()))
}

/// Files split by membership in a resolved path set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// Files inside the set, in input order.
    pub inside: Vec<String>,
    /// Files outside the set, in input order.
    pub outside: Vec<String>,
}

/// Partition `files` into those that belong to `set` and the rest.
#[must_use]
pub fn partition<I, S>(files: I, set: &[S]) -> Partition
where
    I: IntoIterator,
    I::Item: Into<String>,
    S: AsRef<str>,
{
    let mut result = Partition::default();
    for file in files {
        let file = file.into();
        if belongs_to(&file, set) {
            result.inside.push(file);
        } else {
            result.outside.push(file);
        }
    }
    result
}

#[cfg(test)]
mod tests;
