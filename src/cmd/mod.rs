// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> stdout
//!   classify, config, list, paths, plan, show
//! ```
//!
//! Each handler has a `render_*` counterpart that builds the output without
//! printing it.

pub mod classify;
pub mod config;
pub mod list;
pub mod paths;
pub mod plan;
pub mod show;


/// Print rendered command output, skipping empty results.
pub(crate) fn emit(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
