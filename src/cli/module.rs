// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the module query commands.
//!
//! ```text
//! list [PATTERN...]
//! show <MODULE>
//! paths <MODULE> [--format text|json]
//! plan <MODULE> [--format text|json]
//! classify <MODULE> [FILE...] [--outside]
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format of commands that print a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Module names or glob patterns (e.g. `team/*`). Lists all when empty.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Shows flags and paths next to each module.
    #[arg(short = 'a', long)]
    pub all: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Module name.
    pub module: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `paths` command.
#[derive(Debug, Clone, Args)]
pub struct PathsArgs {
    /// Module name.
    pub module: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Target module name.
    pub module: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Prints the raw include/exclude sets instead of sparse patterns.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `classify` command.
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Module whose resolved path set is the reference.
    pub module: String,

    /// Files to classify, relative to the worktree root. Read from stdin,
    /// one per line, when none are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Prints only the files outside the path set.
    #[arg(long)]
    pub outside: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
