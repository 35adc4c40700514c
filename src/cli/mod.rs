// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modgit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modgit [global options] <command>
//! list [patterns...]
//! show <module>
//! paths <module>
//! plan <module>
//! classify <module> [files...]
//! options
//! ```

pub mod global;
pub mod module;


use crate::cli::global::GlobalOptions;
use crate::cli::module::{ClassifyArgs, ListArgs, PathsArgs, PlanArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Module Graph Resolver for Monorepos
///
/// Resolves module definitions into path sets and visibility plans.
#[derive(Debug, Parser)]
#[command(
    name = "modgit",
    author,
    version,
    about = "Module Graph Resolver for Monorepos",
    long_about = "modgit Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the modules declared in a `.modgit` file into the\n\
                  set of repository paths a module needs, and plans which\n\
                  paths to hide while working on it. See\n\
                  `modgit <command> --help` for more information about a command.",
    after_help = "DEFINITION FILE:\n\n\
                  By default, modgit reads `.modgit` at the root of the git\n\
                  worktree enclosing the current directory. Use --file to read\n\
                  another file. Tool settings are read from `modgit.toml` in the\n\
                  current directory, then from each --config file, then from\n\
                  MODGIT_* environment variables."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all tool options and their effective values.
    Options,

    /// Lists declared modules.
    List(ListArgs),

    /// Shows one module as declared, after inheritance.
    Show(ShowArgs),

    /// Prints the transitive path set of a module.
    Paths(PathsArgs),

    /// Prints the visibility plan for working on a module.
    Plan(PlanArgs),

    /// Splits files into inside and outside a module's path set.
    Classify(ClassifyArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
