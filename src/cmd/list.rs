// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for modgit.

use std::fmt::Write as _;

use crate::catalog::{Catalog, DefinitionStore, Definitions};
use crate::cli::module::ListArgs;
use crate::error::Result;
use crate::module::Module;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or a pattern is invalid.
pub fn run_list_command<S: DefinitionStore>(args: &ListArgs, catalog: &Catalog<S>) -> Result<()> {
    let definitions = catalog.snapshot()?;
    let lines = render_list(args, &definitions)?;
    if lines.is_empty() {
        println!("No modules found");
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// One line per listed module, in declaration order.
///
/// # Errors
///
/// Returns an error if a pattern is not a valid glob.
pub fn render_list(args: &ListArgs, definitions: &Definitions) -> Result<Vec<String>> {
    let names = if args.patterns.is_empty() {
        definitions.names()
    } else {
        definitions.matching(&args.patterns)?
    };

    Ok(names
        .iter()
        .filter_map(|name| definitions.load(name))
        .map(|module| describe(&module, args.all))
        .collect())
}

fn describe(module: &Module, all: bool) -> String {
    let mut line = module.name.clone();
    for label in module.flags.labels() {
        let _ = write!(line, " [{label}]");
    }
    if all {
        let _ = write!(line, ": {}", module.paths.join(" "));
    }
    line
}
