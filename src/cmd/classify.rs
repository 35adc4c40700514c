// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classify command implementation for modgit.
//!
//! Text output marks each file with `+` (inside the module's path set) or
//! `-` (outside). With `--outside` only the foreign files are printed,
//! unmarked.

use std::io::BufRead;

use anyhow::Context;

use crate::catalog::{Catalog, DefinitionStore};
use crate::cli::module::{ClassifyArgs, OutputFormat};
use crate::error::Result;
use crate::paths::{self, Partition};

/// Main handler for classify command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, the module is not defined,
/// or stdin cannot be read.
pub fn run_classify_command<S: DefinitionStore>(
    args: &ClassifyArgs,
    catalog: &Catalog<S>,
) -> Result<()> {
    let resolution = catalog.resolve(&args.module)?;

    let files = if args.files.is_empty() {
        read_files(std::io::stdin().lock())?
    } else {
        args.files
            .iter()
            .filter_map(|file| paths::normalize(&file.to_string_lossy()))
            .collect()
    };

    let partition = paths::partition(files, &resolution.paths);
    tracing::debug!(
        module = %resolution.module,
        inside = partition.inside.len(),
        outside = partition.outside.len(),
        "Classified files"
    );
    super::emit(&render_classify(&partition, args.format, args.outside)?);
    Ok(())
}

/// Read one file path per line, skipping blank lines.
///
/// # Errors
///
/// Returns an error if the reader fails.
pub fn read_files<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read file list")?;
        if let Some(file) = paths::normalize(&line) {
            files.push(file);
        }
    }
    Ok(files)
}

/// Render a classification result.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_classify(
    partition: &Partition,
    format: OutputFormat,
    outside_only: bool,
) -> Result<String> {
    let rendered = match (format, outside_only) {
        (OutputFormat::Text, true) => partition.outside.join("\n"),
        (OutputFormat::Text, false) => partition
            .inside
            .iter()
            .map(|file| format!("+ {file}"))
            .chain(partition.outside.iter().map(|file| format!("- {file}")))
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&partition.outside)?,
        (OutputFormat::Json, false) => serde_json::to_string_pretty(partition)?,
    };
    Ok(rendered)
}
