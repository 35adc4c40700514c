// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use modgit::cli::module::OutputFormat;
use modgit::cli::{Cli, Command};
use modgit::config::loader::ConfigLoader;
use std::path::PathBuf;

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli =
        Cli::try_parse_from(["modgit", "-l", "5", "-f", "/tmp/defs", "paths", "core"]).unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file, Some(PathBuf::from("/tmp/defs")));
    assert!(matches!(cli.command, Some(Command::Paths(_))));
}

#[test]
fn cli_global_options_after_command_are_rejected() {
    assert!(Cli::try_parse_from(["modgit", "paths", "core", "-l", "5"]).is_err());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["modgit", "switch", "core"]).is_err());
}

#[test]
fn cli_invalid_format() {
    assert!(Cli::try_parse_from(["modgit", "plan", "core", "--format", "yaml"]).is_err());
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_options_command() {
    let cli = Cli::try_parse_from(["modgit", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn cli_show_json() {
    let cli = Cli::try_parse_from(["modgit", "show", "team/ui", "--format", "json"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.module, "team/ui");
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn cli_plan_raw_json() {
    let cli = Cli::try_parse_from(["modgit", "plan", "web", "--raw", "--format", "json"]).unwrap();
    let Some(Command::Plan(args)) = cli.command else {
        panic!("expected plan command");
    };
    assert!(args.raw);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn cli_classify_reads_stdin_without_files() {
    let cli = Cli::try_parse_from(["modgit", "classify", "core"]).unwrap();
    let Some(Command::Classify(args)) = cli.command else {
        panic!("expected classify command");
    };
    assert!(args.files.is_empty());
    assert!(!args.outside);
}

// =============================================================================
// CLI Overrides Into Config
// =============================================================================

#[test]
fn cli_overrides_reach_config() {
    let cli = Cli::try_parse_from([
        "modgit",
        "-l",
        "4",
        "-f",
        "defs/modules",
        "--no-discover",
        "list",
    ])
    .unwrap();

    let config = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 1\n\n[catalog]\nfile = \"ignored\"\n")
        .with_overrides(cli.global.to_config_overrides())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.global.file_log_level.as_u8(), 4);
    assert_eq!(config.catalog.file, PathBuf::from("defs/modules"));
    assert!(!config.catalog.discover);
}
