// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   List | Show | Paths | Plan | Classify | Options
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;

use modgit::catalog::Catalog;
use modgit::cli::global::GlobalOptions;
use modgit::cli::{self, Command};
use modgit::cmd::classify::run_classify_command;
use modgit::cmd::config::run_options_command;
use modgit::cmd::list::run_list_command;
use modgit::cmd::paths::run_paths_command;
use modgit::cmd::plan::run_plan_command;
use modgit::cmd::show::run_show_command;
use modgit::config::loader::ConfigLoader;
use modgit::config::Config;
use modgit::error::Result;
use modgit::git;
use modgit::logging::init_logging;
use modgit::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let loaded = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, loaded.as_ref().ok().map(|(c, _)| c));
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let (config, config_files) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files)
}

/// Console and file levels come from the merged config when it loaded, from
/// the raw CLI flags otherwise.
fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let (console_level, file_level, log_file) = match config {
        Some(config) => (
            config.global.output_log_level,
            config.global.file_log_level,
            config.global.log_file.clone(),
        ),
        None => {
            let console = global
                .log_level
                .and_then(LogLevel::from_u8)
                .unwrap_or(LogLevel::WARN);
            let file = global
                .file_log_level
                .and_then(LogLevel::from_u8)
                .unwrap_or(console);
            (console, file, global.log_file.clone())
        }
    };

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
        .with_ansi(std::io::stderr().is_terminal())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[PathBuf]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => definitions_path(config).map(|definitions| {
            run_options_command(config, &definitions, config_files);
        }),
        Some(Command::List(args)) => {
            open_catalog(config).and_then(|catalog| run_list_command(args, &catalog))
        }
        Some(Command::Show(args)) => {
            open_catalog(config).and_then(|catalog| run_show_command(args, &catalog))
        }
        Some(Command::Paths(args)) => {
            open_catalog(config).and_then(|catalog| run_paths_command(args, &catalog))
        }
        Some(Command::Plan(args)) => {
            open_catalog(config).and_then(|catalog| run_plan_command(args, &catalog))
        }
        Some(Command::Classify(args)) => {
            open_catalog(config).and_then(|catalog| run_classify_command(args, &catalog))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_config(global: &GlobalOptions) -> Result<(Config, Vec<PathBuf>)> {
    let loader =
        ConfigLoader::for_invocation(&global.configs).with_overrides(global.to_config_overrides())?;
    let files = loader.loaded_files().to_vec();
    let config = loader.build()?;
    Ok((config, files))
}

fn definitions_path(config: &Config) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    Ok(git::definitions_path(
        &cwd,
        &config.catalog.file,
        config.catalog.discover,
    ))
}

fn open_catalog(config: &Config) -> Result<Catalog> {
    let path = definitions_path(config)?;
    tracing::debug!(path = %path.display(), "Reading module definitions");
    Ok(Catalog::open(path))
}
