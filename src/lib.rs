// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        list / show / paths / plan
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!        git (worktree) --> catalog (.modgit, gix config)
//!                            |
//!                 +----------+----------+
//!                 v                     v
//!              resolve  ------------> visibility
//!           (dependency DFS)       (exclusion plan)
//!
//!   +-----------------------------------------+
//!   |  model        module, paths (classify)  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod module;
pub mod paths;
pub mod resolve;
pub mod visibility;
