// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module records.
//!
//! ```text
//! [module "frontend/css"]          Module {
//!     path = web/css          -->    name:       "frontend/css"
//!     depends = design               paths:      ["web/css"]
//!     readonly = true                depends_on: ["design"]
//!                                    flags:      READ_ONLY
//!                                  }
//! parent("frontend/css") = "frontend"
//! ```

use bitflags::bitflags;
use serde::{Serialize, Serializer};

use crate::paths::SEPARATOR;

bitflags! {
    /// Visibility and permission flags of a module.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModuleFlags: u8 {
        /// The module's paths must not be modified.
        const READ_ONLY = 1 << 0;
        /// Only the module owners may change its paths.
        const OWNERS_ONLY = 1 << 1;
        /// The module stays visible whichever module is active.
        const INFRASTRUCTURE = 1 << 2;
    }
}

impl Serialize for ModuleFlags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.labels())
    }
}

impl ModuleFlags {
    /// Short labels for display (`ro`, `owners`, `infra`).
    #[must_use]
    pub fn labels(self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.contains(Self::READ_ONLY) {
            labels.push("ro");
        }
        if self.contains(Self::OWNERS_ONLY) {
            labels.push("owners");
        }
        if self.contains(Self::INFRASTRUCTURE) {
            labels.push("infra");
        }
        labels
    }
}

/// A named subset of the repository tree with dependency edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Unique, possibly nested (`a/b`) name.
    pub name: String,
    /// Paths owned directly by this module, in declaration order.
    pub paths: Vec<String>,
    /// Names of required modules, in declaration order.
    pub depends_on: Vec<String>,
    /// `true` when `depends_on` was copied from the parent module.
    pub inherited_depends: bool,
    /// Permission and visibility flags.
    pub flags: ModuleFlags,
}

impl Module {
    /// Create an empty module record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paths: Vec::new(),
            depends_on: Vec::new(),
            inherited_depends: false,
            flags: ModuleFlags::empty(),
        }
    }

    /// Name of the enclosing module, if this one is nested.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        parent_name(&self.name)
    }

    #[must_use]
    pub const fn read_only(&self) -> bool {
        self.flags.contains(ModuleFlags::READ_ONLY)
    }

    #[must_use]
    pub const fn owners_only(&self) -> bool {
        self.flags.contains(ModuleFlags::OWNERS_ONLY)
    }

    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        self.flags.contains(ModuleFlags::INFRASTRUCTURE)
    }
}

/// The substring of `name` before its last separator.
#[must_use]
pub fn parent_name(name: &str) -> Option<&str> {
    name.rfind(SEPARATOR).map(|idx| &name[..idx])
}

#[cfg(test)]
mod tests;
