// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Module, ModuleFlags, parent_name};

#[test]
fn test_parent_name() {
    assert_eq!(parent_name("frontend/css"), Some("frontend"));
    assert_eq!(parent_name("a/b/c"), Some("a/b"));
    assert_eq!(parent_name("core"), None);
}

#[test]
fn test_module_parent() {
    let module = Module::new("team/ui");
    assert_eq!(module.parent(), Some("team"));
    assert_eq!(Module::new("team").parent(), None);
}

#[test]
fn test_flag_accessors() {
    let mut module = Module::new("infra");
    assert!(!module.read_only());
    assert!(!module.is_infrastructure());

    module.flags = ModuleFlags::READ_ONLY | ModuleFlags::INFRASTRUCTURE;
    assert!(module.read_only());
    assert!(!module.owners_only());
    assert!(module.is_infrastructure());
}

#[test]
fn test_flag_labels() {
    let flags = ModuleFlags::all();
    insta::assert_yaml_snapshot!(flags.labels(), @r"
    - ro
    - owners
    - infra
    ");
    assert!(ModuleFlags::empty().labels().is_empty());
}
