// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{belongs_to, is_ancestor, is_within, normalize, partition};

#[test]
fn test_belongs_to_boundary() {
    let set = ["src/app"];
    assert!(!belongs_to("src/application/x", &set));
    assert!(belongs_to("src/app/x", &set));
    assert!(belongs_to("src/app", &set));
}

#[test]
fn test_belongs_to_empty_set() {
    let set: [&str; 0] = [];
    assert!(!belongs_to("src/app", &set));
}

#[test]
fn test_belongs_to_any_member() {
    let set = vec!["docs".to_string(), "lib/core".to_string()];
    assert!(belongs_to("lib/core/src/main.rs", &set));
    assert!(belongs_to("docs/index.md", &set));
    assert!(!belongs_to("lib/corelib/x", &set));
    assert!(!belongs_to("lib", &set));
}

#[test]
fn test_is_ancestor_is_strict() {
    assert!(is_ancestor("apps", "apps/web"));
    assert!(is_ancestor("apps", "apps/web/src"));
    assert!(!is_ancestor("apps", "apps"));
    assert!(!is_ancestor("apps", "applications/web"));
    assert!(!is_ancestor("apps/web", "apps"));
}

#[test]
fn test_is_within() {
    assert!(is_within("apps", "apps"));
    assert!(is_within("apps/web", "apps"));
    assert!(!is_within("apps2", "apps"));
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("src/app/"), Some("src/app".to_string()));
    assert_eq!(normalize("./src/app"), Some("src/app".to_string()));
    assert_eq!(normalize("  docs  "), Some("docs".to_string()));
    assert_eq!(normalize("./"), None);
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("."), None);
}

#[test]
fn test_partition_preserves_order() {
    let set = ["src/app"];
    let result = partition(
        ["src/app/main.rs", "README.md", "src/application/x", "src/app/lib.rs"],
        &set,
    );
    assert_eq!(result.inside, vec!["src/app/main.rs", "src/app/lib.rs"]);
    assert_eq!(result.outside, vec!["README.md", "src/application/x"]);
}
