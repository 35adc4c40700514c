// modgit: Module Graph Resolver for Monorepos
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end resolution and planning scenarios over in-memory catalogs.

use std::fmt::Write as _;

use modgit::catalog::{Catalog, InlineStore};
use modgit::error::{ResolveWarning, WarningKind};
use modgit::paths;
use modgit::resolve::MAX_DEPTH;

fn catalog(text: &str) -> Catalog<InlineStore> {
    Catalog::new(InlineStore::new(text))
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn resolve_is_idempotent() {
    let catalog = catalog(
        r#"
[module "app"]
    path = app
    depends = lib
    depends = util
[module "lib"]
    path = lib
    depends = util
[module "util"]
    path = util
"#,
    );
    let first = catalog.resolve("app").unwrap();
    let second = catalog.resolve("app").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.paths, vec!["app", "lib", "util"]);
}

#[test]
fn resolve_shared_path_kept_at_first_occurrence() {
    let catalog = catalog(
        r#"
[module "app"]
    path = app
    depends = left
    depends = right
[module "left"]
    path = left
    path = src/shared
[module "right"]
    path = src/shared
    path = right
"#,
    );
    let resolution = catalog.resolve("app").unwrap();
    insta::assert_yaml_snapshot!(resolution.paths, @r"
    - app
    - left
    - src/shared
    - right
    ");
    assert!(resolution.warnings.is_empty());
}

#[test]
fn resolve_cycle_terminates() {
    let catalog = catalog(
        r#"
[module "A"]
    path = src/a
    depends = B
[module "B"]
    path = src/b
    depends = A
"#,
    );
    let resolution = catalog.resolve("A").unwrap();
    assert_eq!(resolution.paths, vec!["src/a", "src/b"]);
    assert_eq!(resolution.warnings.len(), 1);
    assert_eq!(resolution.warnings[0].kind(), WarningKind::CircularDependency);
}

#[test]
fn resolve_long_chain_is_bounded() {
    let mut text = String::new();
    for i in 0..60 {
        let _ = writeln!(text, "[module \"m{i}\"]\n    path = p{i}");
        if i < 59 {
            let _ = writeln!(text, "    depends = m{}", i + 1);
        }
    }

    let resolution = catalog(&text).resolve("m0").unwrap();
    assert_eq!(resolution.paths.len(), MAX_DEPTH + 1);
    assert_eq!(resolution.paths.last().map(String::as_str), Some("p50"));
    assert_eq!(
        resolution.warnings,
        vec![ResolveWarning::DepthExceeded {
            module: "m51".to_string(),
            depth: MAX_DEPTH + 1,
        }]
    );
}

#[test]
fn resolve_inherits_parent_dependencies() {
    let catalog = catalog(
        r#"
[module "core"]
    path = core
[module "team"]
    path = team
    depends = core
[module "team/ui"]
    path = team/ui
"#,
    );
    let resolution = catalog.resolve("team/ui").unwrap();
    assert_eq!(resolution.paths, vec!["team/ui", "core"]);
    assert!(paths::belongs_to("core/lib.rs", &resolution.paths));
}

#[test]
fn resolve_reports_missing_and_outside_parent() {
    let catalog = catalog(
        r#"
[module "team"]
    path = team
[module "team/ui"]
    path = frontend/ui
    depends = nowhere
"#,
    );
    let resolution = catalog.resolve("team/ui").unwrap();
    assert_eq!(resolution.paths, vec!["frontend/ui"]);
    let kinds: Vec<_> = resolution.warnings.iter().map(ResolveWarning::kind).collect();
    assert!(kinds.contains(&WarningKind::PathOutsideParent));
    assert!(kinds.contains(&WarningKind::MissingDependency));
}

#[test]
fn load_ghost_module_is_not_found() {
    let catalog = catalog(
        r#"
[module "core"]
    path = core
[module "ghost"]
    depends = core
"#,
    );
    assert!(catalog.load("ghost").unwrap_err().is_not_found());
    assert_eq!(catalog.list().unwrap(), vec!["core"]);
}

#[test]
fn load_name_prefix_does_not_match() {
    let catalog = catalog(
        r#"
[module "foobar"]
    path = foobar
"#,
    );
    assert!(catalog.load("foo").unwrap_err().is_not_found());
}

// =============================================================================
// Visibility Planning
// =============================================================================

#[test]
fn plan_keeps_ancestor_of_allowed_path() {
    let catalog = catalog(
        r#"
[module "X"]
    path = apps
[module "Y"]
    path = apps/web
[module "Z"]
    path = tools
"#,
    );
    let plan = catalog.plan_dev_visibility("Y").unwrap();
    assert_eq!(plan.include, vec!["/*"]);
    assert_eq!(plan.exclude, vec!["tools"]);
}

#[test]
fn plan_respects_directory_boundary() {
    let catalog = catalog(
        r#"
[module "app"]
    path = app
[module "web"]
    path = application/web
"#,
    );
    let plan = catalog.plan_dev_visibility("web").unwrap();
    assert_eq!(plan.exclude, vec!["app"]);
}

#[test]
fn plan_for_monorepo() {
    let catalog = catalog(
        r#"
[module "core"]
    path = libs/core
    readonly = true
[module "frontend"]
    path = frontend
    depends = core
[module "frontend/web"]
    path = frontend/web
[module "frontend/mobile"]
    path = frontend/mobile
[module "backend"]
    path = backend
    path = libs/db
    depends = core
[module "ci"]
    path = .github
    path = scripts
    role = infrastructure
"#,
    );
    let plan = catalog.plan_dev_visibility("frontend/web").unwrap();
    insta::assert_yaml_snapshot!(plan.exclude, @r"
    - frontend/mobile
    - backend
    - libs/db
    ");
    assert_eq!(
        plan.sparse_patterns(),
        vec!["/*", "!/frontend/mobile/", "!/backend/", "!/libs/db/"]
    );
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn classify_changed_files() {
    let resolution = catalog(
        r#"
[module "app"]
    path = src/app
"#,
    )
    .resolve("app")
    .unwrap();

    assert!(!paths::belongs_to("src/application/x", &resolution.paths));
    assert!(paths::belongs_to("src/app/x", &resolution.paths));
    assert!(paths::belongs_to("src/app", &resolution.paths));

    let partition = paths::partition(
        ["src/app/main.rs", "src/application/x", "README.md"],
        &resolution.paths,
    );
    assert_eq!(partition.inside, vec!["src/app/main.rs"]);
    assert_eq!(partition.outside, vec!["src/application/x", "README.md"]);
}

#[test]
fn plan_never_hides_infrastructure_under_foreign_directory() {
    let catalog = catalog(
        r#"
[module "tools"]
    path = tools
[module "ci"]
    path = tools/ci
    role = infrastructure
[module "app"]
    path = app
"#,
    );
    let plan = catalog.plan_dev_visibility("app").unwrap();
    assert!(plan.exclude.is_empty());
    assert_eq!(plan.sparse_patterns(), vec!["/*"]);
}
