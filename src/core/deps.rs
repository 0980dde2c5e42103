//! Required-dependency list and set computations over a manifest.

use crate::manifest::Manifest;

/// Packages the commit-lint/hook pipeline needs at runtime.
pub const REQUIRED_DEPS: [&str; 6] = [
    "husky",
    "lint-staged",
    "@commitlint/cli",
    "@commitlint/config-conventional",
    "cz-git",
    "commitizen",
];

/// Required packages not declared in either dependency map.
pub fn missing_deps(manifest: &Manifest) -> Vec<&'static str> {
    REQUIRED_DEPS
        .iter()
        .copied()
        .filter(|dep| !manifest.has_dep(dep))
        .collect()
}

/// True when both a linter and a formatter are already declared, which
/// selects the full staged-file lint template over the simple one.
pub fn has_lint_tools(manifest: &Manifest) -> bool {
    manifest.has_dep("eslint") && manifest.has_dep("prettier")
}
