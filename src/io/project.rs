//! Target-project probes: canonical paths, lock-file detection, node version.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::fs::exists;
use crate::core::pm::PackageManager;

/// All paths this tool reads or writes within a project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub tool_config: PathBuf,
    pub commitlint_config: PathBuf,
    pub cz_config: PathBuf,
    pub lint_staged_config: PathBuf,
    pub husky_dir: PathBuf,
    pub pre_commit_hook: PathBuf,
    pub commit_msg_hook: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let husky_dir = root.join(".husky");
        Self {
            manifest: root.join("package.json"),
            tool_config: root.join(".standards.toml"),
            commitlint_config: root.join("commitlint.config.cjs"),
            cz_config: root.join("cz.config.cjs"),
            lint_staged_config: root.join(".lintstagedrc.cjs"),
            pre_commit_hook: husky_dir.join("pre-commit"),
            commit_msg_hook: husky_dir.join("commit-msg"),
            husky_dir,
            root,
        }
    }
}

/// Probe lock files in priority order; the first match wins. Falls back to
/// `fallback` when no lock file is present.
pub fn detect_package_manager(root: &Path, fallback: PackageManager) -> PackageManager {
    for pm in PackageManager::SUPPORTED {
        if exists(&root.join(pm.lock_file())) {
            debug!(pm = pm.name(), lock_file = pm.lock_file(), "detected package manager");
            return pm;
        }
    }
    debug!(pm = fallback.name(), "no lock file found, using fallback");
    fallback
}

/// Major version of the host `node` runtime, or `None` when node is absent or
/// its version output is unparseable. A probe, never fatal.
pub fn node_major_version() -> Option<u32> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_node_major(&String::from_utf8_lossy(&output.stdout))
}

fn parse_node_major(raw: &str) -> Option<u32> {
    static VERSION_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^v?(\d+)\.").expect("valid version regex"));
    VERSION_RE
        .captures(raw.trim())?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}
