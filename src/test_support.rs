//! Test fixtures shared between unit and integration tests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::manifest::Manifest;

/// A throwaway project directory seeded with a `package.json`.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new(manifest_json: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        fs::write(dir.path().join("package.json"), manifest_json)
            .context("write package.json")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent dirs.
    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create parent dirs")?;
        }
        fs::write(&path, contents).with_context(|| format!("write {name}"))
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("read project file")
    }

    /// Parse the current `package.json`.
    pub fn manifest(&self) -> Manifest {
        serde_json::from_str(&self.read("package.json")).expect("parse package.json")
    }

    /// Byte snapshot of the named files, for before/after comparisons.
    pub fn snapshot(&self, names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .map(|name| (name.to_string(), self.read(name)))
            .collect()
    }
}
