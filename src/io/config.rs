//! Tool configuration stored in an optional `.standards.toml` at the project
//! root.
//!
//! This file is intended to be edited by humans and must remain stable and
//! automatable. Missing fields default to sensible values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::pm::PackageManager;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Manager assumed when no lock file identifies one.
    pub default_pm: String,

    pub compat: CompatConfig,
}

/// Runtime-version-gated dependency override.
///
/// Some prompt-flow dependencies ship majors that require newer node
/// releases; on older runtimes a pnpm override pins a compatible major. The
/// threshold is configuration rather than a constant because it tracks an
/// environmental assumption that drifts over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompatConfig {
    /// Apply the override when the host node major is below this.
    pub node_major_threshold: u32,
    /// Package name to pin under `pnpm.overrides`.
    pub package: String,
    /// Version requirement to pin it to.
    pub version: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_pm: "pnpm".to_string(),
            compat: CompatConfig::default(),
        }
    }
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            node_major_threshold: 18,
            package: "inquirer".to_string(),
            version: "^8.2.6".to_string(),
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<()> {
        if PackageManager::parse(&self.default_pm).is_none() {
            return Err(anyhow!("default_pm '{}' is not a supported package manager", self.default_pm));
        }
        if self.compat.node_major_threshold == 0 {
            return Err(anyhow!("compat.node_major_threshold must be > 0"));
        }
        if self.compat.package.trim().is_empty() || self.compat.version.trim().is_empty() {
            return Err(anyhow!("compat.package and compat.version must be non-empty"));
        }
        Ok(())
    }

    /// The configured default manager (validated, so parse cannot fail).
    pub fn default_pm(&self) -> PackageManager {
        PackageManager::parse(&self.default_pm).unwrap_or_default()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ToolConfig::default()`.
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    if !path.exists() {
        let cfg = ToolConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ToolConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ToolConfig::default());
        assert_eq!(cfg.default_pm(), PackageManager::Pnpm);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(".standards.toml");
        fs::write(&path, "default_pm = \"yarn\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.default_pm(), PackageManager::Yarn);
        assert_eq!(cfg.compat, CompatConfig::default());
    }

    #[test]
    fn unsupported_default_pm_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(".standards.toml");
        fs::write(&path, "default_pm = \"cargo\"\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("not a supported package manager"));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let cfg = ToolConfig {
            compat: CompatConfig {
                node_major_threshold: 0,
                ..CompatConfig::default()
            },
            ..ToolConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
