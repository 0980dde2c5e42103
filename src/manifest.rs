//! `package.json` model.
//!
//! Known fields are typed so "ensure this nested key exists" operations are
//! checked at compile time; everything else is captured by a flattened map and
//! preserved verbatim on write-back. All mutators are additive: they return
//! whether they changed anything and never overwrite an existing non-empty
//! value, which makes a second run against an already-patched manifest a
//! no-op.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnpm: Option<PnpmSection>,
    /// Unrecognized top-level fields (name, version, ...), preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitizen: Option<CommitizenConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CommitizenConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PnpmSection {
    /// Override values may be arbitrary JSON (version strings, nested specs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// True if `name` appears in either `dependencies` or `devDependencies`.
    pub fn has_dep(&self, name: &str) -> bool {
        let in_map = |map: &Option<BTreeMap<String, String>>| {
            map.as_ref().is_some_and(|m| m.contains_key(name))
        };
        in_map(&self.dependencies) || in_map(&self.dev_dependencies)
    }

    /// Add `scripts.<name> = value` unless a non-empty value is already set.
    pub fn ensure_script(&mut self, name: &str, value: &str) -> bool {
        let scripts = self.scripts.get_or_insert_with(BTreeMap::new);
        match scripts.get(name) {
            Some(existing) if !existing.trim().is_empty() => false,
            _ => {
                scripts.insert(name.to_string(), value.to_string());
                true
            }
        }
    }

    /// Add `config.commitizen.path = value` unless a non-empty value is set.
    pub fn ensure_commitizen_path(&mut self, value: &str) -> bool {
        let commitizen = self
            .config
            .get_or_insert_with(ConfigSection::default)
            .commitizen
            .get_or_insert_with(CommitizenConfig::default);
        match &commitizen.path {
            Some(existing) if !existing.trim().is_empty() => false,
            _ => {
                commitizen.path = Some(value.to_string());
                true
            }
        }
    }

    /// Add `pnpm.overrides.<package> = version` unless the key exists.
    pub fn ensure_pnpm_override(&mut self, package: &str, version: &str) -> bool {
        let overrides = self
            .pnpm
            .get_or_insert_with(PnpmSection::default)
            .overrides
            .get_or_insert_with(BTreeMap::new);
        if overrides.contains_key(package) {
            return false;
        }
        overrides.insert(package.to_string(), Value::String(version.to_string()));
        true
    }
}
