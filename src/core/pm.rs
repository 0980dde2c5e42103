//! Package-manager adapter: a closed set of supported managers with static
//! lock-file and command tables.
//!
//! Only command rendering lives here; the lock-file probe itself is in
//! `io::project` so this module stays free of filesystem access.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PackageManager {
    #[default]
    Pnpm,
    Bun,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Detection priority order (first lock-file match wins).
    pub const SUPPORTED: [PackageManager; 4] = [
        PackageManager::Pnpm,
        PackageManager::Bun,
        PackageManager::Yarn,
        PackageManager::Npm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// The lock file whose presence identifies this manager.
    pub fn lock_file(self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Bun => "bun.lockb",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Npm => "package-lock.json",
        }
    }

    /// `None` for anything outside the supported set; callers decide whether
    /// to warn and fall back.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            "yarn" => Some(PackageManager::Yarn),
            "npm" => Some(PackageManager::Npm),
            _ => None,
        }
    }

    /// Canonical dev-dependency install invocation for this manager.
    pub fn install_command(self, packages: &[&str]) -> String {
        let deps = packages.join(" ");
        match self {
            PackageManager::Pnpm => format!("pnpm add -D {deps}"),
            PackageManager::Bun => format!("bun add -d {deps}"),
            PackageManager::Yarn => format!("yarn add -D {deps}"),
            PackageManager::Npm => format!("npm i -D {deps}"),
        }
    }

    /// Canonical invocation for running a locally installed package binary.
    pub fn exec_command(self, command: &str) -> String {
        match self {
            PackageManager::Pnpm => format!("pnpm exec {command}"),
            PackageManager::Bun => format!("bunx {command}"),
            PackageManager::Yarn => format!("yarn {command}"),
            PackageManager::Npm => format!("npx {command}"),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_commands_match_documented_syntax() {
        let pkgs = ["husky", "lint-staged"];
        assert_eq!(
            PackageManager::Pnpm.install_command(&pkgs),
            "pnpm add -D husky lint-staged"
        );
        assert_eq!(
            PackageManager::Bun.install_command(&pkgs),
            "bun add -d husky lint-staged"
        );
        assert_eq!(
            PackageManager::Yarn.install_command(&pkgs),
            "yarn add -D husky lint-staged"
        );
        assert_eq!(
            PackageManager::Npm.install_command(&pkgs),
            "npm i -D husky lint-staged"
        );
    }

    #[test]
    fn exec_commands_match_documented_syntax() {
        assert_eq!(
            PackageManager::Pnpm.exec_command("husky install"),
            "pnpm exec husky install"
        );
        assert_eq!(
            PackageManager::Bun.exec_command("husky install"),
            "bunx husky install"
        );
        assert_eq!(
            PackageManager::Yarn.exec_command("husky install"),
            "yarn husky install"
        );
        assert_eq!(
            PackageManager::Npm.exec_command("husky install"),
            "npx husky install"
        );
    }

    #[test]
    fn parse_accepts_supported_names_case_insensitively() {
        assert_eq!(PackageManager::parse("pnpm"), Some(PackageManager::Pnpm));
        assert_eq!(PackageManager::parse(" Yarn "), Some(PackageManager::Yarn));
        assert_eq!(PackageManager::parse("NPM"), Some(PackageManager::Npm));
    }

    #[test]
    fn parse_rejects_unknown_names_so_callers_fall_back_to_default() {
        assert_eq!(PackageManager::parse("cargo"), None);
        assert_eq!(PackageManager::parse(""), None);
        // The fallback the orchestrator applies on None.
        assert_eq!(PackageManager::default(), PackageManager::Pnpm);
    }

    #[test]
    fn detection_priority_puts_pnpm_first_and_npm_last() {
        let names: Vec<&str> = PackageManager::SUPPORTED
            .iter()
            .map(|pm| pm.lock_file())
            .collect();
        assert_eq!(
            names,
            vec![
                "pnpm-lock.yaml",
                "bun.lockb",
                "yarn.lock",
                "package-lock.json"
            ]
        );
    }
}
