//! Orchestration for `standards init`.
//!
//! A linear workflow: precondition check, config generation, manifest
//! patching, missing-dependency detection, install/activation, report. Every
//! step is individually idempotent, so nothing is rolled back on failure; a
//! re-run after fixing the underlying problem converges to the same end
//! state.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::deps::{has_lint_tools, missing_deps};
use crate::core::pm::PackageManager;
use crate::io::config::{ToolConfig, load_config};
use crate::io::fs;
use crate::io::process::run_live;
use crate::io::project::{ProjectPaths, detect_package_manager, node_major_version};
use crate::io::prompt::Prompter;
use crate::manifest::Manifest;
use crate::templates;

/// Parsed `init` flags. Immutable once parsed.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Explicitly selected package manager (unvalidated user input).
    pub pm: Option<String>,
    /// Skip the install confirmation and manager selection prompts.
    pub yes: bool,
    /// Only write files and print guidance, never install or touch hooks.
    pub no_install: bool,
}

/// Run the whole init workflow against `root`.
pub fn run_init<R: BufRead, W: Write>(
    root: &Path,
    options: &InitOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("standards init: commit toolchain scaffolding\n");
    let paths = ProjectPaths::new(root);

    // Precondition: refuse to touch anything without a manifest.
    if !fs::exists(&paths.manifest) {
        bail!(
            "no package.json found in {} (run this from the project root)",
            root.display()
        );
    }
    println!("✔ found package.json");

    let config = load_config(&paths.tool_config)?;
    let mut manifest: Manifest = fs::read_json(&paths.manifest)?;
    // Template choice and the missing set both use the manifest as read at
    // the start of the run; patching never touches dependencies.
    let full_mode = has_lint_tools(&manifest);

    generate_config_files(&paths, full_mode)?;
    patch_manifest(&paths, &mut manifest, &config, node_major_version())?;

    let missing = missing_deps(&manifest);
    if missing.is_empty() {
        println!("\n✔ all required packages already declared");
        let pm = resolve_pm(&paths, &config, options, prompter, false)?;
        // A user with pre-existing dependencies may already have hooks
        // configured another way; activation failure is only a warning here.
        if let Err(err) = activate_hooks(pm) {
            println!("⚠ husky install failed: {err:#}");
        }
        print_success(pm, full_mode);
        return Ok(());
    }

    println!("\nmissing packages: {}", missing.join(", "));

    if options.no_install {
        print_install_guidance(&missing, config.default_pm());
        return Ok(());
    }

    let proceed = options.yes || prompter.confirm("install the missing packages now?")?;
    if !proceed {
        print_install_guidance(&missing, config.default_pm());
        return Ok(());
    }

    let pm = resolve_pm(&paths, &config, options, prompter, true)?;
    install_dependencies(pm, &missing)?;
    // The freshly installed tools are assumed present from here on, so a
    // failed activation is fatal on this path.
    activate_hooks(pm)?;
    print_success(pm, full_mode);
    Ok(())
}

/// Write the generated config files (idempotent) and the hook scripts
/// (always rewritten to stay in sync with the expected invocation pattern).
fn generate_config_files(paths: &ProjectPaths, full_mode: bool) -> Result<()> {
    println!("\ngenerating config files...");

    write_config_file(&paths.commitlint_config, templates::COMMITLINT_CONFIG)?;
    write_config_file(&paths.cz_config, templates::CZ_CONFIG)?;

    let lint_staged = if full_mode {
        templates::LINT_STAGED_FULL
    } else {
        templates::LINT_STAGED_SIMPLE
    };
    write_config_file(&paths.lint_staged_config, lint_staged)?;

    fs::ensure_dir(&paths.husky_dir)?;
    for (path, contents) in [
        (&paths.pre_commit_hook, templates::PRE_COMMIT_HOOK),
        (&paths.commit_msg_hook, templates::COMMIT_MSG_HOOK),
    ] {
        fs::write_file(path, contents)?;
        fs::chmod_safe(path);
        println!("  ✔ {}", display_name(path));
    }
    Ok(())
}

fn write_config_file(path: &Path, contents: &str) -> Result<()> {
    if fs::write_file_if_missing(path, contents)? {
        println!("  ✔ {}", display_name(path));
    } else {
        println!("  ⚠ {} (exists, skipped)", display_name(path));
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Additively patch the manifest and write it back only if anything changed.
fn patch_manifest(
    paths: &ProjectPaths,
    manifest: &mut Manifest,
    config: &ToolConfig,
    node_major: Option<u32>,
) -> Result<()> {
    println!("\nupdating package.json...");
    let mut changed = false;

    for (name, value) in [("prepare", "husky install"), ("cz", "cz"), ("commit", "cz")] {
        changed |= report(manifest.ensure_script(name, value), &format!("scripts.{name}"), value);
    }
    changed |= report(
        manifest.ensure_commitizen_path("cz-git"),
        "config.commitizen.path",
        "cz-git",
    );

    // Old node runtimes need a compatible prompt-library major pinned under
    // pnpm.overrides. Added once, never removed automatically.
    if let Some(major) = node_major
        && major < config.compat.node_major_threshold
        && manifest.ensure_pnpm_override(&config.compat.package, &config.compat.version)
    {
        println!(
            "  ✔ pinned pnpm.overrides.{} = \"{}\" (node {major} < {})",
            config.compat.package, config.compat.version, config.compat.node_major_threshold
        );
        changed = true;
    }

    if changed {
        fs::write_json(&paths.manifest, manifest)?;
        info!("package.json updated");
    } else {
        debug!("package.json already configured, not rewriting");
    }
    Ok(())
}

fn report(added: bool, key: &str, value: &str) -> bool {
    if added {
        println!("  ✔ added {key} = \"{value}\"");
    } else {
        println!("  ⚠ {key} (exists, skipped)");
    }
    added
}

/// Resolve the manager to use: explicit flag (validated, warn + detect on an
/// unsupported name), else interactive choice when allowed, else detection.
fn resolve_pm<R: BufRead, W: Write>(
    paths: &ProjectPaths,
    config: &ToolConfig,
    options: &InitOptions,
    prompter: &mut Prompter<R, W>,
    interactive: bool,
) -> Result<PackageManager> {
    let detected = detect_package_manager(&paths.root, config.default_pm());
    match &options.pm {
        Some(name) => match PackageManager::parse(name) {
            Some(pm) => Ok(pm),
            None => {
                println!("⚠ unsupported package manager '{name}', using {detected}");
                Ok(detected)
            }
        },
        None if interactive && !options.yes => {
            prompter.choose_pm("select a package manager", detected)
        }
        None => Ok(detected),
    }
}

fn install_dependencies(pm: PackageManager, missing: &[&str]) -> Result<()> {
    println!("\ninstalling packages...");
    let command = pm.install_command(missing);
    println!("  running: {command}");
    let code = run_live(&command).context("run install command")?;
    if code != 0 {
        bail!("dependency install failed with exit code {code}");
    }
    println!("  ✔ packages installed");
    Ok(())
}

fn activate_hooks(pm: PackageManager) -> Result<()> {
    println!("\nactivating git hooks...");
    let command = pm.exec_command("husky install");
    println!("  running: {command}");
    let code = run_live(&command).context("run husky install")?;
    if code != 0 {
        bail!("husky install failed with exit code {code}");
    }
    println!("  ✔ hooks activated");
    Ok(())
}

/// Manual install guidance for every supported manager, marking the default.
fn print_install_guidance(missing: &[&str], default_pm: PackageManager) {
    println!("\nrun one of the following to install the missing packages:\n");
    for pm in PackageManager::SUPPORTED {
        let marker = if pm == default_pm { "  (recommended)" } else { "" };
        println!("  {}{marker}", pm.install_command(missing));
    }
    println!("\nthen activate the hooks with: husky install\n");
}

fn print_success(pm: PackageManager, full_mode: bool) {
    println!("\n✔ commit toolchain ready\n");
    println!("usage:");
    println!("  {pm} commit   interactive conventional commit");
    println!("  {pm} cz       same flow, shorter alias\n");
    if full_mode {
        println!("lint-staged is in full mode (eslint + prettier on staged files).");
        println!("adjust .lintstagedrc.cjs to change what runs per extension.");
    } else {
        println!("lint-staged is in simple mode (commit-message checks only).");
        println!("install eslint and prettier and re-run init to enable full mode.");
    }
}
