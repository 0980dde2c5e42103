//! CLI entry point for the commit-standards scaffolding tool.

use std::path::Path;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use standards::init::{InitOptions, run_init};
use standards::io::prompt::Prompter;
use standards::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "standards",
    version,
    about = "Scaffold a conventional-commit toolchain (husky, lint-staged, commitlint, cz-git)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write commit tooling configs, patch package.json, and install hooks.
    Init {
        /// Force a package manager (pnpm, bun, yarn, npm) instead of
        /// detecting one from lock files.
        #[arg(long, value_name = "name")]
        pm: Option<String>,
        /// Answer yes to every prompt.
        #[arg(long)]
        yes: bool,
        /// Only write files and print install guidance; never install
        /// packages or activate hooks.
        #[arg(long)]
        no_install: bool,
    },
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(exit_codes::OK);
        }
        Err(err) => {
            // Unknown subcommand or bad flag: report it, show help, fail.
            let _ = err.print();
            let _ = Cli::command().print_help();
            std::process::exit(exit_codes::INVALID);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Init { pm, yes, no_install }) => {
            let options = InitOptions { pm, yes, no_install };
            // Scoped here so the stdin lock is released on every exit path.
            let mut prompter = Prompter::stdio();
            run_init(Path::new("."), &options, &mut prompter)
        }
        None => {
            Cli::command().print_help().context("print help")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::parse_from(["standards", "init"]);
        match cli.command {
            Some(Command::Init { pm, yes, no_install }) => {
                assert!(pm.is_none());
                assert!(!yes);
                assert!(!no_install);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn parse_init_flags() {
        let cli = Cli::parse_from(["standards", "init", "--pm", "yarn", "--yes", "--no-install"]);
        match cli.command {
            Some(Command::Init { pm, yes, no_install }) => {
                assert_eq!(pm.as_deref(), Some("yarn"));
                assert!(yes);
                assert!(no_install);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn no_arguments_parses_to_help_mode() {
        let cli = Cli::parse_from(["standards"]);
        assert!(cli.command.is_none());
    }
}
