//! Single-line terminal prompts for the init workflow.
//!
//! The prompter owns its reader/writer for its scope and is passed `&mut`
//! into the workflow, so the stdin lock is released on every exit path
//! (normal return, early return, error) when the value drops.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use anyhow::{Context, Result};

use crate::core::pm::PackageManager;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, StdoutLock<'static>> {
    /// Prompter over locked stdin/stdout for interactive use.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Yes/no question; an empty answer defaults to yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{question} (Y/n): "))?;
        Ok(matches!(answer.as_str(), "" | "y" | "yes"))
    }

    /// Multiple-choice question over the supported package managers.
    ///
    /// Accepts either the literal manager name or its 1-based position in the
    /// displayed list; empty or unrecognized input returns `default`.
    pub fn choose_pm(&mut self, question: &str, default: PackageManager) -> Result<PackageManager> {
        let options = PackageManager::SUPPORTED;
        let listing = options
            .iter()
            .enumerate()
            .map(|(i, pm)| format!("{}. {pm}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        let answer = self.ask(&format!("{question} ({listing}) [default: {default}]: "))?;

        if answer.is_empty() {
            return Ok(default);
        }
        if let Some(pm) = PackageManager::parse(&answer) {
            return Ok(pm);
        }
        if let Ok(index) = answer.parse::<usize>()
            && (1..=options.len()).contains(&index)
        {
            return Ok(options[index - 1]);
        }
        Ok(default)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        self.input.read_line(&mut line).context("read answer")?;
        Ok(line.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn confirm_defaults_to_yes_on_empty_answer() {
        assert!(prompter("\n").confirm("install?").expect("confirm"));
        assert!(prompter("y\n").confirm("install?").expect("confirm"));
        assert!(prompter("YES\n").confirm("install?").expect("confirm"));
    }

    #[test]
    fn confirm_treats_anything_else_as_no() {
        assert!(!prompter("n\n").confirm("install?").expect("confirm"));
        assert!(!prompter("nope\n").confirm("install?").expect("confirm"));
    }

    #[test]
    fn choose_pm_accepts_literal_name() {
        let pm = prompter("yarn\n")
            .choose_pm("pick", PackageManager::Pnpm)
            .expect("choose");
        assert_eq!(pm, PackageManager::Yarn);
    }

    #[test]
    fn choose_pm_accepts_one_based_index() {
        let pm = prompter("2\n")
            .choose_pm("pick", PackageManager::Pnpm)
            .expect("choose");
        assert_eq!(pm, PackageManager::Bun);
    }

    #[test]
    fn choose_pm_falls_back_to_default() {
        for input in ["\n", "cargo\n", "0\n", "9\n"] {
            let pm = prompter(input)
                .choose_pm("pick", PackageManager::Npm)
                .expect("choose");
            assert_eq!(pm, PackageManager::Npm, "input {input:?}");
        }
    }

    #[test]
    fn choose_pm_lists_options_with_default() {
        let mut p = prompter("\n");
        p.choose_pm("pick a package manager", PackageManager::Pnpm)
            .expect("choose");
        let shown = String::from_utf8(p.output).expect("utf8");
        assert!(shown.contains("1. pnpm"));
        assert!(shown.contains("4. npm"));
        assert!(shown.contains("[default: pnpm]"));
    }
}
