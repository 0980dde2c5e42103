//! One-shot scaffolding for a conventional-commit toolchain.
//!
//! `standards init` wires a JavaScript/TypeScript project up with commit-lint
//! rules, a commit-prompt config, a staged-file lint config, and husky hook
//! scripts, then patches `package.json` and (optionally) installs the missing
//! dev dependencies. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (command rendering, dependency
//!   set computation). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (filesystem, process execution,
//!   terminal prompts, lock-file probing). Isolated to enable testing against
//!   temp directories and in-memory streams.
//!
//! The orchestration module ([`init`]) coordinates core logic with I/O to
//! implement the CLI command.

pub mod core;
pub mod exit_codes;
pub mod init;
pub mod io;
pub mod logging;
pub mod manifest;
pub mod templates;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
