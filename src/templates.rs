//! Static template blobs written into the target project.
//!
//! The config bodies are self-contained files; the tool has no package of its
//! own inside the target's `node_modules` to reference, so everything the
//! third-party tools need lands directly in the project.

pub const COMMITLINT_CONFIG: &str = include_str!("templates/commitlint.config.cjs");
pub const CZ_CONFIG: &str = include_str!("templates/cz.config.cjs");
pub const LINT_STAGED_FULL: &str = include_str!("templates/lintstaged-full.cjs");
pub const LINT_STAGED_SIMPLE: &str = include_str!("templates/lintstaged-simple.cjs");

/// Runs lint-staged against the staged set before each commit.
pub const PRE_COMMIT_HOOK: &str = "#!/bin/sh\n\
. \"$(dirname \"$0\")/_/husky.sh\"\n\
npx --no-install lint-staged\n";

/// Validates the commit message file against the commitlint rules.
pub const COMMIT_MSG_HOOK: &str = "#!/bin/sh\n\
. \"$(dirname \"$0\")/_/husky.sh\"\n\
npx --no-install commitlint --edit \"$1\"\n";
