//! Stable exit codes for standards CLI commands.

/// Command succeeded, or help was requested.
pub const OK: i32 = 0;
/// Missing manifest, failed step, or unknown subcommand.
pub const INVALID: i32 = 1;
