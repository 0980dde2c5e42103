//! Side-effecting operations: filesystem, processes, terminal, probes.

pub mod config;
pub mod fs;
pub mod process;
pub mod project;
pub mod prompt;
