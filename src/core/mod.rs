//! Pure logic with no I/O.

pub mod deps;
pub mod pm;
