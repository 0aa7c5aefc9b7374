//! Command implementations for the clext CLI.
//!
//! Each command writes its regular output to `out` and diagnostics to
//! `err_out`, so `main` can hand in the process streams and tests can hand
//! in buffers.

pub mod check;
pub mod common;
pub mod init;
pub mod stats;
pub mod tokens;
