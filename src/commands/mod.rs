//! CLI command implementations
//!
//! - `plumbing`: Commands that produce or inspect stored patches
//! - `porcelain`: Commands for everyday diffing and patching
//!
//! Every command is an `impl Session` block writing to the session's writer.

pub mod plumbing;
pub mod porcelain;
