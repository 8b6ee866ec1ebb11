//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `diff`: Show a unified diff between two files
//! - `apply`: Rebuild a file from a base and a stored patch
//! - `stats`: Summarize the changes between two files

pub mod apply;
pub mod diff;
pub mod stats;
