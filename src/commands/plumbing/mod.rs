//! Plumbing commands (stored patch handling)
//!
//! ## Commands
//!
//! - `encode`: Compute a diff and print its stored form
//! - `decode`: Print the edits held by a stored patch

pub mod decode;
pub mod encode;
