//! Diff data structures and algorithms
//!
//! - `compression`: Versioned storage envelope for edit scripts
//! - `diff`: Edit scripts, Myers' diff, patching and unified rendering
//! - `stats`: Change statistics over an edit script

pub mod compression;
pub mod diff;
pub mod stats;
