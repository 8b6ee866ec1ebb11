//! Line-based diff and patch engine.
//!
//! Computes minimal line edit scripts between two texts, stores them in a compact
//! versioned envelope, rebuilds either text from the other plus a script, and renders
//! unified diffs for review.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::diff_service::{DiffMetadata, DiffOptions, DiffOutcome, DiffService};
pub use artifacts::diff::Algorithm;
pub use artifacts::diff::edit::{Edit, EditScript, EditValue};
pub use errors::{DiffError, Result};
