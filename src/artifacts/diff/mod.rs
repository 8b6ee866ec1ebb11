//! Line diffing and patching
//!
//! This module implements the edit-script pipeline:
//!
//! - `tokenizer`: splits text into lines
//! - `myers`: Myers' O(ND) shortest edit script
//! - `simple`: position-aligned fallback diff
//! - `optimizer`: folds consecutive inserts/deletes into runs
//! - `patch`: rebuilds either text from an edit script
//! - `hunk`: hunk grouping and unified diff rendering
//!
//! Everything here is pure and synchronous; calls can run in parallel freely.

use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::myers::MyersDiff;
use crate::artifacts::diff::simple::SimpleDiff;
use crate::artifacts::diff::tokenizer::split_into_lines;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub mod edit;
pub mod hunk;
pub mod myers;
pub mod optimizer;
pub mod patch;
pub mod simple;
pub mod tokenizer;

/// Which engine produced an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Myers,
    Simple,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Myers => "myers",
            Algorithm::Simple => "simple",
        }
    }

    /// Diff two texts line by line with this engine.
    pub fn diff(&self, original: &str, updated: &str) -> EditScript {
        let a = split_into_lines(original);
        let b = split_into_lines(updated);

        match self {
            Algorithm::Myers => MyersDiff::new(&a, &b).diff(),
            Algorithm::Simple => SimpleDiff::new(&a, &b).diff(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "myers" => Ok(Algorithm::Myers),
            "simple" => Ok(Algorithm::Simple),
            other => anyhow::bail!("unknown diff algorithm '{other}'"),
        }
    }
}

pub trait DiffAlgorithm {
    fn algorithm(&self) -> Algorithm;

    fn diff(&self) -> EditScript;

    fn format_diff(&self) -> String {
        self.diff()
            .iter()
            .map(Edit::as_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Minimal line edit script turning `original` into `updated`.
pub fn compute(original: &str, updated: &str) -> EditScript {
    Algorithm::Myers.diff(original, updated)
}
