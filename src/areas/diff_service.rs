use crate::artifacts::compression::{self, CompressedDiff};
use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::hunk::format_unified;
use crate::artifacts::diff::optimizer::optimize;
use crate::artifacts::diff::patch::{apply, revert};
use crate::artifacts::diff::{Algorithm, compute};
use crate::artifacts::stats::DiffStats;
use crate::errors::{DiffError, Result};
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Knobs for [`DiffService::create_diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub algorithm: Algorithm,
    /// Also produce the storage envelope
    pub compress: bool,
    /// Fold consecutive inserts/deletes into runs
    pub optimize: bool,
    /// Record the base text checksum in the envelope
    pub checksum: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            algorithm: Algorithm::Myers,
            compress: false,
            optimize: true,
            checksum: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffMetadata {
    pub algorithm: Algorithm,
    /// Length of the original text in characters
    pub original_length: usize,
    /// Length of the updated text in characters
    pub new_length: usize,
    pub changes: usize,
    pub created_at: DateTime<Utc>,
}

/// Result of [`DiffService::create_diff`]. A failed computation is reported here instead of
/// being raised, so callers can fall back to storing the full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    pub success: bool,
    pub diff: EditScript,
    pub metadata: Option<DiffMetadata>,
    pub compressed: Option<CompressedDiff>,
    pub error: Option<String>,
}

impl DiffOutcome {
    pub fn failure(err: DiffError) -> Self {
        tracing::warn!(error = %err, "diff computation failed");

        DiffOutcome {
            success: false,
            diff: Vec::new(),
            metadata: None,
            compressed: None,
            error: Some(err.to_string()),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Entry point for callers that store or replay diffs.
#[derive(Debug, Clone, Default, new)]
pub struct DiffService {
    options: DiffOptions,
}

impl DiffService {
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Diff two texts. Never panics and never returns an error; check `success`.
    pub fn create_diff(&self, original: &str, updated: &str) -> DiffOutcome {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.build_outcome(original, updated)));

        outcome.unwrap_or_else(|payload| {
            DiffOutcome::failure(DiffError::Computation(panic_message(payload)))
        })
    }

    fn build_outcome(&self, original: &str, updated: &str) -> DiffOutcome {
        let DiffOptions {
            algorithm,
            compress,
            optimize: merge_runs,
            checksum,
        } = self.options;

        tracing::debug!(%algorithm, compress, "computing diff");

        let mut diff = algorithm.diff(original, updated);
        if merge_runs {
            diff = optimize(diff);
        }

        let compressed = compress.then(|| {
            let envelope = compression::compress(&diff, algorithm);
            if checksum {
                envelope.with_base(original)
            } else {
                envelope
            }
        });

        let metadata = DiffMetadata {
            algorithm,
            original_length: original.chars().count(),
            new_length: updated.chars().count(),
            changes: diff.len(),
            created_at: Utc::now(),
        };

        DiffOutcome {
            success: true,
            diff,
            metadata: Some(metadata),
            compressed,
            error: None,
        }
    }

    pub fn apply_diff(&self, original: &str, diff: &[Edit]) -> String {
        apply(original, diff)
    }

    pub fn revert_diff(&self, updated: &str, diff: &[Edit]) -> String {
        revert(updated, diff)
    }

    /// Apply a stored envelope, checking the base checksum when one was recorded.
    pub fn apply_compressed(&self, original: &str, compressed: &CompressedDiff) -> Result<String> {
        compressed.verify_base(original)?;
        let diff = compression::try_decode(compressed)?;

        Ok(apply(original, &diff))
    }

    pub fn compress_diff(&self, diff: &[Edit]) -> CompressedDiff {
        compression::compress(diff, self.options.algorithm)
    }

    pub fn decompress_diff(&self, stored: &str) -> EditScript {
        compression::decompress_str(stored)
    }

    pub fn create_unified_diff(&self, original: &str, updated: &str, filename: &str) -> String {
        format_unified(&compute(original, updated), filename)
    }

    pub fn get_diff_stats(&self, diff: &[Edit]) -> DiffStats {
        DiffStats::from_edits(diff)
    }
}
