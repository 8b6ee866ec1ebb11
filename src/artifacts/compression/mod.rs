//! Storage encoding for edit scripts
//!
//! An edit script is stored as a versioned [`CompressedDiff`] envelope, serialized either as
//! JSON or in the packed form (zlib-deflated JSON, base64 encoded) for text-only stores.
//!
//! Decoding comes in two flavours:
//!
//! - `try_decode` / `decode_str` report every failure as a [`DiffError`]
//! - `decompress` / `decompress_str` never fail: anything undecodable is logged and
//!   treated as an empty script, so a corrupt stored patch reads as "no changes"

use crate::artifacts::diff::Algorithm;
use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::errors::{DiffError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

pub mod schema;

pub use schema::{ChangeRecord, CompressedDiff, CompressedMetadata, RecordValue};

pub const FORMAT_VERSION: u32 = 1;

/// Hex SHA-1 of a text, used to pin a stored diff to its base.
pub fn checksum(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Encode an edit script produced by `algorithm`.
pub fn compress(edits: &[Edit], algorithm: Algorithm) -> CompressedDiff {
    CompressedDiff {
        version: FORMAT_VERSION,
        algorithm,
        changes: edits.iter().map(ChangeRecord::from).collect(),
        metadata: CompressedMetadata {
            total_changes: edits.len(),
            created_at: Utc::now(),
        },
        base_checksum: None,
    }
}

impl CompressedDiff {
    /// Record the checksum of the base text so appliers can detect a mismatch.
    pub fn with_base(mut self, original: &str) -> Self {
        self.base_checksum = Some(checksum(original));
        self
    }

    /// Check `original` against the recorded base checksum, if any.
    pub fn verify_base(&self, original: &str) -> Result<()> {
        match &self.base_checksum {
            Some(expected) => {
                let actual = checksum(original);
                if &actual == expected {
                    Ok(())
                } else {
                    Err(DiffError::BaseMismatch {
                        expected: expected.clone(),
                        actual,
                    })
                }
            }
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deflate and base64 encode the JSON form.
    pub fn pack(&self) -> Result<String> {
        let json = self.to_json()?;
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(json.as_bytes())?;
        let deflated = encoder.finish()?;

        Ok(STANDARD.encode(deflated))
    }
}

fn parse_json(input: &str) -> Result<CompressedDiff> {
    let probe: schema::VersionProbe = serde_json::from_str(input)?;

    let compressed = match probe.version {
        FORMAT_VERSION => serde_json::from_str::<CompressedDiff>(input)?,
        other => return Err(DiffError::UnsupportedVersion(other)),
    };

    if compressed.changes.len() != compressed.metadata.total_changes {
        return Err(DiffError::Decode(format!(
            "envelope lists {} changes but holds {}",
            compressed.metadata.total_changes,
            compressed.changes.len()
        )));
    }

    Ok(compressed)
}

fn unpack(input: &str) -> Result<CompressedDiff> {
    let deflated = STANDARD.decode(input)?;
    let mut decoder = flate2::read::ZlibDecoder::new(deflated.as_slice());
    let mut json = String::new();
    decoder.read_to_string(&mut json)?;

    parse_json(&json)
}

/// Parse a stored envelope in either JSON or packed form.
pub fn decode_str(input: &str) -> Result<CompressedDiff> {
    let input = input.trim();

    if input.starts_with('{') {
        parse_json(input)
    } else {
        unpack(input)
    }
}

/// Turn an envelope back into an edit script, failing on the first malformed record.
pub fn try_decode(compressed: &CompressedDiff) -> Result<EditScript> {
    if compressed.version != FORMAT_VERSION {
        return Err(DiffError::UnsupportedVersion(compressed.version));
    }

    compressed.changes.iter().map(Edit::try_from).collect()
}

/// Soft-fail decode of an envelope: malformed input yields an empty script.
pub fn decompress(compressed: &CompressedDiff) -> EditScript {
    try_decode(compressed).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "discarding undecodable diff");
        Vec::new()
    })
}

/// Soft-fail decode of a stored string: malformed input yields an empty script.
pub fn decompress_str(input: &str) -> EditScript {
    decode_str(input)
        .and_then(|compressed| try_decode(&compressed))
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, bytes = input.len(), "discarding undecodable diff");
            Vec::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::compute;
    use crate::artifacts::diff::optimizer::optimize;
    use crate::artifacts::diff::patch::apply;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn texts() -> (&'static str, &'static str) {
        (
            "<Page>\n  <Title/>\n  <Body/>\n</Page>",
            "<Page>\n  <Header/>\n  <Title/>\n  <Footer/>\n</Page>",
        )
    }

    #[rstest]
    fn json_round_trip_preserves_the_script(texts: (&'static str, &'static str)) {
        let (original, updated) = texts;
        let edits = optimize(compute(original, updated));

        let stored = compress(&edits, Algorithm::Myers).to_json().unwrap();
        let decoded = decompress_str(&stored);

        assert_eq!(decoded, edits);
        assert_eq!(apply(original, &decoded), updated);
    }

    #[rstest]
    fn packed_round_trip_preserves_the_script(texts: (&'static str, &'static str)) {
        let (original, updated) = texts;
        let edits = optimize(compute(original, updated));

        let packed = compress(&edits, Algorithm::Myers).pack().unwrap();

        assert!(!packed.starts_with('{'));
        assert_eq!(decompress_str(&packed), edits);
    }

    #[rstest]
    fn envelope_records_version_and_counts(texts: (&'static str, &'static str)) {
        let (original, updated) = texts;
        let edits = compute(original, updated);

        let compressed = compress(&edits, Algorithm::Simple);

        assert_eq!(compressed.version, FORMAT_VERSION);
        assert_eq!(compressed.algorithm, Algorithm::Simple);
        assert_eq!(compressed.metadata.total_changes, edits.len());
        assert_eq!(compressed.base_checksum, None);
    }

    #[rstest]
    #[case("")]
    #[case("{")]
    #[case("not a diff")]
    #[case("{\"version\":1}")]
    #[case("{\"version\":7,\"changes\":[]}")]
    #[case("[1, 2, 3]")]
    #[case("eJzLSM3JyQcABiwCFQ==garbage")]
    fn corrupt_input_decodes_to_nothing(#[case] input: &str) {
        assert_eq!(decompress_str(input), Vec::<Edit>::new());
    }

    #[rstest]
    fn truncated_payload_decodes_to_nothing(texts: (&'static str, &'static str)) {
        let (original, updated) = texts;
        let stored = compress(&compute(original, updated), Algorithm::Myers)
            .to_json()
            .unwrap();

        let truncated = &stored[..stored.len() / 2];

        assert!(decompress_str(truncated).is_empty());
        assert!(decode_str(truncated).is_err());
    }

    #[test]
    fn unknown_version_is_reported() {
        let err = decode_str(r#"{"version":2,"algorithm":"myers"}"#).unwrap_err();

        assert!(matches!(err, DiffError::UnsupportedVersion(2)));
    }

    #[test]
    fn mismatched_change_count_is_rejected() {
        let mut compressed = compress(&compute("a", "b"), Algorithm::Myers);
        compressed.metadata.total_changes += 1;
        let stored = compressed.to_json().unwrap();

        assert!(decode_str(&stored).is_err());
    }

    #[test]
    fn base_checksum_accepts_the_original_and_rejects_others() {
        let compressed = compress(&compute("a\nb", "a\nc"), Algorithm::Myers).with_base("a\nb");

        assert!(compressed.verify_base("a\nb").is_ok());
        assert!(matches!(
            compressed.verify_base("a\nx"),
            Err(DiffError::BaseMismatch { .. })
        ));
    }

    #[test]
    fn checksum_is_hex_sha1() {
        assert_eq!(checksum(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    proptest! {
        #[test]
        fn prop_compressed_round_trip_applies(
            original in "[abc\n]{0,24}",
            updated in "[abc\n]{0,24}",
        ) {
            let edits = optimize(compute(&original, &updated));
            let stored = compress(&edits, Algorithm::Myers).pack().unwrap();
            prop_assert_eq!(apply(&original, &decompress_str(&stored)), updated);
        }
    }
}
