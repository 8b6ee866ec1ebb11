use crate::artifacts::diff::Algorithm;
use crate::artifacts::diff::edit::{Edit, EditKind, EditValue};
use crate::errors::{DiffError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored value of a change. Runs are wrapped in an object so a decoder can never mistake
/// them for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Line(String),
    Run { run: Vec<String> },
}

impl From<&EditValue> for RecordValue {
    fn from(value: &EditValue) -> Self {
        match value {
            EditValue::Line(line) => RecordValue::Line(line.clone()),
            EditValue::Run(lines) => RecordValue::Run { run: lines.clone() },
        }
    }
}

impl From<&RecordValue> for EditValue {
    fn from(value: &RecordValue) -> Self {
        match value {
            RecordValue::Line(line) => EditValue::Line(line.clone()),
            RecordValue::Run { run } => EditValue::Run(run.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub t: EditKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
    pub v: RecordValue,
}

impl From<&Edit> for ChangeRecord {
    fn from(edit: &Edit) -> Self {
        match edit {
            Edit::Equal {
                old_index,
                new_index,
                value,
            } => ChangeRecord {
                t: EditKind::Equal,
                o: Some(*old_index),
                n: Some(*new_index),
                v: RecordValue::Line(value.clone()),
            },
            Edit::Insert { new_index, value } => ChangeRecord {
                t: EditKind::Insert,
                o: None,
                n: Some(*new_index),
                v: value.into(),
            },
            Edit::Delete { old_index, value } => ChangeRecord {
                t: EditKind::Delete,
                o: Some(*old_index),
                n: None,
                v: value.into(),
            },
        }
    }
}

impl TryFrom<&ChangeRecord> for Edit {
    type Error = DiffError;

    fn try_from(record: &ChangeRecord) -> Result<Self> {
        match (record.t, record.o, record.n, &record.v) {
            (EditKind::Equal, Some(old_index), Some(new_index), RecordValue::Line(line)) => {
                Ok(Edit::equal(old_index, new_index, line.clone()))
            }
            (EditKind::Equal, _, _, RecordValue::Run { .. }) => Err(DiffError::Decode(
                "equal record carries a run".to_string(),
            )),
            (EditKind::Insert, _, Some(new_index), value) => {
                Ok(Edit::insert(new_index, EditValue::from(value)))
            }
            (EditKind::Delete, Some(old_index), _, value) => {
                Ok(Edit::delete(old_index, EditValue::from(value)))
            }
            (kind, ..) => Err(DiffError::Decode(format!(
                "{kind:?} record is missing its line index"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedMetadata {
    pub total_changes: usize,
    pub created_at: DateTime<Utc>,
}

/// Version 1 of the stored diff envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedDiff {
    pub version: u32,
    pub algorithm: Algorithm,
    pub changes: Vec<ChangeRecord>,
    pub metadata: CompressedMetadata,
    /// SHA-1 of the text the diff was computed against, when the producer recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_checksum: Option<String>,
}

/// Just enough of an envelope to pick a decoder.
#[derive(Debug, Deserialize)]
pub(crate) struct VersionProbe {
    pub version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn runs_serialize_inside_a_wrapper() {
        let record = ChangeRecord::from(&Edit::insert(
            2,
            vec!["a".to_string(), "b".to_string()],
        ));

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"t":"i","n":2,"v":{"run":["a","b"]}}"#);
    }

    #[test]
    fn equal_records_carry_both_indices() {
        let record = ChangeRecord::from(&Edit::equal(4, 5, "same"));

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"t":"e","o":4,"n":5,"v":"same"}"#);
    }

    #[test]
    fn line_that_looks_like_a_run_stays_a_line() {
        let record: ChangeRecord =
            serde_json::from_str(r#"{"t":"d","o":0,"v":"{\"run\":[\"x\"]}"}"#).unwrap();

        assert_eq!(
            Edit::try_from(&record).unwrap(),
            Edit::delete(0, r#"{"run":["x"]}"#)
        );
    }

    #[rstest]
    #[case(r#"{"t":"e","o":0,"v":"x"}"#)]
    #[case(r#"{"t":"i","o":0,"v":"x"}"#)]
    #[case(r#"{"t":"d","n":0,"v":"x"}"#)]
    #[case(r#"{"t":"e","o":0,"n":0,"v":{"run":["x"]}}"#)]
    fn rejects_records_that_do_not_fit_their_kind(#[case] json: &str) {
        let record: ChangeRecord = serde_json::from_str(json).unwrap();

        assert!(Edit::try_from(&record).is_err());
    }
}
