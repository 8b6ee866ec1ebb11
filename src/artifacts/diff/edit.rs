use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Payload of an insert or delete.
///
/// Engines emit one `Line` per operation; the optimizer folds consecutive operations of the
/// same kind into a single `Run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditValue {
    Line(String),
    Run(Vec<String>),
}

impl EditValue {
    pub fn lines(&self) -> &[String] {
        match self {
            EditValue::Line(line) => std::slice::from_ref(line),
            EditValue::Run(lines) => lines,
        }
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Append `other` to this value, turning it into a run.
    pub fn append(&mut self, other: EditValue) {
        if let EditValue::Line(line) = self {
            let first = std::mem::take(line);
            *self = EditValue::Run(vec![first]);
        }

        if let EditValue::Run(lines) = self {
            match other {
                EditValue::Line(line) => lines.push(line),
                EditValue::Run(more) => lines.extend(more),
            }
        }
    }
}

impl From<&str> for EditValue {
    fn from(line: &str) -> Self {
        EditValue::Line(line.to_string())
    }
}

impl From<String> for EditValue {
    fn from(line: String) -> Self {
        EditValue::Line(line)
    }
}

impl From<Vec<String>> for EditValue {
    fn from(lines: Vec<String>) -> Self {
        EditValue::Run(lines)
    }
}

/// One-character tag of an edit, as stored in the compressed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    #[serde(rename = "e")]
    Equal,
    #[serde(rename = "i")]
    Insert,
    #[serde(rename = "d")]
    Delete,
}

impl EditKind {
    pub fn prefix(&self) -> char {
        match self {
            EditKind::Equal => ' ',
            EditKind::Insert => '+',
            EditKind::Delete => '-',
        }
    }
}

/// A single step of an edit script.
///
/// Indices are zero-based positions in the original (`old_index`) and updated (`new_index`)
/// line sequences. For a run they point at the first line of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Equal {
        old_index: usize,
        new_index: usize,
        value: String,
    },
    Insert {
        new_index: usize,
        value: EditValue,
    },
    Delete {
        old_index: usize,
        value: EditValue,
    },
}

pub type EditScript = Vec<Edit>;

impl Edit {
    pub fn equal(old_index: usize, new_index: usize, value: impl Into<String>) -> Self {
        Edit::Equal {
            old_index,
            new_index,
            value: value.into(),
        }
    }

    pub fn insert(new_index: usize, value: impl Into<EditValue>) -> Self {
        Edit::Insert {
            new_index,
            value: value.into(),
        }
    }

    pub fn delete(old_index: usize, value: impl Into<EditValue>) -> Self {
        Edit::Delete {
            old_index,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Equal { .. } => EditKind::Equal,
            Edit::Insert { .. } => EditKind::Insert,
            Edit::Delete { .. } => EditKind::Delete,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Edit::Equal { value, .. } => std::slice::from_ref(value),
            Edit::Insert { value, .. } | Edit::Delete { value, .. } => value.lines(),
        }
    }

    /// Render the edit as prefixed lines, one per constituent line of a run.
    pub fn as_string(&self) -> String {
        let prefix = self.kind().prefix();
        self.lines()
            .iter()
            .map(|line| format!("{prefix}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
