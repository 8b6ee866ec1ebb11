use crate::artifacts::diff::edit::Edit;
use std::fmt::Display;

/// A block of changed lines as shown in a unified diff.
///
/// Start positions are one-based. The lengths count only the `-` and `+` lines; the single
/// context line that closes a hunk is rendered but not counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    old_start: usize,
    new_start: usize,
    old_length: usize,
    new_length: usize,
    lines: Vec<String>,
}

impl Hunk {
    fn open(old_start: usize, new_start: usize) -> Self {
        Hunk {
            old_start,
            new_start,
            old_length: 0,
            new_length: 0,
            lines: Vec::new(),
        }
    }

    pub fn old_start(&self) -> usize {
        self.old_start
    }

    pub fn new_start(&self) -> usize {
        self.new_start
    }

    pub fn old_length(&self) -> usize {
        self.old_length
    }

    pub fn new_length(&self) -> usize {
        self.new_length
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_length, self.new_start, self.new_length
        )
    }
}

impl Display for Hunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Group an edit script into hunks.
///
/// A hunk opens at the first change with no leading context and closes at the next equal
/// line, which becomes its only trailing context line.
pub fn create_hunks(edits: &[Edit]) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current: Option<Hunk> = None;
    let (mut old_line, mut new_line) = (1, 1);

    for edit in edits {
        match edit {
            Edit::Equal { value, .. } => {
                if let Some(mut hunk) = current.take() {
                    hunk.lines.push(format!(" {value}"));
                    hunks.push(hunk);
                }
                old_line += 1;
                new_line += 1;
            }
            Edit::Delete { value, .. } => {
                let hunk = current.get_or_insert_with(|| Hunk::open(old_line, new_line));
                for line in value.lines() {
                    hunk.lines.push(format!("-{line}"));
                    hunk.old_length += 1;
                    old_line += 1;
                }
            }
            Edit::Insert { value, .. } => {
                let hunk = current.get_or_insert_with(|| Hunk::open(old_line, new_line));
                for line in value.lines() {
                    hunk.lines.push(format!("+{line}"));
                    hunk.new_length += 1;
                    new_line += 1;
                }
            }
        }
    }

    hunks.extend(current);
    hunks
}

/// Render the `---`/`+++` file header followed by every hunk.
pub fn format_unified(edits: &[Edit], filename: &str) -> String {
    let mut output = format!("--- a/{filename}\n+++ b/{filename}\n");
    for hunk in create_hunks(edits) {
        output.push_str(&hunk.to_string());
    }
    output
}
