use crate::artifacts::diff::edit::Edit;

/// Rebuild the updated text from an edit script.
///
/// Output comes entirely from the values stored in the script: equal and inserted lines are
/// kept, deleted lines are dropped. `_original` is not consulted, so a script applied to a
/// base other than the one it was computed from silently yields the script's own target.
pub fn apply(_original: &str, edits: &[Edit]) -> String {
    join_lines(edits, |edit| !matches!(edit, Edit::Delete { .. }))
}

/// Rebuild the original text from an edit script, the inverse of [`apply`].
pub fn revert(_updated: &str, edits: &[Edit]) -> String {
    join_lines(edits, |edit| !matches!(edit, Edit::Insert { .. }))
}

fn join_lines(edits: &[Edit], keep: impl Fn(&Edit) -> bool) -> String {
    edits
        .iter()
        .filter(|edit| keep(edit))
        .flat_map(|edit| edit.lines())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
