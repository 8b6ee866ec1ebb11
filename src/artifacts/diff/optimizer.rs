use crate::artifacts::diff::edit::{Edit, EditScript};

/// Fold consecutive inserts (or consecutive deletes) into a single run.
///
/// Equal edits are kept one per line. Running the optimizer on its own output is a no-op.
pub fn optimize(script: EditScript) -> EditScript {
    let mut optimized: EditScript = Vec::with_capacity(script.len());

    for edit in script {
        match (optimized.last_mut(), edit) {
            (Some(Edit::Insert { value, .. }), Edit::Insert { value: next, .. })
            | (Some(Edit::Delete { value, .. }), Edit::Delete { value: next, .. }) => {
                value.append(next)
            }
            (_, edit) => optimized.push(edit),
        }
    }

    optimized
}
