use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::{Algorithm, DiffAlgorithm};
use derive_new::new;

/// Position-aligned comparison.
///
/// Line `i` of one side is only ever compared with line `i` of the other. Not minimal, but
/// it runs in `O(max(n, m))` and cannot fail, which makes it the fallback for the Myers
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SimpleDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: AsRef<str>> DiffAlgorithm for SimpleDiff<'_, T> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Simple
    }

    fn diff(&self) -> EditScript {
        let len = self.a.len().max(self.b.len());
        let mut diff = Vec::with_capacity(len);

        for i in 0..len {
            match (self.a.get(i), self.b.get(i)) {
                (Some(old), Some(new)) if old.as_ref() == new.as_ref() => {
                    diff.push(Edit::equal(i, i, old.as_ref()));
                }
                (old, new) => {
                    if let Some(old) = old {
                        diff.push(Edit::delete(i, old.as_ref()));
                    }
                    if let Some(new) = new {
                        diff.push(Edit::insert(i, new.as_ref()));
                    }
                }
            }
        }

        diff
    }
}
