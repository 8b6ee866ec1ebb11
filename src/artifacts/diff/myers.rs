use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::simple::SimpleDiff;
use crate::artifacts::diff::{Algorithm, DiffAlgorithm};
use derive_new::new;

/// Snapshots of the furthest-reach array, one per edit distance explored.
pub type Trace = Vec<Vec<isize>>;

/// Myers' O(ND) shortest edit script between two line sequences.
///
/// The reach array `v` is indexed by diagonal `k = x - y`, shifted by `n + m` so it fits a
/// plain vector. The trace keeps a copy of `v` taken at the start of each distance `d`;
/// backtracking walks those copies from `(n, m)` back to the origin.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// Tie-break shared by the forward pass and the backtrack: step down (insertion) from
/// diagonal `k + 1` unless `k` is the upper edge or `k - 1` reaches at least as far.
fn prefers_insertion(v: &[isize], offset: isize, k: isize, d: isize) -> bool {
    k == -d || (k != d && v[(offset + k - 1) as usize] < v[(offset + k + 1) as usize])
}

impl<T: AsRef<str>> MyersDiff<'_, T> {
    fn offset(&self) -> isize {
        (self.a.len() + self.b.len()) as isize
    }

    /// Run the forward pass. `None` means no path was found within `n + m` steps.
    pub fn compute_shortest_edit(&self) -> Option<Trace> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();

        // one slot past the upper edge so `k + 1` is always addressable
        let mut v = vec![0; 2 * offset as usize + 2];
        let mut trace = Vec::new();

        for d in 0..=offset {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if prefers_insertion(&v, offset, k, d) {
                    v[idx + 1]
                } else {
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize].as_ref() == self.b[y as usize].as_ref()
                {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Some(trace);
                }
            }
        }

        None
    }

    /// Rebuild the edit script from a trace produced by [`Self::compute_shortest_edit`].
    pub fn backtrack(&self, trace: &Trace) -> EditScript {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();
        let mut edits = Vec::new();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if prefers_insertion(v, offset, k, d) {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                let (old_index, new_index) = ((x - 1) as usize, (y - 1) as usize);
                edits.push(Edit::equal(
                    old_index,
                    new_index,
                    self.a[old_index].as_ref(),
                ));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                if x == prev_x {
                    let new_index = prev_y as usize;
                    edits.push(Edit::insert(new_index, self.b[new_index].as_ref()));
                } else {
                    let old_index = prev_x as usize;
                    edits.push(Edit::delete(old_index, self.a[old_index].as_ref()));
                }
            }

            (x, y) = (prev_x, prev_y);
        }

        edits.reverse();
        edits
    }
}

impl<T: AsRef<str>> DiffAlgorithm for MyersDiff<'_, T> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Myers
    }

    fn diff(&self) -> EditScript {
        match self.compute_shortest_edit() {
            Some(trace) => self.backtrack(&trace),
            None => {
                tracing::warn!(
                    old_lines = self.a.len(),
                    new_lines = self.b.len(),
                    "no shortest edit found, falling back to positional diff"
                );
                SimpleDiff::new(self.a, self.b).diff()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::edit::Edit;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn string_inputs() -> (Vec<String>, Vec<String>) {
        (
            "abcabba".chars().map(String::from).collect(),
            "cbabac".chars().map(String::from).collect(),
        )
    }

    #[fixture]
    fn file_inputs() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            vec!["line1", "line2", "line3", "line4"],
            vec!["line2", "line3_modified", "line4", "line5"],
        )
    }

    #[rstest]
    fn test_diff_strings(string_inputs: (Vec<String>, Vec<String>)) {
        let (a, b) = string_inputs;
        let result = MyersDiff::new(&a, &b).diff();
        let expected = vec![
            Edit::delete(0, "a"),
            Edit::delete(1, "b"),
            Edit::equal(2, 0, "c"),
            Edit::insert(1, "b"),
            Edit::equal(3, 2, "a"),
            Edit::equal(4, 3, "b"),
            Edit::delete(5, "b"),
            Edit::equal(6, 4, "a"),
            Edit::insert(5, "c"),
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_diff_files(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;
        let result = MyersDiff::new(&a, &b).diff();
        let expected = vec![
            Edit::delete(0, "line1"),
            Edit::equal(1, 0, "line2"),
            Edit::delete(2, "line3"),
            Edit::insert(1, "line3_modified"),
            Edit::equal(3, 2, "line4"),
            Edit::insert(3, "line5"),
        ];

        assert_eq!(result, expected);
    }

    #[test]
    fn trace_length_is_edit_distance_plus_one() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];

        let trace = MyersDiff::new(&a, &b)
            .compute_shortest_edit()
            .expect("path exists");

        // one delete and one insert
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn empty_sequences_need_no_edits() {
        let empty: [&str; 0] = [];
        let diff = MyersDiff::new(&empty, &empty);

        assert_eq!(diff.compute_shortest_edit().map(|t| t.len()), Some(1));
        assert!(diff.diff().is_empty());
    }

    #[test]
    fn format_diff_renders_prefixed_lines() {
        let a = ["keep", "old"];
        let b = ["keep", "new"];

        assert_eq!(MyersDiff::new(&a, &b).format_diff(), " keep\n-old\n+new");
    }
}
