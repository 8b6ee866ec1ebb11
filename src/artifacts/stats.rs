use crate::artifacts::diff::edit::Edit;
use serde::Serialize;
use std::fmt::Display;

/// Line counts for an edit script.
///
/// `modifications` is a count-based approximation: it pairs deletions with additions
/// (`min(additions, deletions)`) without checking which line replaced which. The rest is
/// reported as net additions or net deletions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub unchanged: usize,
    pub net_additions: usize,
    pub net_deletions: usize,
}

impl DiffStats {
    pub fn from_edits(edits: &[Edit]) -> Self {
        let mut stats = DiffStats::default();

        for edit in edits {
            let count = edit.lines().len();
            match edit {
                Edit::Equal { .. } => stats.unchanged += count,
                Edit::Insert { .. } => stats.additions += count,
                Edit::Delete { .. } => stats.deletions += count,
            }
        }

        stats.modifications = stats.additions.min(stats.deletions);
        stats.net_additions = stats.additions - stats.modifications;
        stats.net_deletions = stats.deletions - stats.modifications;
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "additions: {}", self.additions)?;
        writeln!(f, "deletions: {}", self.deletions)?;
        writeln!(f, "modifications: {}", self.modifications)?;
        writeln!(f, "unchanged: {}", self.unchanged)?;
        writeln!(f, "net additions: {}", self.net_additions)?;
        write!(f, "net deletions: {}", self.net_deletions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::compute;
    use crate::artifacts::diff::optimizer::optimize;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_a_single_appended_line() {
        let stats = DiffStats::from_edits(&compute("a\nb\nc", "a\nb\nc\nd"));

        assert_eq!(stats.additions, 1);
        assert_eq!(stats.deletions, 0);
        assert_eq!(stats.unchanged, 3);
        assert_eq!(stats.net_additions, 1);
    }

    #[test]
    fn pairs_deletions_with_additions_as_modifications() {
        let stats = DiffStats::from_edits(&optimize(compute("a\nb\nc", "x\ny\nz\nw\nc")));

        assert_eq!(
            stats,
            DiffStats {
                additions: 4,
                deletions: 2,
                modifications: 2,
                unchanged: 1,
                net_additions: 2,
                net_deletions: 0,
            }
        );
    }

    #[test]
    fn runs_count_every_line() {
        let merged = DiffStats::from_edits(&optimize(compute("a\nb\nc\nd", "")));
        let plain = DiffStats::from_edits(&compute("a\nb\nc\nd", ""));

        assert_eq!(merged, plain);
        assert_eq!(merged.deletions, 4);
        assert_eq!(merged.net_deletions, 4);
    }

    #[test]
    fn identical_texts_report_no_changes() {
        let stats = DiffStats::from_edits(&compute("same", "same"));

        assert!(!stats.has_changes());
        assert_eq!(stats.unchanged, 1);
    }
}
