use crate::areas::session::Session;
use crate::artifacts::diff::compute;
use crate::artifacts::diff::hunk::{Hunk, create_hunks};
use colored::Colorize;
use std::path::Path;

impl Session {
    pub fn diff(&self, old: &Path, new: &Path, filename: Option<&str>) -> anyhow::Result<()> {
        let original = self.read_text(old)?;
        let updated = self.read_text(new)?;

        let filename = match filename {
            Some(name) => name.to_string(),
            None => new
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| new.display().to_string()),
        };

        writeln!(self.writer(), "{}", format!("--- a/{filename}").bold())?;
        writeln!(self.writer(), "{}", format!("+++ b/{filename}").bold())?;

        for hunk in create_hunks(&compute(&original, &updated)) {
            self.print_diff_hunk(&hunk)?;
        }

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for line in hunk.lines() {
            let line = match line.chars().next() {
                Some('-') => line.red(),
                Some('+') => line.green(),
                _ => line.normal(),
            };
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
