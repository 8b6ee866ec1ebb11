use crate::areas::session::Session;
use std::path::Path;

impl Session {
    /// Print a stored patch as prefixed edit lines. Undecodable patches print nothing.
    pub fn decode(&self, patch: &Path) -> anyhow::Result<()> {
        let stored = self.read_text(patch)?;

        for edit in self.service().decompress_diff(&stored) {
            writeln!(self.writer(), "{edit}")?;
        }

        Ok(())
    }
}
