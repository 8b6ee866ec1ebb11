use crate::areas::session::Session;
use std::path::Path;

impl Session {
    /// Print the stored form of the diff between two files.
    pub fn encode(&self, old: &Path, new: &Path, packed: bool) -> anyhow::Result<()> {
        let original = self.read_text(old)?;
        let updated = self.read_text(new)?;

        let outcome = self.service().create_diff(&original, &updated);
        let compressed = match (outcome.success, outcome.compressed) {
            (true, Some(compressed)) => compressed,
            _ => anyhow::bail!(
                "Unable to encode diff of {} and {}: {}",
                old.display(),
                new.display(),
                outcome.error.unwrap_or_else(|| "no envelope produced".to_string())
            ),
        };

        let stored = if packed {
            compressed.pack()?
        } else {
            compressed.to_json()?
        };

        writeln!(self.writer(), "{stored}")?;

        Ok(())
    }
}
