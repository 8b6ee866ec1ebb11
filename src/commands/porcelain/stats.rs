use crate::areas::session::Session;
use std::path::Path;

impl Session {
    pub fn stats(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let original = self.read_text(old)?;
        let updated = self.read_text(new)?;

        let outcome = self.service().create_diff(&original, &updated);
        if !outcome.success {
            anyhow::bail!(
                "Unable to diff {} and {}: {}",
                old.display(),
                new.display(),
                outcome.error.unwrap_or_default()
            );
        }

        let stats = self.service().get_diff_stats(&outcome.diff);
        writeln!(self.writer(), "{stats}")?;

        Ok(())
    }
}
