use crate::areas::session::Session;
use crate::artifacts::compression::{decode_str, try_decode};
use crate::artifacts::diff::patch::revert;
use anyhow::Context;
use std::path::Path;

impl Session {
    /// Rebuild a text from `base` and a stored patch.
    ///
    /// With `reverse`, `base` is the updated text and the original is rebuilt; the recorded
    /// checksum is then checked against the result instead of the input.
    pub fn apply(
        &self,
        base: &Path,
        patch: &Path,
        reverse: bool,
        unchecked: bool,
    ) -> anyhow::Result<()> {
        let base_text = self.read_text(base)?;
        let stored = self.read_text(patch)?;

        let compressed = decode_str(&stored)
            .with_context(|| format!("Unable to decode patch {}", patch.display()))?;

        let output = if reverse {
            let diff = try_decode(&compressed)?;
            let original = revert(&base_text, &diff);
            if !unchecked {
                compressed
                    .verify_base(&original)
                    .context("Reverted text does not match the patch base")?;
            }
            original
        } else if unchecked {
            let diff = try_decode(&compressed)?;
            self.service().apply_diff(&base_text, &diff)
        } else {
            self.service()
                .apply_compressed(&base_text, &compressed)
                .with_context(|| format!("Unable to apply patch to {}", base.display()))?
        };

        write!(self.writer(), "{output}")?;

        Ok(())
    }
}
