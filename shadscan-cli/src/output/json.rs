//! JSON concordance listing

use anyhow::Result;
use shadscan_core::PunctConcordance;
use std::io::Write;

/// Writes concordances as a pretty-printed JSON array
pub struct JsonConcordanceWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonConcordanceWriter<W> {
    /// Create a new JSON writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write every concordance and flush
    pub fn write(&mut self, concordances: &[PunctConcordance]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, concordances)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
