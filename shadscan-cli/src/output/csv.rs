//! CSV frequency report

use super::ReportFormatter;
use anyhow::Result;
use std::io::Write;

/// Header row of the CSV report
pub const CSV_HEADER: [&str; 3] = ["punct", " frequency", " to check"];

/// CSV formatter; rare types get an `x` in the `to check` column
pub struct CsvFormatter<W: Write> {
    writer: csv::Writer<W>,
    threshold: usize,
    header_written: bool,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a formatter marking types at or below `threshold`
    pub fn new(writer: W, threshold: usize) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(writer),
            threshold,
            header_written: false,
        }
    }

    fn ensure_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(CSV_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> ReportFormatter for CsvFormatter<W> {
    fn write_entry(&mut self, punct: &str, frequency: usize) -> Result<()> {
        self.ensure_header()?;
        let mark = if frequency <= self.threshold { "x" } else { "" };
        let frequency = frequency.to_string();
        self.writer.write_record([punct, frequency.as_str(), mark])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.ensure_header()?;
        self.writer.flush()?;
        Ok(())
    }
}
