//! Output writers

use anyhow::Result;

/// Trait for frequency report formatters
pub trait ReportFormatter: Send + Sync {
    /// Write one punctuation type and its frequency
    fn write_entry(&mut self, punct: &str, frequency: usize) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod dots;
pub mod json;
pub mod text;

pub use self::csv::CsvFormatter;
pub use self::dots::write_dots;
pub use self::json::JsonConcordanceWriter;
pub use self::text::TextFormatter;

/// Feed a sorted frequency listing through a formatter
pub fn write_report<F: ReportFormatter + ?Sized>(
    formatter: &mut F,
    entries: &[(&str, usize)],
) -> Result<()> {
    for &(punct, frequency) in entries {
        formatter.write_entry(punct, frequency)?;
    }
    formatter.finish()
}
