//! Plain text frequency report

use super::ReportFormatter;
use anyhow::Result;
use std::io::Write;

/// One `“punct”<TAB>count` line per type
pub struct TextFormatter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            first: true,
        }
    }
}

impl<W: Write + Send + Sync> ReportFormatter for TextFormatter<W> {
    fn write_entry(&mut self, punct: &str, frequency: usize) -> Result<()> {
        if !self.first {
            writeln!(self.writer)?;
        }
        self.first = false;
        write!(self.writer, "“{punct}”\t{frequency}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_report;

    #[test]
    fn test_text_report() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            write_report(&mut formatter, &[("།", 12), ("༔", 1)]).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "“།”\t12\n“༔”\t1");
    }

    #[test]
    fn test_empty_report() {
        let mut buf = Vec::new();
        write_report(&mut TextFormatter::new(&mut buf), &[]).unwrap();
        assert!(buf.is_empty());
    }
}
