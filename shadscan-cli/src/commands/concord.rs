//! Concord command implementation

use crate::commands::analyze::{analysis_config, LocatorArg};
use crate::config::CliConfig;
use crate::logging::init_logging;
use crate::pipeline::{load_collection, LoadSettings};
use anyhow::Result;
use clap::Args;
use shadscan_core::{ConcordanceBuilder, DirectorySource, FrequencyTable, PunctConcordance};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the concord command
#[derive(Debug, Args)]
pub struct ConcordArgs {
    /// Punctuation strings to concord (default: every rare type)
    #[arg(value_name = "PUNCT")]
    pub punct: Vec<String>,

    /// Directory holding one text file per volume
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory holding cache entries
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Always re-segment, never read or write the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Rare-type threshold used when no PUNCT is given
    #[arg(short, long, value_name = "N")]
    pub threshold: Option<usize>,

    /// Which raw-text match accompanies each entry
    #[arg(long, value_enum)]
    pub locator: Option<LocatorArg>,

    /// Characters shown on each side of a raw-text match
    #[arg(long, value_name = "N")]
    pub context_chars: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConcordArgs {
    /// Execute the concord command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let file = CliConfig::load(self.config.as_deref())?;
        let mut analysis = analysis_config(
            &file,
            file.processing.normalize_whitespace,
            self.threshold,
            self.locator,
        )?;
        if let Some(chars) = self.context_chars {
            analysis.context_chars = chars;
        }

        let use_cache = !self.no_cache && file.processing.use_cache;
        let settings = LoadSettings {
            input: self.input.clone().unwrap_or(file.paths.input),
            include: file.processing.include,
            cache_dir: use_cache.then(|| self.cache_dir.clone().unwrap_or(file.paths.cache)),
            analysis,
            quiet: true,
        };

        let collection = load_collection(&settings)?;
        let table = FrequencyTable::from_collection(&collection);
        let builder = ConcordanceBuilder::new(DirectorySource::new(&settings.input))
            .locator(settings.analysis.locator)
            .context_chars(settings.analysis.context_chars);

        let concs = if self.punct.is_empty() {
            builder.concord_rare(&collection, &table, settings.analysis.threshold)?
        } else {
            self.punct
                .iter()
                .map(|punct| {
                    Ok(PunctConcordance {
                        punct: punct.clone(),
                        frequency: table.get(punct),
                        entries: builder.concord(punct, &collection)?,
                    })
                })
                .collect::<shadscan_core::Result<Vec<_>>>()?
        };

        let stdout = io::stdout();
        write_listing(&mut stdout.lock(), &concs)
    }
}

/// Write concordances as plain text, one entry per line
pub fn write_listing<W: Write>(writer: &mut W, concs: &[PunctConcordance]) -> Result<()> {
    for conc in concs {
        writeln!(writer, "“{}”\t{}", conc.punct, conc.frequency)?;
        for entry in &conc.entries {
            writeln!(writer, "{entry}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
