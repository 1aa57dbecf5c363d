//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::logging::init_logging;
use crate::output::{
    write_dots, write_report, CsvFormatter, JsonConcordanceWriter, ReportFormatter, TextFormatter,
};
use crate::pipeline::{is_default_input, load_collection, LoadSettings};
use anyhow::{Context, Result};
use clap::Args;
use shadscan_core::{
    dots, ensure_dirs, AnalysisConfig, ConcordanceBuilder, DirectorySource, FrequencyTable,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Directory holding one text file per volume
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory receiving the reports
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Directory holding cache entries
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Always re-segment, never read or write the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Frequency report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Clean whitespace before segmentation
    #[arg(long)]
    pub normalize_whitespace: bool,

    /// Glob pattern selecting volume files inside the input directory
    #[arg(long, value_name = "PATTERN")]
    pub include: Option<String>,

    /// Also write concordances of rare punctuation types
    #[arg(long)]
    pub concordances: bool,

    /// Concord types whose frequency is at or below this value
    #[arg(short, long, value_name = "N")]
    pub threshold: Option<usize>,

    /// Which raw-text match accompanies each concordance entry
    #[arg(long, value_enum)]
    pub locator: Option<LocatorArg>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported frequency report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Quoted type, tab, count
    Text,
    /// CSV with a "to check" column
    Csv,
}

impl ReportFormat {
    /// File name of the frequency report
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Text => "total_types.txt",
            ReportFormat::Csv => "total_types.csv",
        }
    }

    /// Parse the configuration-file spelling
    pub fn from_config(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(CliError::UnknownFormat(other.to_string()).into()),
        }
    }
}

/// Locator modes on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LocatorArg {
    /// First match in the volume for every entry
    First,
    /// k-th match for the k-th occurrence
    Occurrence,
}

impl From<LocatorArg> for shadscan_core::Locator {
    fn from(arg: LocatorArg) -> Self {
        match arg {
            LocatorArg::First => shadscan_core::Locator::First,
            LocatorArg::Occurrence => shadscan_core::Locator::Occurrence,
        }
    }
}

/// Fully resolved settings of one analyze run
#[derive(Debug, Clone)]
pub struct AnalyzeSettings {
    /// Collection loading
    pub load: LoadSettings,
    /// Cache directory, created even when caching is off
    pub cache_dir: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Report format
    pub format: ReportFormat,
    /// Write concordances
    pub concordances: bool,
    /// Worker threads, 0 = auto
    pub threads: usize,
}

/// Build the core analysis configuration from file values and overrides
pub fn analysis_config(
    file: &CliConfig,
    normalize_whitespace: bool,
    threshold: Option<usize>,
    locator: Option<LocatorArg>,
) -> Result<AnalysisConfig> {
    AnalysisConfig::builder()
        .punctuation(file.processing.punctuation.iter().copied())
        .normalize_whitespace(normalize_whitespace || file.processing.normalize_whitespace)
        .threshold(threshold.unwrap_or(file.concordance.threshold))
        .locator(locator.map(Into::into).unwrap_or(file.concordance.locator))
        .context_chars(file.concordance.context_chars)
        .build()
        .map_err(|e| CliError::ConfigError(e.to_string()).into())
}

impl AnalyzeArgs {
    /// Merge the configuration file with command-line overrides
    pub fn resolve(&self) -> Result<AnalyzeSettings> {
        let file = CliConfig::load(self.config.as_deref())?;
        let analysis = analysis_config(&file, self.normalize_whitespace, self.threshold, self.locator)?;

        let format = match self.format {
            Some(format) => format,
            None => ReportFormat::from_config(&file.output.format)?,
        };
        let use_cache = !self.no_cache && file.processing.use_cache;
        let cache_dir = self.cache_dir.clone().unwrap_or(file.paths.cache);

        Ok(AnalyzeSettings {
            load: LoadSettings {
                input: self.input.clone().unwrap_or(file.paths.input),
                include: self.include.clone().unwrap_or(file.processing.include),
                cache_dir: use_cache.then(|| cache_dir.clone()),
                analysis,
                quiet: self.quiet,
            },
            cache_dir,
            output: self.output.clone().unwrap_or(file.paths.output),
            format,
            concordances: self.concordances || file.concordance.enabled,
            threads: self.threads.unwrap_or(file.processing.worker_threads),
        })
    }

    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let settings = self.resolve()?;
        run(&settings, self.quiet)
    }
}

/// Run the whole pipeline with resolved settings
pub fn run(settings: &AnalyzeSettings, quiet: bool) -> Result<()> {
    configure_thread_pool(settings.threads);

    let mut dirs = vec![
        settings.output.clone(),
        settings.output.join(crate::output::dots::DOTS_KIND),
        settings.cache_dir.clone(),
    ];
    if is_default_input(&settings.load.input) {
        dirs.push(settings.load.input.clone());
    }
    ensure_dirs(&dirs).context("Failed to create working directories")?;

    log::info!("loading the collection");
    let collection = load_collection(&settings.load)?;

    log::info!("counting the punctuation types");
    let table = FrequencyTable::from_collection(&collection);

    log::info!("generating \"with dots\" data");
    let views = dots::collection_dots(&collection);
    write_dots(&settings.output, &views)?;

    let report_path = settings.output.join(settings.format.file_name());
    let file = File::create(&report_path)
        .with_context(|| format!("Failed to create report: {}", report_path.display()))?;
    let writer = BufWriter::new(file);
    let mut formatter: Box<dyn ReportFormatter> = match settings.format {
        ReportFormat::Text => Box::new(TextFormatter::new(writer)),
        ReportFormat::Csv => Box::new(CsvFormatter::new(writer, settings.load.analysis.threshold)),
    };
    write_report(formatter.as_mut(), &table.sorted())?;

    let mut concorded = 0;
    if settings.concordances {
        log::info!("building concordances");
        let analysis = &settings.load.analysis;
        let concs = ConcordanceBuilder::new(DirectorySource::new(&settings.load.input))
            .locator(analysis.locator)
            .context_chars(analysis.context_chars)
            .concord_rare(&collection, &table, analysis.threshold)?;
        concorded = concs.len();

        let path = settings.output.join("concordances.json");
        let file = File::create(&path)
            .with_context(|| format!("Failed to create concordances: {}", path.display()))?;
        JsonConcordanceWriter::new(BufWriter::new(file)).write(&concs)?;
    }

    if !quiet {
        println!("Volumes: {}", collection.len());
        println!("Punctuation types: {}", table.len());
        println!("Punctuation tokens: {}", table.total());
        if settings.concordances {
            println!("Concorded types: {concorded}");
        }
        println!("Reports written to {}", settings.output.display());
    }
    Ok(())
}

/// Size the global rayon pool; 0 keeps rayon's default
fn configure_thread_pool(threads: usize) {
    if threads == 0 {
        log::debug!("using {} worker thread(s)", num_cpus::get());
        return;
    }
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        log::debug!("thread pool already configured: {e}");
    }
}
