//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod concord;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment a collection and write frequency, dots and concordance reports
    Analyze(analyze::AnalyzeArgs),

    /// Print concordances for punctuation types
    Concord(concord::ConcordArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List built-in components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the default punctuation alphabet
    Punctuation,

    /// List available report formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Concord(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Punctuation => shadscan_core::TIBETAN_PUNCTUATION
                .iter()
                .map(|ch| format!("{ch}\tU+{:04X}", *ch as u32))
                .collect(),
            ListCommands::Formats => vec![
                "text\t“punct”<TAB>count, descending frequency".to_string(),
                "csv\tpunct, frequency, to check".to_string(),
            ],
        }
    }
}
