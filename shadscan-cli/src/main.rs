//! shadscan: punctuation auditing for Tibetan text corpora

use anyhow::Result;
use clap::Parser;
use shadscan_cli::commands::Commands;

/// Catalogue punctuation usage across a collection of Tibetan volumes
#[derive(Debug, Parser)]
#[command(name = "shadscan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["shadscan", "analyze", "-i", "corpus", "-f", "csv"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }
}
