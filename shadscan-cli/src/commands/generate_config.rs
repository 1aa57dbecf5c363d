//! Generate config command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "shadscan.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::AlreadyExists(self.output.clone()).into());
        }

        let template = generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!("Use it with:");
        println!("   shadscan analyze --config {}", self.output.display());
        Ok(())
    }
}

/// Default configuration with explanatory header
pub fn generate_template() -> Result<String> {
    let body = CliConfig::default().to_toml()?;
    Ok(format!(
        r#"# shadscan configuration
#
# [paths]        input, output and cache directories
# [processing]   punctuation alphabet, whitespace cleaning, volume file pattern
# [output]       format = "text" | "csv"
# [concordance]  threshold, locator = "first" | "occurrence", context_chars
#
# Command-line flags override every value below.

{body}"#
    ))
}
