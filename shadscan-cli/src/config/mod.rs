//! Configuration file support
//!
//! Every key is optional. Command-line flags take precedence over values
//! read from the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shadscan_core::{AnalysisConfig, Locator, TIBETAN_PUNCTUATION};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Directory layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// Segmentation settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Report settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Concordance settings
    #[serde(default)]
    pub concordance: ConcordanceConfig,
}

/// Directory layout
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding one file per volume
    pub input: PathBuf,
    /// Directory receiving reports
    pub output: PathBuf,
    /// Directory receiving cache entries
    pub cache: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input"),
            output: PathBuf::from("output"),
            cache: PathBuf::from("cache"),
        }
    }
}

/// Segmentation settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Clean whitespace before segmentation
    pub normalize_whitespace: bool,

    /// Punctuation alphabet
    pub punctuation: Vec<char>,

    /// Glob pattern selecting volume files inside the input directory
    pub include: String,

    /// Reuse the cached segmentation of the input directory
    pub use_cache: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            normalize_whitespace: false,
            punctuation: TIBETAN_PUNCTUATION.to_vec(),
            include: "*".to_string(),
            use_cache: true,
            worker_threads: 0,
        }
    }
}

/// Report settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Frequency report format: "text" or "csv"
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

/// Concordance settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConcordanceConfig {
    /// Write concordances during `analyze`
    pub enabled: bool,
    /// Types at or below this frequency are concorded
    pub threshold: usize,
    /// "first" or "occurrence"
    pub locator: Locator,
    /// Characters shown on each side of a full-text match
    pub context_chars: usize,
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        let analysis = AnalysisConfig::default();
        Self {
            enabled: false,
            threshold: analysis.threshold,
            locator: analysis.locator,
            context_chars: analysis.context_chars,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.paths.input, PathBuf::from("input"));
        assert_eq!(config.output.format, "text");
        assert_eq!(config.concordance.threshold, 1);
        assert!(config.processing.use_cache);
        assert!(config.processing.punctuation.contains(&'།'));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[paths]
input = "corpus/kangyur"

[concordance]
threshold = 3
locator = "occurrence"
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("corpus/kangyur"));
        assert_eq!(config.paths.output, PathBuf::from("output"));
        assert_eq!(config.concordance.threshold, 3);
        assert_eq!(config.concordance.locator, Locator::Occurrence);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_unknown_section_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[nonsense]\nkey = 1\n").unwrap();
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        let back: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/shadscan.toml"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
