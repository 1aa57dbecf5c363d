//! Analysis configuration

use crate::collection::PrepareOptions;
use crate::concordance::{Locator, DEFAULT_CONTEXT_CHARS};
use crate::error::{Error, Result};
use crate::punctuation::PunctuationSet;
use crate::segmenter::ParagraphSegmenter;
use crate::tokenizer::{CleanOptions, TibetanSegmenter};

/// Default concordance threshold: only types seen once are concorded
pub const DEFAULT_THRESHOLD: usize = 1;

/// Settings shared by every stage of an analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Punctuation alphabet
    pub punctuation: PunctuationSet,
    /// Whitespace cleaning before segmentation (None = off)
    pub clean: Option<CleanOptions>,
    /// Concordance frequency threshold
    pub threshold: usize,
    /// Full-text locator mode
    pub locator: Locator,
    /// Characters kept around full-text matches
    pub context_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            punctuation: PunctuationSet::tibetan(),
            clean: None,
            threshold: DEFAULT_THRESHOLD,
            locator: Locator::First,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }
}

impl AnalysisConfig {
    /// Create a builder
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Paragraph segmenter using the built-in Tibetan tokenizer
    pub fn segmenter(&self) -> ParagraphSegmenter<TibetanSegmenter> {
        ParagraphSegmenter::new(
            TibetanSegmenter::new(self.punctuation.clone()),
            self.punctuation.clone(),
        )
    }

    /// Per-volume preparation options
    pub fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions { clean: self.clean }
    }
}

/// Builder for [`AnalysisConfig`]
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Replace the punctuation alphabet
    pub fn punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.config.punctuation = PunctuationSet::new(chars);
        self
    }

    /// Turn whitespace normalization on (all cleaning steps) or off
    pub fn normalize_whitespace(mut self, enabled: bool) -> Self {
        self.config.clean = enabled.then(CleanOptions::all);
        self
    }

    /// Use specific cleaning options
    pub fn clean(mut self, options: Option<CleanOptions>) -> Self {
        self.config.clean = options;
        self
    }

    /// Set the concordance threshold
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the locator mode
    pub fn locator(mut self, locator: Locator) -> Self {
        self.config.locator = locator;
        self
    }

    /// Set the full-text context width
    pub fn context_chars(mut self, chars: usize) -> Self {
        self.config.context_chars = chars;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalysisConfig> {
        if self.config.punctuation.is_empty() {
            return Err(Error::Config(
                "punctuation alphabet must not be empty".to_string(),
            ));
        }
        if self.config.punctuation.chars().iter().any(|c| c.is_whitespace()) {
            return Err(Error::Config(
                "punctuation alphabet must not contain whitespace".to_string(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.threshold, 1);
        assert_eq!(config.locator, Locator::First);
        assert!(config.clean.is_none());
        assert!(config.punctuation.contains('།'));
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::builder()
            .normalize_whitespace(true)
            .threshold(5)
            .locator(Locator::Occurrence)
            .context_chars(10)
            .build()
            .unwrap();
        assert_eq!(config.clean, Some(CleanOptions::all()));
        assert_eq!(config.threshold, 5);
        assert_eq!(config.locator, Locator::Occurrence);
        assert_eq!(config.context_chars, 10);
        assert!(config.prepare_options().clean.is_some());
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let result = AnalysisConfig::builder().punctuation(Vec::new()).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_whitespace_in_alphabet_rejected() {
        let result = AnalysisConfig::builder().punctuation(['།', ' ']).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_alphabet_reaches_segmenter() {
        let config = AnalysisConfig::builder().punctuation(['.']).build().unwrap();
        let tokens = config.segmenter().tokens("ka.kha");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].as_punct(), Some("."));
    }
}
