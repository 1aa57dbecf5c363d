//! Built-in Tibetan word and syllable segmentation

use super::{Granularity, Segmenter};
use crate::punctuation::PunctuationSet;

/// Intersyllabic tsheg
pub const TSHEG: char = '\u{0F0B}';
/// Non-breaking tsheg
pub const TSHEG_NON_BREAKING: char = '\u{0F0C}';

/// Segmenter for Tibetan script
///
/// Word level: whitespace separates units, and inside a whitespace-free run a
/// switch between punctuation and non-punctuation characters starts a new
/// unit. Syllable level: tsheg and whitespace separate syllables; the tsheg
/// itself is dropped.
#[derive(Debug, Clone, Default)]
pub struct TibetanSegmenter {
    punctuation: PunctuationSet,
}

impl TibetanSegmenter {
    /// Create a segmenter that splits punctuation runs using `punctuation`
    pub fn new(punctuation: PunctuationSet) -> Self {
        Self { punctuation }
    }

    fn words(&self, text: &str) -> Vec<String> {
        let mut units = Vec::new();
        for chunk in text.split_whitespace() {
            let mut current = String::new();
            let mut current_is_punct = false;

            for ch in chunk.chars() {
                let is_punct = self.punctuation.contains(ch);
                if !current.is_empty() && is_punct != current_is_punct {
                    units.push(std::mem::take(&mut current));
                }
                current_is_punct = is_punct;
                current.push(ch);
            }

            if !current.is_empty() {
                units.push(current);
            }
        }
        units
    }

    fn syllables(text: &str) -> Vec<String> {
        text.split(|ch: char| ch == TSHEG || ch == TSHEG_NON_BREAKING || ch.is_whitespace())
            .filter(|syl| !syl.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Segmenter for TibetanSegmenter {
    fn segment(&self, text: &str, granularity: Granularity) -> Vec<String> {
        match granularity {
            Granularity::Word => self.words(text),
            Granularity::Syllable => Self::syllables(text),
        }
    }

    fn name(&self) -> &'static str {
        "tibetan"
    }
}
