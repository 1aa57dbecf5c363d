//! Paragraph segmentation
//!
//! Turns the raw text of a volume into its token sequence. Two passes:
//!
//! 1. Line structure. The text is split on runs of line breaks. A line group
//!    ending in punctuation closes the current run with an explicit
//!    [`Piece::Boundary`]; any other group is glued to the next one, so a
//!    paragraph may continue across line breaks.
//! 2. Classification. Each run is split into word-level units. Units made
//!    only of punctuation become [`Token::Punct`]; everything else is split
//!    into syllables and summarised as a [`ParagraphDigest`].

use crate::punctuation::PunctuationSet;
use crate::token::{ParagraphDigest, Token};
use crate::tokenizer::{Granularity, Segmenter};

/// Intermediate representation between the two passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Text to be word-tokenized as one run
    Text(String),
    /// A line group ended in punctuation here
    Boundary,
}

/// Result of segmenting one volume
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentOutcome {
    /// Token sequence in reading order
    pub tokens: Vec<Token>,
    /// Units that were neither punctuation nor produced a syllable
    pub skipped_units: Vec<String>,
}

/// Paragraph segmenter over an external tokenizer
#[derive(Debug, Clone)]
pub struct ParagraphSegmenter<S> {
    segmenter: S,
    punctuation: PunctuationSet,
}

impl<S: Segmenter> ParagraphSegmenter<S> {
    /// Create a paragraph segmenter
    pub fn new(segmenter: S, punctuation: PunctuationSet) -> Self {
        Self {
            segmenter,
            punctuation,
        }
    }

    /// Punctuation alphabet in use
    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }

    /// Segment raw volume text into tokens
    pub fn segment(&self, raw: &str) -> SegmentOutcome {
        let mut outcome = SegmentOutcome::default();

        for piece in self.line_pieces(raw) {
            match piece {
                Piece::Text(run) => {
                    for unit in self.segmenter.segment(&run, Granularity::Word) {
                        self.classify(unit, &mut outcome);
                    }
                }
                Piece::Boundary => {}
            }
        }

        outcome
    }

    /// Convenience wrapper returning only the tokens
    pub fn tokens(&self, raw: &str) -> Vec<Token> {
        self.segment(raw).tokens
    }

    /// First pass: line groups to text runs and boundaries
    pub fn line_pieces(&self, raw: &str) -> Vec<Piece> {
        let mut pieces = Vec::new();
        let mut run = String::new();

        for group in raw.split(['\n', '\r']) {
            if group.is_empty() {
                continue;
            }
            run.push_str(group);
            if self.punctuation.ends_with_punct(group) {
                pieces.push(Piece::Text(std::mem::take(&mut run)));
                pieces.push(Piece::Boundary);
            }
        }

        if !run.is_empty() {
            pieces.push(Piece::Text(run));
        }
        pieces
    }

    fn classify(&self, unit: String, outcome: &mut SegmentOutcome) {
        if unit.is_empty() {
            return;
        }

        if self.punctuation.is_punct(&unit) {
            outcome.tokens.push(Token::Punct { text: unit });
            return;
        }

        let syllables = self.segmenter.segment(&unit, Granularity::Syllable);
        match ParagraphDigest::from_syllables(&syllables) {
            Some(digest) => outcome.tokens.push(Token::Paragraph(digest)),
            None => {
                log::debug!("dropping unit without syllables: {unit:?}");
                outcome.skipped_units.push(unit);
            }
        }
    }
}
