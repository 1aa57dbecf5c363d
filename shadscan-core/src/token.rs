//! Token model shared by every downstream view

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one run of non-punctuation text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParagraphDigest {
    /// First syllable of the run
    pub first: String,
    /// Number of syllables, always at least one
    pub count: usize,
    /// Last syllable of the run
    pub last: String,
}

impl ParagraphDigest {
    /// Build a digest from the syllables of a run
    ///
    /// Returns `None` when there are no syllables.
    pub fn from_syllables<S: AsRef<str>>(syllables: &[S]) -> Option<Self> {
        let first = syllables.first()?.as_ref().to_string();
        let last = syllables.last()?.as_ref().to_string();
        Some(Self {
            first,
            count: syllables.len(),
            last,
        })
    }
}

/// One element of a volume's token sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// A run made only of punctuation characters
    Punct {
        /// The punctuation string, verbatim
        text: String,
    },
    /// A paragraph digest
    Paragraph(ParagraphDigest),
}

impl Token {
    /// Create a punctuation token
    pub fn punct(text: impl Into<String>) -> Self {
        Token::Punct { text: text.into() }
    }

    /// Create a paragraph digest token
    pub fn paragraph(first: impl Into<String>, count: usize, last: impl Into<String>) -> Self {
        Token::Paragraph(ParagraphDigest {
            first: first.into(),
            count,
            last: last.into(),
        })
    }

    /// The punctuation string, if this is a punctuation token
    pub fn as_punct(&self) -> Option<&str> {
        match self {
            Token::Punct { text } => Some(text),
            Token::Paragraph(_) => None,
        }
    }

    /// The digest, if this is a paragraph token
    pub fn as_paragraph(&self) -> Option<&ParagraphDigest> {
        match self {
            Token::Punct { .. } => None,
            Token::Paragraph(digest) => Some(digest),
        }
    }

    /// True for punctuation tokens
    pub fn is_punct(&self) -> bool {
        matches!(self, Token::Punct { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Punct { text } => write!(f, "{text}"),
            Token::Paragraph(d) => write!(f, "({}, {}, {})", d.first, d.count, d.last),
        }
    }
}
