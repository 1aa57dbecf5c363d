//! Punctuation alphabet lookup
//!
//! The alphabet is a closed set of code points. It is data, not logic:
//! callers can swap in another set without touching the segmenter.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default Tibetan punctuation alphabet: head marks, shad variants,
/// the gter tsheg and the underscore used by transcribers.
pub const TIBETAN_PUNCTUATION: &[char] = &[
    '༄', '༅', '༆', '༇', '༈', '།', '༎', '༏', '༐', '༑', '༔', '_',
];

/// Set of characters that make up punctuation tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<char>", into = "Vec<char>")]
pub struct PunctuationSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Everything outside ASCII
    non_ascii: HashSet<char>,
}

impl PunctuationSet {
    /// Create from a list of punctuation characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// The default Tibetan alphabet
    pub fn tibetan() -> Self {
        Self::new(TIBETAN_PUNCTUATION.iter().copied())
    }

    /// Check if a character belongs to the alphabet
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// True when `s` is non-empty and every character is punctuation
    pub fn is_punct(&self, s: &str) -> bool {
        !s.is_empty() && s.chars().all(|ch| self.contains(ch))
    }

    /// True when the last character of `s` is punctuation
    pub fn ends_with_punct(&self, s: &str) -> bool {
        s.chars().next_back().is_some_and(|ch| self.contains(ch))
    }

    /// Members of the set, sorted by code point
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = (0u8..128)
            .filter(|&b| self.ascii_table[b as usize])
            .map(char::from)
            .chain(self.non_ascii.iter().copied())
            .collect();
        chars.sort_unstable();
        chars
    }

    /// Number of characters in the set
    pub fn len(&self) -> usize {
        self.ascii_table.iter().filter(|&&b| b).count() + self.non_ascii.len()
    }

    /// True when the set has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::tibetan()
    }
}

impl From<Vec<char>> for PunctuationSet {
    fn from(chars: Vec<char>) -> Self {
        Self::new(chars)
    }
}

impl From<PunctuationSet> for Vec<char> {
    fn from(set: PunctuationSet) -> Self {
        set.chars()
    }
}
