//! Concordances for punctuation types
//!
//! For every occurrence of a punctuation string the builder records the
//! neighbouring tokens and a match in the raw volume text that an auditor
//! can inspect by hand.
//!
//! The default [`Locator::First`] always reports the first literal match in
//! the volume, whichever occurrence is being concorded.
//! [`Locator::Occurrence`] pairs the k-th token occurrence with the k-th
//! literal match instead; literal matches can also fall inside a longer
//! punctuation run, so that pairing is approximate.

use crate::collection::{Collection, Volume};
use crate::counter::FrequencyTable;
use crate::error::{Error, Result};
use crate::token::Token;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of characters kept on each side of a full-text match
pub const DEFAULT_CONTEXT_CHARS: usize = 30;

/// Access to the raw text of a volume
pub trait TextSource: Sync {
    /// Raw text of `volume`
    fn raw_text(&self, volume: &Volume) -> Result<String>;
}

/// Reads raw text back from the input directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TextSource for DirectorySource {
    fn raw_text(&self, volume: &Volume) -> Result<String> {
        let path = self.dir.join(&volume.file_name);
        fs::read_to_string(&path).map_err(|e| Error::io(path, e))
    }
}

/// In-memory raw texts keyed by volume name
impl TextSource for HashMap<String, String> {
    fn raw_text(&self, volume: &Volume) -> Result<String> {
        self.get(&volume.name).cloned().ok_or_else(|| {
            Error::io(
                &volume.file_name,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no raw text for volume"),
            )
        })
    }
}

/// Which raw-text match to attach to an occurrence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locator {
    /// First literal match in the volume
    #[default]
    First,
    /// k-th literal match for the k-th occurrence
    Occurrence,
}

/// Neighbour of a concorded punctuation token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Context {
    /// The occurrence opens the volume
    Start,
    /// The occurrence closes the volume
    End,
    /// Another punctuation token
    Punct {
        /// The neighbouring punctuation string
        text: String,
    },
    /// Paragraph on the left: only its tail matters
    LeftParagraph {
        /// Syllable count
        count: usize,
        /// Syllable next to the punctuation
        last: String,
    },
    /// Paragraph on the right: only its head matters
    RightParagraph {
        /// Syllable next to the punctuation
        first: String,
        /// Syllable count
        count: usize,
    },
}

impl Context {
    fn left_of(tokens: &[Token], i: usize) -> Self {
        if i == 0 {
            return Context::Start;
        }
        match &tokens[i - 1] {
            Token::Punct { text } => Context::Punct { text: text.clone() },
            Token::Paragraph(d) => Context::LeftParagraph {
                count: d.count,
                last: d.last.clone(),
            },
        }
    }

    fn right_of(tokens: &[Token], i: usize) -> Self {
        match tokens.get(i + 1) {
            None => Context::End,
            Some(Token::Punct { text }) => Context::Punct { text: text.clone() },
            Some(Token::Paragraph(d)) => Context::RightParagraph {
                first: d.first.clone(),
                count: d.count,
            },
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Start => write!(f, "start"),
            Context::End => write!(f, "end"),
            Context::Punct { text } => write!(f, "{text}"),
            Context::LeftParagraph { count, last } => write!(f, "--{count}--{last}"),
            Context::RightParagraph { first, count } => write!(f, "{first}--{count}--"),
        }
    }
}

/// A literal match in the raw text with some surroundings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextMatch {
    /// Byte offset of the match
    pub start: usize,
    /// Byte offset just past the match
    pub end: usize,
    /// Matched text
    pub matched: String,
    /// Text preceding the match
    pub before: String,
    /// Text following the match
    pub after: String,
}

impl fmt::Display for FullTextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.before, self.matched, self.after)
    }
}

/// One concorded occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcordanceEntry {
    /// Left neighbour
    pub left: Context,
    /// The punctuation string
    pub punct: String,
    /// Right neighbour
    pub right: Context,
    /// Raw-text match, absent when the text did not contain the string
    pub locator: Option<FullTextMatch>,
    /// Volume name
    pub volume: String,
}

impl fmt::Display for ConcordanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} {} {}\t", self.volume, self.left, self.punct, self.right)?;
        match &self.locator {
            Some(found) => write!(f, "{found}"),
            None => write!(f, "-"),
        }
    }
}

/// Concordance of one punctuation type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctConcordance {
    /// The punctuation string
    pub punct: String,
    /// Collection-wide frequency
    pub frequency: usize,
    /// Every occurrence
    pub entries: Vec<ConcordanceEntry>,
}

/// Builds concordance entries against a [`TextSource`]
#[derive(Debug, Clone)]
pub struct ConcordanceBuilder<T> {
    source: T,
    locator: Locator,
    context_chars: usize,
}

impl<T: TextSource> ConcordanceBuilder<T> {
    /// Create a builder with the first-match locator
    pub fn new(source: T) -> Self {
        Self {
            source,
            locator: Locator::First,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }

    /// Set the locator mode
    pub fn locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    /// Set how many characters surround a full-text match
    pub fn context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    /// Every occurrence of `punct`, in volume then position order
    pub fn concord(&self, punct: &str, collection: &Collection) -> Result<Vec<ConcordanceEntry>> {
        let pattern = Regex::new(&regex::escape(punct))?;
        let mut entries = Vec::new();

        for volume in &collection.volumes {
            let positions: Vec<usize> = volume
                .tokens
                .iter()
                .enumerate()
                .filter(|(_, t)| t.as_punct() == Some(punct))
                .map(|(i, _)| i)
                .collect();
            if positions.is_empty() {
                continue;
            }

            let raw = match self.source.raw_text(volume) {
                Ok(raw) => Some(raw),
                Err(e) => {
                    log::warn!("no full text for volume {}: {e}", volume.name);
                    None
                }
            };

            for (k, &i) in positions.iter().enumerate() {
                let locator = raw.as_deref().and_then(|raw| self.locate(&pattern, raw, k));
                if locator.is_none() && raw.is_some() {
                    log::debug!("{punct:?} not found in raw text of {}", volume.name);
                }
                entries.push(ConcordanceEntry {
                    left: Context::left_of(&volume.tokens, i),
                    punct: punct.to_string(),
                    right: Context::right_of(&volume.tokens, i),
                    locator,
                    volume: volume.name.clone(),
                });
            }
        }

        Ok(entries)
    }

    /// Concordances of every type whose frequency is at or below `threshold`
    pub fn concord_rare(
        &self,
        collection: &Collection,
        frequencies: &FrequencyTable,
        threshold: usize,
    ) -> Result<Vec<PunctConcordance>> {
        frequencies
            .at_or_below(threshold)
            .into_iter()
            .map(|(punct, frequency)| {
                Ok(PunctConcordance {
                    punct: punct.to_string(),
                    frequency,
                    entries: self.concord(punct, collection)?,
                })
            })
            .collect()
    }

    fn locate(&self, pattern: &Regex, raw: &str, occurrence: usize) -> Option<FullTextMatch> {
        let found = match self.locator {
            Locator::First => pattern.find(raw),
            Locator::Occurrence => pattern.find_iter(raw).nth(occurrence),
        }?;

        Some(FullTextMatch {
            start: found.start(),
            end: found.end(),
            matched: found.as_str().to_string(),
            before: tail_chars(&raw[..found.start()], self.context_chars).to_string(),
            after: head_chars(&raw[found.end()..], self.context_chars).to_string(),
        })
    }
}

fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> (Collection, HashMap<String, String>) {
        let collection = Collection::new(vec![
            Volume::new(
                "v1",
                "v1.txt",
                vec![
                    Token::punct("༎"),
                    Token::paragraph("ཀ", 3, "ཁ"),
                    Token::punct("༎"),
                    Token::punct("།"),
                    Token::paragraph("ག", 2, "ང"),
                    Token::punct("༎"),
                ],
            ),
            Volume::new("v2", "v2.txt", vec![Token::punct("།")]),
        ]);
        let mut texts = HashMap::new();
        texts.insert("v1".to_string(), "༎ཀ་ཅ་ཁ༎།ག་ང༎".to_string());
        texts.insert("v2".to_string(), "།".to_string());
        (collection, texts)
    }

    #[test]
    fn test_contexts_and_sentinels() {
        let (collection, texts) = collection();
        let entries = ConcordanceBuilder::new(texts)
            .concord("༎", &collection)
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].left, Context::Start);
        assert_eq!(entries[0].right.to_string(), "ཀ--3--");
        assert_eq!(entries[1].left.to_string(), "--3--ཁ");
        assert_eq!(entries[1].right, Context::Punct { text: "།".to_string() });
        assert_eq!(entries[2].left.to_string(), "--2--ང");
        assert_eq!(entries[2].right, Context::End);
        assert!(entries.iter().all(|e| e.volume == "v1"));
    }

    #[test]
    fn test_second_token_has_real_left_neighbour() {
        let collection = Collection::new(vec![Volume::new(
            "v",
            "v.txt",
            vec![Token::punct("།"), Token::punct("༔")],
        )]);
        let mut texts = HashMap::new();
        texts.insert("v".to_string(), "།༔".to_string());

        let entries = ConcordanceBuilder::new(texts).concord("༔", &collection).unwrap();
        assert_eq!(entries[0].left, Context::Punct { text: "།".to_string() });
    }

    #[test]
    fn test_first_locator_repeats_first_match() {
        let (collection, texts) = collection();
        let entries = ConcordanceBuilder::new(texts)
            .concord("༎", &collection)
            .unwrap();

        let starts: Vec<_> = entries
            .iter()
            .map(|e| e.locator.as_ref().unwrap().start)
            .collect();
        assert_eq!(starts, vec![0, 0, 0]);
    }

    #[test]
    fn test_occurrence_locator_walks_matches() {
        let (collection, texts) = collection();
        let raw = texts["v1"].clone();
        let entries = ConcordanceBuilder::new(texts)
            .locator(Locator::Occurrence)
            .concord("༎", &collection)
            .unwrap();

        let starts: Vec<_> = entries
            .iter()
            .map(|e| e.locator.as_ref().unwrap().start)
            .collect();
        let expected: Vec<_> = raw.match_indices("༎").map(|(i, _)| i).collect();
        assert_eq!(starts, expected);
    }

    #[test]
    fn test_locator_context_window() {
        let (collection, texts) = collection();
        let entries = ConcordanceBuilder::new(texts)
            .context_chars(2)
            .concord("།", &collection)
            .unwrap();

        let found = entries[0].locator.as_ref().unwrap();
        assert_eq!(found.matched, "།");
        assert_eq!(found.before, "ཁ༎");
        assert_eq!(found.after, "ག་");
        assert_eq!(found.to_string(), "ཁ༎[།]ག་");
    }

    #[test]
    fn test_missing_match_gives_no_locator() {
        let (collection, mut texts) = collection();
        texts.insert("v2".to_string(), "ཀ".to_string());
        let entries = ConcordanceBuilder::new(texts).concord("།", &collection).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].locator.is_some());
        assert!(entries[1].locator.is_none());
        assert!(entries[1].to_string().ends_with("\t-"));
    }

    #[test]
    fn test_missing_raw_text_is_not_fatal() {
        let (collection, _) = collection();
        let entries = ConcordanceBuilder::new(HashMap::new())
            .concord("།", &collection)
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.locator.is_none()));
    }

    #[test]
    fn test_concord_rare_respects_threshold() {
        let (collection, texts) = collection();
        let table = FrequencyTable::from_collection(&collection);
        let concs = ConcordanceBuilder::new(texts)
            .concord_rare(&collection, &table, 2)
            .unwrap();

        assert_eq!(concs.len(), 1);
        assert_eq!(concs[0].punct, "།");
        assert_eq!(concs[0].frequency, 2);
        assert_eq!(concs[0].entries.len(), 2);
    }

    #[test]
    fn test_char_window_helpers() {
        assert_eq!(head_chars("ཀཁག", 2), "ཀཁ");
        assert_eq!(head_chars("ཀ", 5), "ཀ");
        assert_eq!(tail_chars("ཀཁག", 2), "ཁག");
        assert_eq!(tail_chars("ཀ", 5), "ཀ");
        assert_eq!(tail_chars("ཀ", 0), "");
    }
}
