//! Punctuation type frequencies

use crate::collection::{Collection, Volume};
use crate::token::Token;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Occurrence count per punctuation string across a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one volume
    pub fn from_volume(volume: &Volume) -> Self {
        let mut table = Self::new();
        table.add_tokens(&volume.tokens);
        table
    }

    /// Count every volume of a collection
    ///
    /// Per-volume tables are built independently and merged in one
    /// reduction, so the result does not depend on processing order.
    pub fn from_collection(collection: &Collection) -> Self {
        #[cfg(feature = "parallel")]
        {
            collection
                .volumes
                .par_iter()
                .map(Self::from_volume)
                .reduce(Self::new, |mut acc, part| {
                    acc.merge(part);
                    acc
                })
        }
        #[cfg(not(feature = "parallel"))]
        {
            collection
                .volumes
                .iter()
                .map(Self::from_volume)
                .fold(Self::new(), |mut acc, part| {
                    acc.merge(part);
                    acc
                })
        }
    }

    /// Add the punctuation tokens of a sequence; digests are ignored
    pub fn add_tokens(&mut self, tokens: &[Token]) {
        for token in tokens {
            match token {
                Token::Punct { text } => *self.counts.entry(text.clone()).or_insert(0) += 1,
                Token::Paragraph(_) => {}
            }
        }
    }

    /// Add another table into this one
    pub fn merge(&mut self, other: FrequencyTable) {
        for (punct, count) in other.counts {
            *self.counts.entry(punct).or_insert(0) += count;
        }
    }

    /// Count for one punctuation string
    pub fn get(&self, punct: &str) -> usize {
        self.counts.get(punct).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct punctuation types
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries by descending count, ties broken by ascending string
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(punct, &count)| (punct.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Entries whose count is at or below `threshold`, in sorted order
    pub fn at_or_below(&self, threshold: usize) -> Vec<(&str, usize)> {
        self.sorted()
            .into_iter()
            .filter(|&(_, count)| count <= threshold)
            .collect()
    }
}

impl FromIterator<(String, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (punct, count) in iter {
            *table.counts.entry(punct).or_insert(0) += count;
        }
        table
    }
}
