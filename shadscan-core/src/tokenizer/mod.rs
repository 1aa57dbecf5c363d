//! Tokenizer adapter
//!
//! The paragraph segmenter only needs two things from a language-processing
//! library: word-level units and syllable-level units. [`Segmenter`] is that
//! seam; [`TibetanSegmenter`] is the built-in implementation.

pub mod cleaner;
pub mod tibetan;

pub use cleaner::{CleanOptions, Cleaner};
pub use tibetan::TibetanSegmenter;

/// Unit size requested from a [`Segmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Word-level units: punctuation runs and text runs
    Word,
    /// Syllables of a single text unit
    Syllable,
}

/// Splits text into ordered units
pub trait Segmenter: Send + Sync {
    /// Segment `text` at the requested granularity
    fn segment(&self, text: &str, granularity: Granularity) -> Vec<String>;

    /// Name used in log output
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str, granularity: Granularity) -> Vec<String> {
        (**self).segment(text, granularity)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: Segmenter + ?Sized> Segmenter for std::sync::Arc<S> {
    fn segment(&self, text: &str, granularity: Granularity) -> Vec<String> {
        (**self).segment(text, granularity)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
