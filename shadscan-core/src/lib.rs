//! Punctuation auditing for Tibetan text corpora
//!
//! Each volume of a collection is segmented into a sequence of tokens: runs
//! of punctuation, and digests of the text between them (first syllable,
//! syllable count, last syllable). Three views are derived from that one
//! representation:
//!
//! - a frequency table of punctuation types across the collection
//! - a per-volume "with dots" rendering of the punctuation skeleton
//! - concordances of rare punctuation types for manual inspection
//!
//! # Example
//!
//! ```rust
//! use shadscan_core::{dots, AnalysisConfig, Collection, FrequencyTable, Volume};
//!
//! let config = AnalysisConfig::default();
//! let tokens = config.segmenter().tokens("༄༅། །བཅོམ་ལྡན་འདས་ལ་ཕྱག་འཚལ་ལོ། །");
//!
//! assert_eq!(dots::render_line(&dots::dot_view(&tokens)), "༄༅། ། ---7--- ། །");
//!
//! let collection = Collection::new(vec![Volume::new("v1", "v1.txt", tokens)]);
//! let table = FrequencyTable::from_collection(&collection);
//! assert_eq!(table.get("།"), 3);
//! ```

pub mod cache;
pub mod collection;
pub mod concordance;
pub mod config;
pub mod counter;
pub mod dots;
pub mod error;
pub mod punctuation;
pub mod segmenter;
pub mod token;
pub mod tokenizer;

pub use cache::{
    cache_key, load_or_prepare, store_if_complete, CollectionCache, FileCache, MemoryCache,
    NoCache,
};
pub use collection::{
    ensure_dirs, list_volume_files, prepare_collection, prepare_files, Collection, PrepareOptions,
    Prepared, Volume, VolumeFailure,
};
pub use concordance::{
    ConcordanceBuilder, ConcordanceEntry, Context, DirectorySource, FullTextMatch, Locator,
    PunctConcordance, TextSource,
};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use counter::FrequencyTable;
pub use error::{Error, Result};
pub use punctuation::{PunctuationSet, TIBETAN_PUNCTUATION};
pub use segmenter::{ParagraphSegmenter, SegmentOutcome};
pub use token::{ParagraphDigest, Token};
pub use tokenizer::{CleanOptions, Cleaner, Granularity, Segmenter, TibetanSegmenter};
