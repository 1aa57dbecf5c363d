//! Volumes and collection preparation
//!
//! A collection is every volume file of one input directory, segmented.
//! Volumes are independent, so segmentation runs on the rayon pool when the
//! `parallel` feature is enabled. A volume that cannot be read is reported
//! and skipped; only a missing input directory is fatal.

use crate::error::{Error, Result};
use crate::segmenter::ParagraphSegmenter;
use crate::token::Token;
use crate::tokenizer::{CleanOptions, Cleaner, Segmenter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One segmented volume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume identifier: file name up to the first dot
    pub name: String,
    /// File name inside the input directory
    pub file_name: String,
    /// Token sequence in reading order
    pub tokens: Vec<Token>,
}

impl Volume {
    /// Create a volume
    pub fn new(name: impl Into<String>, file_name: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            tokens,
        }
    }

    /// Number of punctuation tokens equal to `punct`
    pub fn occurrences(&self, punct: &str) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.as_punct() == Some(punct))
            .count()
    }
}

/// Every volume of one input directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Volumes sorted by name
    pub volumes: Vec<Volume>,
}

impl Collection {
    /// Create a collection, sorting volumes by name
    pub fn new(mut volumes: Vec<Volume>) -> Self {
        volumes.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.file_name.cmp(&b.file_name)));
        Self { volumes }
    }

    /// Look a volume up by name
    pub fn volume(&self, name: &str) -> Option<&Volume> {
        self.volumes.iter().find(|v| v.name == name)
    }

    /// Number of volumes
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// True when there are no volumes
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Total number of punctuation tokens across all volumes
    pub fn punct_token_count(&self) -> usize {
        self.volumes
            .iter()
            .map(|v| v.tokens.iter().filter(|t| t.is_punct()).count())
            .sum()
    }
}

/// A volume file that could not be processed
#[derive(Debug)]
pub struct VolumeFailure {
    /// Path of the file
    pub path: PathBuf,
    /// Why it failed
    pub error: Error,
}

/// Output of [`prepare_files`] and [`prepare_collection`]
#[derive(Debug, Default)]
pub struct Prepared {
    /// Volumes that were segmented
    pub collection: Collection,
    /// Volumes that were skipped
    pub failures: Vec<VolumeFailure>,
    /// Units dropped because they produced no syllable
    pub skipped_units: usize,
}

impl Prepared {
    /// True when every selected volume was segmented
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<Collection> for Prepared {
    fn from(collection: Collection) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }
}

/// Per-volume preparation options
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepareOptions {
    /// Whitespace cleaning before segmentation, if any
    pub clean: Option<CleanOptions>,
}

/// Volume identifier for a file name: everything before the first dot
pub fn volume_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// True for file names starting with a dot
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// List the regular, non-hidden files of an input directory, sorted
pub fn list_volume_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InputDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && !is_hidden(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read one volume file, trimmed and optionally cleaned
pub fn read_volume_text(path: &Path, clean: Option<CleanOptions>) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let raw = raw.trim();
    Ok(match clean {
        Some(options) => Cleaner::new(options).clean(raw),
        None => raw.to_string(),
    })
}

/// Segment every file in `dir`
pub fn prepare_collection<S, F>(
    dir: &Path,
    segmenter: &ParagraphSegmenter<S>,
    options: &PrepareOptions,
    on_volume: F,
) -> Result<Prepared>
where
    S: Segmenter,
    F: Fn(&str) + Sync,
{
    let files = list_volume_files(dir)?;
    log::info!("preparing {} volume(s) from {}", files.len(), dir.display());
    Ok(prepare_files(&files, segmenter, options, on_volume))
}

/// Segment an explicit list of volume files
///
/// `on_volume` is called with each file name once it has been handled,
/// whether it succeeded or not.
pub fn prepare_files<S, F>(
    files: &[PathBuf],
    segmenter: &ParagraphSegmenter<S>,
    options: &PrepareOptions,
    on_volume: F,
) -> Prepared
where
    S: Segmenter,
    F: Fn(&str) + Sync,
{
    let process = |path: &PathBuf| -> std::result::Result<(Volume, usize), VolumeFailure> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let result = read_volume_text(path, options.clean).map(|text| {
            let outcome = segmenter.segment(&text);
            let skipped = outcome.skipped_units.len();
            (
                Volume::new(volume_name(&file_name), file_name.as_str(), outcome.tokens),
                skipped,
            )
        });
        on_volume(&file_name);
        result.map_err(|error| VolumeFailure {
            path: path.clone(),
            error,
        })
    };

    #[cfg(feature = "parallel")]
    let results: Vec<_> = files.par_iter().map(process).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = files.iter().map(process).collect();

    let mut volumes = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    let mut skipped_units = 0;
    for result in results {
        match result {
            Ok((volume, skipped)) => {
                skipped_units += skipped;
                volumes.push(volume);
            }
            Err(failure) => {
                log::warn!("skipping {}: {}", failure.path.display(), failure.error);
                failures.push(failure);
            }
        }
    }

    Prepared {
        collection: Collection::new(volumes),
        failures,
        skipped_units,
    }
}

/// Create each directory if it does not exist yet
pub fn ensure_dirs<P: AsRef<Path>>(dirs: &[P]) -> Result<()> {
    for dir in dirs {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
