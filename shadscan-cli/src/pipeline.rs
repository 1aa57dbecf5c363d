//! Collection loading shared by the commands

use crate::error::CliError;
use crate::input::resolve_volume_files;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use shadscan_core::{
    cache_key, load_or_prepare, prepare_files, store_if_complete, AnalysisConfig, Collection,
    CollectionCache, FileCache, NoCache, Prepared,
};
use std::path::{Path, PathBuf};

/// Where and how to load a collection
#[derive(Debug, Clone)]
pub struct LoadSettings {
    /// Input directory
    pub input: PathBuf,
    /// Glob pattern selecting volume files
    pub include: String,
    /// Cache directory, `None` disables the cache
    pub cache_dir: Option<PathBuf>,
    /// Analysis settings
    pub analysis: AnalysisConfig,
    /// Suppress the progress bar
    pub quiet: bool,
}

/// Load the collection of `settings.input`, from cache when possible
pub fn load_collection(settings: &LoadSettings) -> Result<Collection> {
    if !settings.input.is_dir() {
        return Err(CliError::InputNotFound(settings.input.clone()).into());
    }

    let cache: Box<dyn CollectionCache> = match &settings.cache_dir {
        Some(dir) => Box::new(FileCache::new(dir)),
        None => Box::new(NoCache),
    };

    let collection = load_or_prepare(cache.as_ref(), &settings.input, || {
        segment_directory(settings)
    })
    .or_else(|e| match e {
        shadscan_core::Error::Cache { .. } => {
            log::warn!("replacing unreadable cache entry: {e}");
            let prepared = segment_directory(settings)?;
            store_if_complete(cache.as_ref(), &cache_key(&settings.input), &prepared)?;
            Ok(prepared.collection)
        }
        other => Err(other),
    })
    .with_context(|| format!("Failed to prepare collection: {}", settings.input.display()))?;

    log::info!("collection ready: {} volume(s)", collection.len());
    Ok(collection)
}

/// Segment every selected file of the input directory, reporting failures
pub fn segment_directory(settings: &LoadSettings) -> Result<Prepared, shadscan_core::Error> {
    let files = resolve_volume_files(&settings.input, &settings.include)
        .map_err(|e| shadscan_core::Error::Config(format!("{e:#}")))?;
    if files.is_empty() {
        log::warn!(
            "no volume files matching '{}' in {}",
            settings.include,
            settings.input.display()
        );
    }

    let mut reporter = ProgressReporter::new(settings.quiet);
    reporter.init_volumes(files.len() as u64);
    let segmenter = settings.analysis.segmenter();
    let prepared = prepare_files(
        &files,
        &segmenter,
        &settings.analysis.prepare_options(),
        |name| reporter.volume_completed(name),
    );
    reporter.finish();

    if !prepared.failures.is_empty() {
        eprintln!(
            "Warning: {} volume(s) could not be read and were skipped",
            prepared.failures.len()
        );
        for failure in &prepared.failures {
            eprintln!("  {}: {}", failure.path.display(), failure.error);
        }
    }
    if prepared.skipped_units > 0 {
        log::info!(
            "{} unit(s) without syllables were dropped",
            prepared.skipped_units
        );
    }

    Ok(prepared)
}

/// Default input directory, created on first run like the other work dirs
pub fn is_default_input(path: &Path) -> bool {
    path == Path::new("input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings(input: PathBuf, cache_dir: Option<PathBuf>) -> LoadSettings {
        LoadSettings {
            input,
            include: "*".to_string(),
            cache_dir,
            analysis: AnalysisConfig::default(),
            quiet: true,
        }
    }

    #[test]
    fn test_load_without_cache() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("v1.txt"), "ཀ་ཁ།").unwrap();

        let collection = load_collection(&settings(dir.path().to_path_buf(), None)).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.volumes[0].name, "v1");
    }

    #[test]
    fn test_load_writes_cache_entry() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corpus");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("v1.txt"), "ཀ།").unwrap();
        let cache_dir = dir.path().join("cache");

        load_collection(&settings(input, Some(cache_dir.clone()))).unwrap();
        assert!(cache_dir.join("corpus_pre_processed.json").is_file());
    }

    #[test]
    fn test_corrupt_cache_falls_back_to_segmentation() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corpus");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("v1.txt"), "ཀ།").unwrap();
        let cache_dir = dir.path().join("cache");
        fs::create_dir(&cache_dir).unwrap();
        fs::write(cache_dir.join("corpus_pre_processed.json"), "garbage").unwrap();

        let collection = load_collection(&settings(input, Some(cache_dir))).unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_failed_volume_is_retried_on_next_load() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corpus");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("good.txt"), "ཀ།").unwrap();
        fs::write(input.join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let cache_dir = dir.path().join("cache");

        let first = load_collection(&settings(input.clone(), Some(cache_dir.clone()))).unwrap();
        assert_eq!(first.len(), 1);
        assert!(!cache_dir.join("corpus_pre_processed.json").exists());

        fs::write(input.join("bad.txt"), "ཁ༔").unwrap();
        let second = load_collection(&settings(input, Some(cache_dir.clone()))).unwrap();
        let names: Vec<_> = second.volumes.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["bad", "good"]);
        assert!(cache_dir.join("corpus_pre_processed.json").is_file());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let err = load_collection(&settings(PathBuf::from("/nonexistent/corpus"), None))
            .unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
