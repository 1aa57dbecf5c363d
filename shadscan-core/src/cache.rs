//! Memoization of prepared collections
//!
//! Entries are keyed by the final component of the input directory and are
//! returned unconditionally on a hit: nothing checks whether the input files
//! changed since the entry was written. Delete the entry to force
//! re-segmentation.

use crate::collection::{Collection, Prepared};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage for prepared collections
pub trait CollectionCache {
    /// Cached collection for `key`, if any
    fn get(&self, key: &str) -> Result<Option<Collection>>;

    /// Store `collection` under `key`
    fn put(&self, key: &str, collection: &Collection) -> Result<()>;
}

/// Cache key of an input directory: the final component of its resolved path
///
/// `.` resolves to the current directory's name and the filesystem root to
/// `root`. Paths that cannot be resolved fall back to their own final
/// component.
pub fn cache_key(input_dir: &Path) -> String {
    let resolved = input_dir
        .canonicalize()
        .unwrap_or_else(|_| input_dir.to_path_buf());
    match resolved.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None if resolved.has_root() => "root".to_string(),
        None => "input".to_string(),
    }
}

/// Return the cached collection for `input_dir`, or prepare and store it
///
/// A preparation with failed volumes is returned but not stored, so the
/// next run retries those volumes.
pub fn load_or_prepare<C, F>(cache: &C, input_dir: &Path, prepare: F) -> Result<Collection>
where
    C: CollectionCache + ?Sized,
    F: FnOnce() -> Result<Prepared>,
{
    let key = cache_key(input_dir);
    if let Some(collection) = cache.get(&key)? {
        log::info!("loaded {} volume(s) from cache entry '{key}'", collection.len());
        return Ok(collection);
    }

    let prepared = prepare()?;
    store_if_complete(cache, &key, &prepared)?;
    Ok(prepared.collection)
}

/// Store `prepared` under `key` unless some volume failed
pub fn store_if_complete<C>(cache: &C, key: &str, prepared: &Prepared) -> Result<bool>
where
    C: CollectionCache + ?Sized,
{
    if !prepared.is_complete() {
        log::warn!(
            "not caching '{key}': {} volume(s) failed",
            prepared.failures.len()
        );
        return Ok(false);
    }
    cache.put(key, &prepared.collection)?;
    Ok(true)
}

/// JSON files in a cache directory
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a cache stored in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the entry for `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}_pre_processed.json"))
    }
}

impl CollectionCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<Collection>> {
        let path = self.entry_path(key);
        if !path.is_file() {
            return Ok(None);
        }
        let file = fs::File::open(&path).map_err(|e| Error::io(&path, e))?;
        let collection = serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Cache {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(collection))
    }

    fn put(&self, key: &str, collection: &Collection) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        let path = self.entry_path(key);
        let file = fs::File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, collection)?;
        writer.flush().map_err(|e| Error::io(&path, e))?;
        log::debug!("wrote cache entry {}", path.display());
        Ok(())
    }
}

/// In-process cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Collection>>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CollectionCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Collection>> {
        let entries = self.entries.lock().map_err(|_| Error::Cache {
            key: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, collection: &Collection) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| Error::Cache {
            key: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), collection.clone());
        Ok(())
    }
}

/// Cache that never stores anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CollectionCache for NoCache {
    fn get(&self, _key: &str) -> Result<Option<Collection>> {
        Ok(None)
    }

    fn put(&self, _key: &str, _collection: &Collection) -> Result<()> {
        Ok(())
    }
}
