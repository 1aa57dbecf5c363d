//! Volume file selection inside the input directory

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Regular files of `dir` whose name matches `pattern`, sorted
///
/// A missing input directory is an error; an empty match is not, since an
/// empty collection still produces (empty) reports.
pub fn resolve_volume_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Input directory not found: {}", dir.display());
    }

    let full_pattern = format!("{}/{pattern}", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    let paths = glob_with(&full_pattern, options)
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?;
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_all_files_by_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let files = resolve_volume_files(dir.path(), "*").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_pattern_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "").unwrap();

        let files = resolve_volume_files(dir.path(), "*.txt").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_missing_directory() {
        let err = resolve_volume_files(Path::new("/nonexistent/corpus"), "*").unwrap_err();
        assert!(err.to_string().contains("Input directory not found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        assert!(resolve_volume_files(dir.path(), "[").is_err());
    }
}
