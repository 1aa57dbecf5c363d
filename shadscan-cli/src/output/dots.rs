//! Per-volume "with dots" files

use anyhow::{Context, Result};
use shadscan_core::dots::render_line;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the dots sub-directory and file suffix
pub const DOTS_KIND: &str = "with_dots";

/// Path of the dots file of `volume` inside `out_dir`
pub fn dots_path(out_dir: &Path, volume: &str) -> PathBuf {
    out_dir
        .join(DOTS_KIND)
        .join(format!("{volume}_{DOTS_KIND}.txt"))
}

/// Write `{out_dir}/with_dots/{volume}_with_dots.txt` for every view
pub fn write_dots(out_dir: &Path, views: &[(String, Vec<String>)]) -> Result<usize> {
    let dir = out_dir.join(DOTS_KIND);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (volume, view) in views {
        let path = dots_path(out_dir, volume);
        fs::write(&path, render_line(view))
            .with_context(|| format!("Failed to write dots file: {}", path.display()))?;
    }
    Ok(views.len())
}
