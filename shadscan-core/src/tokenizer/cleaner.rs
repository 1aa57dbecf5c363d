//! Whitespace cleaning applied before segmentation
//!
//! Line breaks are never touched: they carry the paragraph structure the
//! segmenter relies on.

use serde::{Deserialize, Serialize};

/// Which cleaning steps to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Strip leading and trailing whitespace of the whole text
    pub strip: bool,
    /// Collapse runs of spaces into one
    pub collapse_spaces: bool,
    /// Convert tabs to spaces
    pub tabs_to_spaces: bool,
    /// Turn any other non-newline whitespace into a plain space
    pub normalize_whitespace: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl CleanOptions {
    /// Every step enabled
    pub fn all() -> Self {
        Self {
            strip: true,
            collapse_spaces: true,
            tabs_to_spaces: true,
            normalize_whitespace: true,
        }
    }

    /// Every step disabled
    pub fn none() -> Self {
        Self {
            strip: false,
            collapse_spaces: false,
            tabs_to_spaces: false,
            normalize_whitespace: false,
        }
    }
}

/// Applies [`CleanOptions`] to text
#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner {
    options: CleanOptions,
}

impl Cleaner {
    /// Create a cleaner
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> CleanOptions {
        self.options
    }

    /// Clean `text`
    pub fn clean(&self, text: &str) -> String {
        let opts = self.options;
        let mut out = String::with_capacity(text.len());
        let mut prev_space = false;

        for ch in text.chars() {
            let ch = match ch {
                '\t' if opts.tabs_to_spaces => ' ',
                '\n' | '\r' | '\t' | ' ' => ch,
                c if c.is_whitespace() && opts.normalize_whitespace => ' ',
                c => c,
            };

            if ch == ' ' && prev_space && opts.collapse_spaces {
                continue;
            }
            prev_space = ch == ' ';
            out.push(ch);
        }

        if opts.strip {
            out.trim().to_string()
        } else {
            out
        }
    }
}
