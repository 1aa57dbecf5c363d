//! Shadscan CLI library
//!
//! This library provides the command-line interface for auditing
//! punctuation in Tibetan text corpora.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod progress;

pub use error::{CliError, CliResult};
