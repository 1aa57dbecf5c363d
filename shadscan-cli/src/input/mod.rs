//! Input handling module

pub mod volume_files;

pub use volume_files::resolve_volume_files;
