//! Content loaders for reading race data from files.
//!
//! Track files use the text format in [`crate::track`]; race limits come
//! from TOML.

pub mod config;
pub mod factory;
pub mod track;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use track::TrackLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
