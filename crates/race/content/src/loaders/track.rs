//! Track file loader.

use std::path::Path;

use anyhow::Context;
use race_core::RaceSetup;

use crate::loaders::{LoadResult, read_file};
use crate::track::{TrackDescription, TrackOptions};

/// Loader for plain-text track files.
pub struct TrackLoader;

impl TrackLoader {
    /// Load a track file and build its race setup.
    ///
    /// Format errors stay downcastable to [`crate::TrackError`].
    pub fn load(path: &Path, options: &TrackOptions) -> LoadResult<RaceSetup> {
        let content = read_file(path)?;
        let setup = TrackDescription::parse(&content)
            .and_then(|track| track.into_setup(options))
            .with_context(|| format!("Invalid track file {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            entrants = setup.entrants.len(),
            width = setup.grid.width(),
            height = setup.grid.height(),
            "track loaded"
        );
        Ok(setup)
    }
}
