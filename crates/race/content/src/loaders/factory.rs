//! Content factory for building races from a data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use race_core::{RaceConfig, RaceSetup};

use crate::loaders::{ConfigLoader, LoadResult, TrackLoader};
use crate::track::TrackOptions;

/// Extension of track files under `tracks/`.
const TRACK_EXTENSION: &str = "txt";

/// Content factory that loads race content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// └── tracks/
///     ├── oval.txt
///     └── chicane.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load race limits from `config.toml`, or the defaults if there is none.
    pub fn load_config(&self) -> LoadResult<RaceConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(RaceConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a track from `tracks/{name}.txt`.
    pub fn load_track(&self, name: &str, options: &TrackOptions) -> LoadResult<RaceSetup> {
        TrackLoader::load(&self.track_path(name), options)
    }

    /// Names of the available tracks (file stems), sorted.
    pub fn list_tracks(&self) -> LoadResult<Vec<String>> {
        let dir = self.tracks_dir();
        let entries = std::fs::read_dir(&dir)
            .with_context(|| format!("Failed to read track directory {}", dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(TRACK_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();

        Ok(names)
    }

    pub fn track_path(&self, name: &str) -> PathBuf {
        self.tracks_dir().join(format!("{}.{}", name, TRACK_EXTENSION))
    }

    pub fn tracks_dir(&self) -> PathBuf {
        self.data_dir.join("tracks")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
