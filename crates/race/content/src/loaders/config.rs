//! Race configuration loader.

use std::path::Path;

use race_core::RaceConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for race limits from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their [`RaceConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<RaceConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RaceConfig> {
        let config: RaceConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
