//! Track definitions and data-directory loaders.
//!
//! This crate is the initializer side of a race:
//! - the plain-text track format (entrants plus grid), see [`track`]
//! - race limits (data-driven via TOML)
//! - a [`ContentFactory`] that finds both under one data directory
//!
//! Everything produced here is handed to `race-core` as a [`race_core::RaceSetup`]
//! and a [`race_core::RaceConfig`]; content never appears in race state.

pub mod track;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use track::{EntrantSpec, StrategySpec, TrackDescription, TrackError, TrackOptions};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TrackLoader};
