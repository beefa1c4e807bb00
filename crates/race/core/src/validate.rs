//! Start-of-race validation.
//!
//! Checks run once over the immutable setup: the grid and the entrants'
//! starting cells. Every failed check is reported, not just the first one.

use std::fmt;

use crate::config::RaceConfig;
use crate::grid::{CellKind, Grid};
use crate::race::Entrant;
use crate::state::Position;

/// A single failed check.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("a race needs at least one participant")]
    NoParticipants,

    #[error("{participants} participants but only {start_cells} start cells")]
    NotEnoughStartCells {
        participants: usize,
        start_cells: usize,
    },

    #[error("{participants} participants exceed the limit of {max}")]
    TooManyParticipants { participants: usize, max: usize },

    #[error("the grid has no finish cell")]
    NoFinish,

    #[error("participant {name} starts at {position}, which is not a start cell")]
    NotOnStart { name: String, position: Position },

    #[error("participants {first} and {second} share the start cell {position}")]
    SharedStart {
        first: String,
        second: String,
        position: Position,
    },

    #[error("grid is {width}x{height}, larger than the allowed {max_width}x{max_height}")]
    GridTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
}

/// Every check that failed for a setup. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    failures: Vec<ValidationFailure>,
}

impl ValidationError {
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn contains(&self, failure: &ValidationFailure) -> bool {
        self.failures.contains(failure)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid race setup: ")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Lists every failed check for `entrants` racing on `grid`.
pub fn failures(grid: &Grid, entrants: &[Entrant], config: &RaceConfig) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    let participants = entrants.len();
    let start_cells = grid.count_of(CellKind::Start);
    if participants == 0 {
        failures.push(ValidationFailure::NoParticipants);
    } else if participants > start_cells {
        failures.push(ValidationFailure::NotEnoughStartCells {
            participants,
            start_cells,
        });
    }
    if participants > config.max_participants {
        failures.push(ValidationFailure::TooManyParticipants {
            participants,
            max: config.max_participants,
        });
    }

    if grid.count_of(CellKind::Finish) == 0 {
        failures.push(ValidationFailure::NoFinish);
    }

    let mut claimed: Vec<(Position, &str)> = Vec::with_capacity(participants);
    for entrant in entrants {
        if grid.kind(entrant.start) != Some(CellKind::Start) {
            failures.push(ValidationFailure::NotOnStart {
                name: entrant.name.clone(),
                position: entrant.start,
            });
        }

        match claimed.iter().find(|(position, _)| *position == entrant.start) {
            Some((position, first)) => failures.push(ValidationFailure::SharedStart {
                first: (*first).to_owned(),
                second: entrant.name.clone(),
                position: *position,
            }),
            None => claimed.push((entrant.start, entrant.name.as_str())),
        }
    }

    let max_width = config.max_width.unwrap_or(u32::MAX);
    let max_height = config.max_height.unwrap_or(u32::MAX);
    if grid.width() > max_width || grid.height() > max_height {
        failures.push(ValidationFailure::GridTooLarge {
            width: grid.width(),
            height: grid.height(),
            max_width,
            max_height,
        });
    }

    failures
}

/// Fails fast with the full failure list if any check fails.
pub fn validate(
    grid: &Grid,
    entrants: &[Entrant],
    config: &RaceConfig,
) -> Result<(), ValidationError> {
    let failures = failures(grid, entrants, config);
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { failures })
    }
}
