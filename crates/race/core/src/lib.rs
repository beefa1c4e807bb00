//! Deterministic rules of a turn-based, grid-based inertia race.
//!
//! `race-core` owns the canonical model: the [`Grid`] of typed cells, the
//! inertia [`movement`] model, the path [`traversal`] classifier, the closed
//! set of move-choice [`Strategy`] variants, the [`TurnEngine`] and the
//! start-of-race [`validate`] checks. It performs no I/O; track files and
//! terminals live in the content and client crates.
//!
//! Presentation layers drive a [`Race`]: build it from a [`RaceSetup`], call
//! [`Race::start_game`], then [`Race::advance_turn`] until it stops running.
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod movement;
pub mod race;
pub mod state;
pub mod strategy;
pub mod traversal;
pub mod validate;

pub use config::RaceConfig;
pub use engine::{CrashReason, TurnEngine, TurnEvent};
pub use error::RaceError;
pub use grid::{Cell, CellKind, Grid, GridError};
pub use movement::Direction;
pub use race::{Entrant, Race, RaceSetup};
pub use state::{Displacement, Participant, ParticipantId, Position, RaceState};
pub use strategy::{
    InteractionHandler, InteractiveStrategy, LegalDirections, MoveChoice, RandomStrategy,
    Strategy, legal_directions,
};
pub use traversal::Traversal;
pub use validate::{ValidationError, ValidationFailure};
