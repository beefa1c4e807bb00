//! Errors that stop a race from being built.
//!
//! Nothing that happens during a turn is an error: crashes and the end of the
//! race are ordinary state, reported through [`crate::TurnEvent`].

use crate::grid::GridError;
use crate::validate::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RaceError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
