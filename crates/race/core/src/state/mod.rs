//! Mutable race state.
//!
//! [`RaceState`] owns the live grid, the participants in turn order and the
//! participant → position map. Grid occupancy and the position map are only
//! ever changed together, through the crate-private helpers below, so they
//! always agree.
mod common;
mod participant;

pub use common::{Displacement, ParticipantId, Position};
pub use participant::Participant;

use std::collections::BTreeMap;

use crate::grid::Grid;
use crate::race::Entrant;

/// Snapshot of a race in progress.
#[derive(Clone, Debug)]
pub struct RaceState {
    grid: Grid,
    participants: Vec<Participant>,
    positions: BTreeMap<ParticipantId, Position>,
    cursor: usize,
    running: bool,
    winner: Option<ParticipantId>,
    turns_played: u64,
}

impl RaceState {
    /// Places every entrant on its starting cell. The race is not running yet.
    ///
    /// Entrants are expected to have passed validation; an entrant whose start
    /// is off the grid or already taken is left off the board.
    pub fn new(grid: Grid, entrants: &[Entrant]) -> Self {
        let mut state = Self {
            grid,
            participants: Vec::with_capacity(entrants.len()),
            positions: BTreeMap::new(),
            cursor: 0,
            running: false,
            winner: None,
            turns_played: 0,
        };

        for (index, entrant) in entrants.iter().enumerate() {
            let id = ParticipantId::from_index(index);
            state.participants.push(Participant::new(
                id,
                entrant.name.clone(),
                entrant.strategy.clone(),
                entrant.initial_displacement,
            ));

            if state.grid.occupy(entrant.start, id) {
                state.positions.insert(id, entrant.start);
            } else {
                tracing::warn!(
                    participant = %id,
                    start = %entrant.start,
                    "starting cell unavailable"
                );
            }
        }

        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Participants in turn order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        id.index().and_then(|index| self.participants.get(index))
    }

    /// The participant whose turn is next.
    pub fn current(&self) -> &Participant {
        &self.participants[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current cell of a participant still on the board.
    pub fn position(&self, id: ParticipantId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn winner(&self) -> Option<&Participant> {
        self.winner.and_then(|id| self.participant(id))
    }

    pub fn turns_played(&self) -> u64 {
        self.turns_played
    }

    pub fn crashed_count(&self) -> usize {
        self.participants.iter().filter(|p| p.has_crashed()).count()
    }

    pub fn all_crashed(&self) -> bool {
        self.participants.iter().all(Participant::has_crashed)
    }

    /// Checks that the grid's occupants and the position map describe the
    /// same placement, and that exactly the non-crashed participants are on
    /// the board.
    pub fn occupancy_is_consistent(&self) -> bool {
        let on_grid: BTreeMap<ParticipantId, Position> = self
            .grid
            .cells()
            .filter_map(|(position, cell)| cell.occupant().map(|id| (id, position)))
            .collect();
        let occupied_cells = self
            .grid
            .cells()
            .filter(|(_, cell)| cell.is_occupied())
            .count();

        on_grid == self.positions
            && occupied_cells == self.positions.len()
            && self
                .participants
                .iter()
                .all(|p| p.has_crashed() != self.positions.contains_key(&p.id()))
    }

    pub(crate) fn grid_and_participant_mut(
        &mut self,
        index: usize,
    ) -> (&Grid, &mut Participant) {
        (&self.grid, &mut self.participants[index])
    }

    pub(crate) fn participant_mut(&mut self, index: usize) -> &mut Participant {
        &mut self.participants[index]
    }

    /// Moves a participant's occupancy from its current cell to `to`.
    /// Returns false, leaving everything untouched, if `to` is unavailable.
    pub(crate) fn relocate(&mut self, id: ParticipantId, to: Position) -> bool {
        let from = self.positions.get(&id).copied();
        if from == Some(to) {
            return true;
        }

        if !self.grid.occupy(to, id) {
            return false;
        }
        if let Some(from) = from {
            self.grid.release(from, id);
        }
        self.positions.insert(id, to);
        true
    }

    /// Takes a participant off the board.
    pub(crate) fn remove_from_board(&mut self, id: ParticipantId) {
        if let Some(position) = self.positions.remove(&id) {
            self.grid.release(position, id);
        }
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub(crate) fn declare_winner(&mut self, id: ParticipantId) {
        self.winner = Some(id);
        self.running = false;
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1) % self.participants.len();
        self.turns_played += 1;
    }
}
