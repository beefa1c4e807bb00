//! Turn engine.
//!
//! The [`TurnEngine`] is the only code that mutates a [`RaceState`] during a
//! race. One call to [`TurnEngine::next_turn`] plays exactly one participant's
//! turn and then moves the cursor on, whatever the outcome:
//!
//! 1. crashed participants are skipped;
//! 2. if inertia alone lands on oil, the participant stops there;
//! 3. otherwise the strategy picks a direction, or crashes the participant by
//!    finding none;
//! 4. the path to the new position is classified and applied.
//!
//! Every outcome is an explicit [`TurnEvent`]; nothing here returns an error.

mod events;

pub use events::{CrashReason, TurnEvent};

use crate::grid::CellKind;
use crate::movement;
use crate::state::{ParticipantId, Position, RaceState};
use crate::strategy::{self, MoveChoice};
use crate::traversal::{self, Traversal};

/// Applies turns to a borrowed race state.
pub struct TurnEngine<'a> {
    state: &'a mut RaceState,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut RaceState) -> Self {
        Self { state }
    }

    /// Plays the current participant's turn and advances the cursor.
    ///
    /// Does nothing and returns [`TurnEvent::Idle`] once the race is over.
    pub fn next_turn(&mut self) -> TurnEvent {
        if !self.state.is_running() {
            return TurnEvent::Idle;
        }

        let index = self.state.cursor();
        let event = self.play(index);
        tracing::debug!(turn = self.state.turns_played(), %event, "turn played");

        self.state.advance_cursor();
        event
    }

    fn play(&mut self, index: usize) -> TurnEvent {
        let participant = &self.state.participants()[index];
        let id = participant.id();
        if participant.has_crashed() {
            return TurnEvent::Skipped { participant: id };
        }

        let last = participant.last_displacement();
        let Some(from) = self.state.position(id) else {
            return self.crash(index, None, CrashReason::IllegalMove);
        };

        let center = movement::center(from, last);
        if self.state.grid().kind(center) == Some(CellKind::Slick) {
            return self.slide(index, from, center);
        }

        let (grid, participant) = self.state.grid_and_participant_mut(index);
        let direction = match participant.strategy_mut().choose_direction(grid, last, from) {
            MoveChoice::Direction(direction) => direction,
            MoveChoice::NoLegalMove => {
                return self.crash(index, None, CrashReason::NoLegalMove);
            }
        };

        let displacement = movement::next_displacement(last, direction);
        let to = from + displacement;
        if !strategy::is_legal_target(grid, from, to) {
            return self.crash(index, Some(to), CrashReason::IllegalMove);
        }

        match traversal::classify(grid, from, to) {
            Traversal::Normal => {
                self.state.relocate(id, to);
                self.state
                    .participant_mut(index)
                    .set_last_displacement(displacement);
                TurnEvent::Moved {
                    participant: id,
                    direction,
                    from,
                    to,
                    displacement,
                }
            }
            Traversal::Crashed { at } => self.crash(index, Some(at), CrashReason::Offtrack),
            Traversal::Finished { at } => {
                // Another racer may be parked on the finish cell; the win stands regardless.
                self.state.relocate(id, at);
                self.state
                    .participant_mut(index)
                    .set_last_displacement(displacement);
                self.state.declare_winner(id);
                tracing::info!(participant = %id, at = %at, "race won");
                TurnEvent::Finished { participant: id, at }
            }
        }
    }

    /// Oil: stop at the inertia center, keep the displacement.
    fn slide(&mut self, index: usize, from: Position, to: Position) -> TurnEvent {
        let id = ParticipantId::from_index(index);
        if !self.state.relocate(id, to) {
            return self.crash(index, Some(to), CrashReason::Collision);
        }

        TurnEvent::Slid {
            participant: id,
            from,
            to,
        }
    }

    fn crash(&mut self, index: usize, at: Option<Position>, reason: CrashReason) -> TurnEvent {
        let id = ParticipantId::from_index(index);
        self.state.participant_mut(index).crash();
        self.state.remove_from_board(id);
        tracing::info!(participant = %id, %reason, "participant crashed");

        if self.state.all_crashed() {
            self.state.set_running(false);
            tracing::info!("every participant crashed, race over without a winner");
        }

        TurnEvent::Crashed {
            participant: id,
            at,
            reason,
        }
    }
}
