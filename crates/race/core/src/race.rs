//! The race object handed to presentation layers.
//!
//! A [`Race`] keeps the validated [`RaceSetup`] untouched and derives a fresh
//! [`RaceState`] from it on every reset, so restarting never has to undo
//! anything.

use crate::config::RaceConfig;
use crate::engine::{TurnEngine, TurnEvent};
use crate::error::RaceError;
use crate::grid::Grid;
use crate::movement::Direction;
use crate::state::{Displacement, Participant, ParticipantId, Position, RaceState};
use crate::strategy::Strategy;
use crate::validate;

/// A participant as described by a track, before the race starts.
#[derive(Clone, Debug)]
pub struct Entrant {
    pub name: String,
    pub strategy: Strategy,
    pub start: Position,
    pub initial_displacement: Displacement,
}

impl Entrant {
    /// The initial displacement is the unit vector of `first_move`.
    pub fn new(
        name: impl Into<String>,
        strategy: Strategy,
        start: Position,
        first_move: Direction,
    ) -> Self {
        Self {
            name: name.into(),
            strategy,
            start,
            initial_displacement: first_move.unit(),
        }
    }

    pub fn with_displacement(mut self, displacement: Displacement) -> Self {
        self.initial_displacement = displacement;
        self
    }
}

/// Immutable inputs of a race: the pristine grid and the entrants in turn order.
#[derive(Clone, Debug)]
pub struct RaceSetup {
    pub grid: Grid,
    pub entrants: Vec<Entrant>,
}

impl RaceSetup {
    pub fn new(grid: Grid, entrants: Vec<Entrant>) -> Self {
        Self { grid, entrants }
    }
}

/// A validated race: the retained setup and the live state.
///
/// Callers drive it from a single thread: [`Race::start_game`], then
/// [`Race::advance_turn`] until [`Race::is_running`] turns false.
#[derive(Clone, Debug)]
pub struct Race {
    setup: RaceSetup,
    state: RaceState,
}

impl Race {
    /// Validates `setup` and places every entrant on its start cell.
    ///
    /// The race is built stopped; call [`Race::start_game`] to begin.
    pub fn new(setup: RaceSetup, config: RaceConfig) -> Result<Self, RaceError> {
        validate::validate(&setup.grid, &setup.entrants, &config)?;

        let state = RaceState::new(setup.grid.clone(), &setup.entrants);
        tracing::debug!(
            participants = setup.entrants.len(),
            width = setup.grid.width(),
            height = setup.grid.height(),
            "race built"
        );

        Ok(Self { setup, state })
    }

    /// Starts the race from a fresh state. Does nothing while a race is running.
    pub fn start_game(&mut self) {
        if self.state.is_running() {
            return;
        }
        self.rebuild();
        tracing::info!(participants = self.setup.entrants.len(), "race started");
    }

    /// Throws away the current state and starts over from the setup.
    pub fn reset_game(&mut self) {
        self.rebuild();
        tracing::info!("race reset");
    }

    fn rebuild(&mut self) {
        self.state = RaceState::new(self.setup.grid.clone(), &self.setup.entrants);
        self.state.set_running(true);
    }

    /// Plays one participant's turn.
    pub fn advance_turn(&mut self) -> TurnEvent {
        TurnEngine::new(&mut self.state).next_turn()
    }

    pub fn state(&self) -> &RaceState {
        &self.state
    }

    /// The live grid, occupancy included.
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    pub fn participants(&self) -> &[Participant] {
        self.state.participants()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.state.participant(id)
    }

    pub fn current_participant(&self) -> &Participant {
        self.state.current()
    }

    /// `None` once the participant has crashed.
    pub fn position(&self, id: ParticipantId) -> Option<Position> {
        self.state.position(id)
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn winner(&self) -> Option<&Participant> {
        self.state.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind::*;
    use crate::validate::ValidationFailure;

    fn setup() -> RaceSetup {
        let grid = Grid::from_rows(vec![
            vec![Start, Start, Track],
            vec![Track, Track, Track],
            vec![Finish, Finish, Finish],
        ])
        .unwrap();
        RaceSetup::new(
            grid,
            vec![
                Entrant::new(
                    "a",
                    Strategy::fixed(Direction::Center),
                    Position::new(0, 0),
                    Direction::Down,
                ),
                Entrant::new(
                    "b",
                    Strategy::fixed(Direction::Center),
                    Position::new(1, 0),
                    Direction::Center,
                ),
            ],
        )
    }

    #[test]
    fn invalid_setups_never_build() {
        let mut bad = setup();
        bad.entrants[1].start = Position::new(2, 1);

        match Race::new(bad, RaceConfig::default()) {
            Err(RaceError::Validation(err)) => assert_eq!(
                err.failures(),
                &[ValidationFailure::NotOnStart {
                    name: "b".into(),
                    position: Position::new(2, 1),
                }]
            ),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn nothing_moves_before_start() {
        let mut race = Race::new(setup(), RaceConfig::default()).unwrap();
        assert!(!race.is_running());
        assert_eq!(race.advance_turn(), TurnEvent::Idle);
        assert_eq!(race.position(ParticipantId(1)), Some(Position::new(0, 0)));
        assert_eq!(race.current_participant().id(), ParticipantId(1));
    }

    #[test]
    fn start_is_ignored_while_running_and_reset_always_rebuilds() {
        let mut race = Race::new(setup(), RaceConfig::default()).unwrap();
        race.start_game();
        race.advance_turn();
        assert_eq!(race.position(ParticipantId(1)), Some(Position::new(0, 1)));

        race.start_game();
        assert_eq!(race.position(ParticipantId(1)), Some(Position::new(0, 1)));
        assert_eq!(race.current_participant().id(), ParticipantId(2));

        race.reset_game();
        assert!(race.is_running());
        assert_eq!(race.position(ParticipantId(1)), Some(Position::new(0, 0)));
        assert_eq!(race.current_participant().id(), ParticipantId(1));
        assert_eq!(race.state().turns_played(), 0);
        assert!(race.winner().is_none());
    }

    #[test]
    fn unknown_participant_ids_have_no_participant() {
        let race = Race::new(setup(), RaceConfig::default()).unwrap();
        assert!(race.participant(ParticipantId(0)).is_none());
        assert!(race.participant(ParticipantId(3)).is_none());
        assert_eq!(race.position(ParticipantId(0)), None);
        assert_eq!(race.participant(ParticipantId(2)).map(Participant::name), Some("b"));
    }

    #[test]
    fn reset_replays_random_strategies_from_their_seeds() {
        let grid = Grid::from_rows(vec![
            vec![Start, Start, Track, Track, Track],
            vec![Track, Track, Track, Track, Track],
            vec![Track, Track, Slick, Track, Track],
            vec![Track, Track, Track, Track, Track],
            vec![Finish, Finish, Finish, Finish, Finish],
        ])
        .unwrap();
        let entrants = vec![
            Entrant::new("a", Strategy::random(3), Position::new(0, 0), Direction::Center),
            Entrant::new("b", Strategy::random(11), Position::new(1, 0), Direction::Center),
        ];
        let mut race = Race::new(RaceSetup::new(grid, entrants), RaceConfig::default()).unwrap();

        race.start_game();
        let first: Vec<_> = (0..20).map(|_| race.advance_turn()).collect();
        assert_ne!(first[0], TurnEvent::Idle);

        race.reset_game();
        let replay: Vec<_> = (0..20).map(|_| race.advance_turn()).collect();
        assert_eq!(first, replay);
    }

    #[test]
    fn finished_race_can_be_started_again() {
        let mut race = Race::new(setup(), RaceConfig::default()).unwrap();
        race.start_game();
        // a coasts down one row per turn; b stays put
        race.advance_turn();
        race.advance_turn();
        assert!(matches!(race.advance_turn(), TurnEvent::Finished { .. }));
        assert_eq!(race.winner().map(Participant::name), Some("a"));
        assert!(!race.is_running());

        race.start_game();
        assert!(race.is_running());
        assert!(race.winner().is_none());
    }
}
