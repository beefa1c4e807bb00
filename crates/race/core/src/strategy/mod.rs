//! Move-choice capabilities consumed by the turn engine.
//!
//! A strategy looks at the grid, the participant's retained displacement and
//! its position, and either picks a [`Direction`] or reports that no legal
//! move exists. The set of strategies is closed: random, interactive and
//! fixed.

mod interactive;
mod random;

pub use interactive::{InteractionHandler, InteractiveStrategy};
pub use random::RandomStrategy;

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::movement::{self, Direction};
use crate::state::{Displacement, Position};

/// Every direction is a candidate, so nine slots always suffice.
pub type LegalDirections = ArrayVec<Direction, 9>;

/// What a strategy decided for this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    Direction(Direction),
    /// Every candidate around the inertia center is off the grid or taken.
    NoLegalMove,
}

impl From<Option<Direction>> for MoveChoice {
    fn from(choice: Option<Direction>) -> Self {
        choice.map_or(MoveChoice::NoLegalMove, MoveChoice::Direction)
    }
}

/// Whether a participant standing on `position` may end its move on `target`.
///
/// The target must be on the grid and either empty or held by the mover
/// itself (the occupant of `position`).
pub fn is_legal_target(grid: &Grid, position: Position, target: Position) -> bool {
    if !grid.contains(target) {
        return false;
    }

    match grid.occupant(target) {
        None => true,
        Some(occupant) => grid.occupant(position) == Some(occupant),
    }
}

/// Directions whose destination is a legal target, in [`Direction::ALL`] order.
pub fn legal_directions(grid: &Grid, last: Displacement, position: Position) -> LegalDirections {
    Direction::ALL
        .into_iter()
        .filter(|&direction| {
            is_legal_target(
                grid,
                position,
                movement::next_position(position, last, direction),
            )
        })
        .collect()
}

/// Closed set of move-choice strategies.
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Uniformly random among the legal directions.
    Random(RandomStrategy),
    /// Delegates the pick to an [`InteractionHandler`].
    Interactive(InteractiveStrategy),
    /// Always the same direction, as long as it stays legal.
    Fixed(Direction),
}

impl Strategy {
    pub fn random(seed: u64) -> Self {
        Strategy::Random(RandomStrategy::seeded(seed))
    }

    pub fn interactive(handler: Arc<dyn InteractionHandler>) -> Self {
        Strategy::Interactive(InteractiveStrategy::new(handler))
    }

    pub fn fixed(direction: Direction) -> Self {
        Strategy::Fixed(direction)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random(_) => "DUMB",
            Strategy::Interactive(_) => "INTERACTIVE",
            Strategy::Fixed(_) => "FIXED",
        }
    }

    /// Picks this turn's direction for a participant at `position`.
    pub fn choose_direction(
        &mut self,
        grid: &Grid,
        last: Displacement,
        position: Position,
    ) -> MoveChoice {
        match self {
            Strategy::Random(strategy) => strategy.choose(grid, last, position),
            Strategy::Interactive(strategy) => strategy.choose(grid, last, position),
            Strategy::Fixed(direction) => {
                let target = movement::next_position(position, last, *direction);
                if is_legal_target(grid, position, target) {
                    MoveChoice::Direction(*direction)
                } else {
                    MoveChoice::NoLegalMove
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind::*;
    use crate::state::ParticipantId;

    fn open_grid() -> Grid {
        Grid::from_rows(vec![
            vec![Start, Start, Track],
            vec![Track, Track, Track],
            vec![Finish, Finish, Finish],
        ])
        .unwrap()
    }

    #[test]
    fn own_cell_counts_as_free() {
        let mut grid = open_grid();
        let here = Position::new(0, 0);
        assert!(grid.occupy(here, ParticipantId(1)));

        let legal = legal_directions(&grid, Displacement::ZERO, here);
        assert!(legal.contains(&Direction::Center));
        assert!(legal.contains(&Direction::Right));
        assert!(legal.contains(&Direction::DownRight));
        assert!(!legal.contains(&Direction::Up));
        assert_eq!(legal.len(), 4);
    }

    #[test]
    fn cells_held_by_others_are_illegal() {
        let mut grid = open_grid();
        let here = Position::new(0, 0);
        assert!(grid.occupy(here, ParticipantId(1)));
        assert!(grid.occupy(Position::new(1, 0), ParticipantId(2)));

        let legal = legal_directions(&grid, Displacement::ZERO, here);
        assert!(!legal.contains(&Direction::Right));
        assert_eq!(legal.len(), 3);
    }

    #[test]
    fn nothing_is_legal_when_inertia_leaves_the_grid() {
        let grid = open_grid();
        let legal = legal_directions(&grid, Displacement::new(5, 0), Position::ORIGIN);
        assert!(legal.is_empty());

        let mut strategy = Strategy::random(7);
        assert_eq!(
            strategy.choose_direction(&grid, Displacement::new(5, 0), Position::ORIGIN),
            MoveChoice::NoLegalMove
        );
    }

    #[test]
    fn fixed_strategy_gives_up_when_its_direction_is_illegal() {
        let grid = open_grid();
        let mut down = Strategy::fixed(Direction::Down);
        assert_eq!(
            down.choose_direction(&grid, Displacement::ZERO, Position::ORIGIN),
            MoveChoice::Direction(Direction::Down)
        );

        let mut up = Strategy::fixed(Direction::Up);
        assert_eq!(
            up.choose_direction(&grid, Displacement::ZERO, Position::ORIGIN),
            MoveChoice::NoLegalMove
        );
    }

    #[test]
    fn names_match_track_file_keywords() {
        assert_eq!(Strategy::random(1).name(), "DUMB");
        assert_eq!(Strategy::fixed(Direction::Center).name(), "FIXED");
    }
}
