use std::fmt;
use std::sync::Arc;

use super::{MoveChoice, legal_directions};
use crate::grid::Grid;
use crate::movement::Direction;
use crate::state::{Displacement, Position};

/// Source of human move choices (terminal prompt, GUI dialog, test script).
///
/// Implementations may block until the user answers. Returning `None` means
/// the user gave up (e.g. input was closed); the move is forfeited.
pub trait InteractionHandler: Send + Sync {
    fn take_input(&self, choices: &[Direction]) -> Option<Direction>;
}

/// Offers the legal directions to an [`InteractionHandler`].
#[derive(Clone)]
pub struct InteractiveStrategy {
    handler: Arc<dyn InteractionHandler>,
}

impl InteractiveStrategy {
    pub fn new(handler: Arc<dyn InteractionHandler>) -> Self {
        Self { handler }
    }

    pub(crate) fn choose(&self, grid: &Grid, last: Displacement, position: Position) -> MoveChoice {
        let choices = legal_directions(grid, last, position);
        if choices.is_empty() {
            return MoveChoice::NoLegalMove;
        }

        self.handler
            .take_input(&choices)
            .filter(|direction| choices.contains(direction))
            .into()
    }
}

impl fmt::Debug for InteractiveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveStrategy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::grid::CellKind::*;

    struct Scripted {
        answers: Mutex<Vec<Option<Direction>>>,
        offered: Mutex<Vec<Vec<Direction>>>,
    }

    impl InteractionHandler for Scripted {
        fn take_input(&self, choices: &[Direction]) -> Option<Direction> {
            self.offered.lock().unwrap().push(choices.to_vec());
            self.answers.lock().unwrap().pop().flatten()
        }
    }

    #[test]
    fn forwards_the_handler_answer_and_rejects_illegal_ones() {
        let grid = Grid::from_rows(vec![vec![Start, Track]]).unwrap();
        let handler = Arc::new(Scripted {
            // popped from the back
            answers: Mutex::new(vec![None, Some(Direction::Left), Some(Direction::Right)]),
            offered: Mutex::new(Vec::new()),
        });
        let strategy = InteractiveStrategy::new(handler.clone());

        let choose = || strategy.choose(&grid, Displacement::ZERO, Position::ORIGIN);
        assert_eq!(choose(), MoveChoice::Direction(Direction::Right));
        assert_eq!(choose(), MoveChoice::NoLegalMove);
        assert_eq!(choose(), MoveChoice::NoLegalMove);

        let offered = handler.offered.lock().unwrap();
        assert_eq!(offered[0], vec![Direction::Right, Direction::Center]);
    }

    #[test]
    fn handler_is_not_consulted_without_legal_moves() {
        let grid = Grid::from_rows(vec![vec![Start]]).unwrap();
        let handler = Arc::new(Scripted {
            answers: Mutex::new(vec![Some(Direction::Center)]),
            offered: Mutex::new(Vec::new()),
        });
        let strategy = InteractiveStrategy::new(handler.clone());

        assert_eq!(
            strategy.choose(&grid, Displacement::new(1, 0), Position::ORIGIN),
            MoveChoice::NoLegalMove
        );
        assert!(handler.offered.lock().unwrap().is_empty());
    }
}
