use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{MoveChoice, legal_directions};
use crate::grid::Grid;
use crate::state::{Displacement, Position};

/// Picks uniformly among the legal directions.
///
/// The generator is seeded explicitly so a race can be replayed: cloning a
/// fresh strategy (as a reset does) restarts the same sequence.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    seed: u64,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn choose(
        &mut self,
        grid: &Grid,
        last: Displacement,
        position: Position,
    ) -> MoveChoice {
        let choices = legal_directions(grid, last, position);
        choices.choose(&mut self.rng).copied().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind::*;

    #[test]
    fn same_seed_replays_the_same_choices() {
        let grid = Grid::from_rows(vec![vec![Track; 5]; 5]).unwrap();
        let center = Position::new(2, 2);

        let mut first = RandomStrategy::seeded(42);
        let mut second = first.clone();

        for _ in 0..16 {
            assert_eq!(
                first.choose(&grid, Displacement::ZERO, center),
                second.choose(&grid, Displacement::ZERO, center)
            );
        }
        assert_eq!(first.seed(), 42);
    }

    #[test]
    fn only_legal_directions_are_chosen() {
        // 1x2 strip: from (0,0) only CENTER and RIGHT stay on the grid.
        let grid = Grid::from_rows(vec![vec![Start, Track]]).unwrap();
        let mut strategy = RandomStrategy::seeded(3);

        for _ in 0..32 {
            match strategy.choose(&grid, Displacement::ZERO, Position::ORIGIN) {
                MoveChoice::Direction(direction) => {
                    assert!(matches!(
                        direction,
                        crate::Direction::Center | crate::Direction::Right
                    ))
                }
                MoveChoice::NoLegalMove => panic!("two moves are available"),
            }
        }
    }
}
