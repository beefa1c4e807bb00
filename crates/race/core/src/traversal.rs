//! Path classification between two positions.
//!
//! A move may span many cells. The path is walked one cell at a time with X
//! fully resolved before Y, and the first terminal cell on it decides the
//! outcome. This is not a line rasterization: `(0,0) -> (2,2)` visits
//! `(1,0) (2,0) (2,1) (2,2)`.

use crate::grid::{CellKind, Grid};
use crate::state::Position;

/// Result of walking a path across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// No terminal cell on the path.
    Normal,
    /// A finish cell was reached at `at`; later cells were not inspected.
    Finished { at: Position },
    /// An off-track cell (or the grid edge) was reached at `at`.
    Crashed { at: Position },
}

/// Iterator over the cells visited when stepping from `from` to `to`,
/// excluding `from` and including `to`.
#[derive(Clone, Debug)]
pub struct PathSteps {
    current: Position,
    target: Position,
    step_x: i32,
    step_y: i32,
}

impl Iterator for PathSteps {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.current == self.target {
            return None;
        }

        if self.current.x != self.target.x {
            self.current.x += self.step_x;
        } else {
            self.current.y += self.step_y;
        }

        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.target.x - self.current.x).unsigned_abs() as usize
            + (self.target.y - self.current.y).unsigned_abs() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSteps {}

/// Cells visited between `from` and `to` in X-then-Y order.
pub fn path(from: Position, to: Position) -> PathSteps {
    PathSteps {
        current: from,
        target: to,
        step_x: (to.x - from.x).signum(),
        step_y: (to.y - from.y).signum(),
    }
}

/// Classifies the move from `from` to `to`.
///
/// The starting cell is never inspected, so `from == to` is always
/// [`Traversal::Normal`].
pub fn classify(grid: &Grid, from: Position, to: Position) -> Traversal {
    for step in path(from, to) {
        match grid.kind(step) {
            Some(CellKind::Finish) => return Traversal::Finished { at: step },
            Some(CellKind::HazardOfftrack) | None => return Traversal::Crashed { at: step },
            Some(_) => {}
        }
    }

    Traversal::Normal
}
