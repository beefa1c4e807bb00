//! Rectangular race track made of typed cells.
//!
//! The grid's shape and terrain are fixed once built. The only mutable part is
//! cell occupancy, which is crate-private so that it can only change together
//! with the race state's position map.

use crate::state::{ParticipantId, Position};

/// Terrain of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CellKind {
    Track,
    Start,
    Finish,
    HazardOfftrack,
    /// Oil. A participant whose inertia carries it onto a slick cell stops there.
    Slick,
}

impl CellKind {
    /// Terrain that ends a move as soon as the path touches it.
    pub fn is_terminal(self) -> bool {
        matches!(self, CellKind::Finish | CellKind::HazardOfftrack)
    }
}

/// A cell of the grid: terrain plus at most one occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    occupant: Option<ParticipantId>,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            occupant: None,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn occupant(&self) -> Option<ParticipantId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Errors raised while building a grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("grid of {width}x{height} needs {expected} cells, got {actual}")]
    CellCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Fixed-size 2D array of cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from row-major terrain kinds.
    pub fn new(width: u32, height: u32, kinds: Vec<CellKind>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }

        let expected = width as usize * height as usize;
        if kinds.len() != expected {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected,
                actual: kinds.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells: kinds.into_iter().map(Cell::new).collect(),
        })
    }

    /// Builds a grid from rows of equal length; row 0 is `y = 0`.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        Self::new(
            width as u32,
            height as u32,
            rows.into_iter().flatten().collect(),
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Bounds-checked cell lookup.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    pub fn kind(&self, position: Position) -> Option<CellKind> {
        self.cell(position).map(Cell::kind)
    }

    pub fn occupant(&self, position: Position) -> Option<ParticipantId> {
        self.cell(position).and_then(Cell::occupant)
    }

    /// Iterates every cell together with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, cell)
        })
    }

    /// Positions of every cell of the given kind, row by row.
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.kind() == kind)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn count_of(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    /// Places `participant` on the cell. Returns false if the position is off
    /// the grid or already held by someone else.
    pub(crate) fn occupy(&mut self, position: Position, participant: ParticipantId) -> bool {
        let Some(index) = self.index_of(position) else {
            return false;
        };

        match self.cells[index].occupant {
            Some(current) if current != participant => false,
            _ => {
                self.cells[index].occupant = Some(participant);
                true
            }
        }
    }

    /// Clears the cell if `participant` holds it. Returns whether anything changed.
    pub(crate) fn release(&mut self, position: Position, participant: ParticipantId) -> bool {
        let Some(index) = self.index_of(position) else {
            return false;
        };

        if self.cells[index].occupant == Some(participant) {
            self.cells[index].occupant = None;
            true
        } else {
            false
        }
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}
