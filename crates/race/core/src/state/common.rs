use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Stable per-race identifier for a participant.
///
/// Identifiers are 1-based turn indices: the first participant in turn order
/// is `#1`. They never change for the lifetime of a race, including across
/// resets, so presentation layers can use them as labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Builds the identifier for the participant at `index` in turn order.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Zero-based position of this participant in turn order, or `None` for
    /// the unused id `#0`.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self.0.checked_sub(1) {
            Some(index) => Some(index as usize),
            None => None,
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Displacement> for Position {
    type Output = Position;

    fn add(self, rhs: Displacement) -> Position {
        Position::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub for Position {
    type Output = Displacement;

    fn sub(self, rhs: Position) -> Displacement {
        Displacement::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One-turn change in position. A participant keeps its last displacement
/// between turns; that retained value is its inertia.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:+}, {:+}>", self.dx, self.dy)
    }
}

impl Add for Displacement {
    type Output = Displacement;

    fn add(self, rhs: Displacement) -> Displacement {
        Displacement::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Neg for Displacement {
    type Output = Displacement;

    fn neg(self) -> Displacement {
        Displacement::new(-self.dx, -self.dy)
    }
}
