//! Plain-text track format.
//!
//! A track file lists the entrants first, one per line, then a `TRACK` line,
//! then the grid one row per line:
//!
//! ```text
//! ALICE 0 0 INTERACTIVE NONE
//! BOT   1 0 DUMB        DOWN
//! TRACK
//! SSRRR
//! RRORX
//! EEEEE
//! ```
//!
//! Entrant fields are `NAME X Y STRATEGY FIRST_MOVE`. Rows shorter than the
//! widest one are padded with off-track cells. Parsing is pure; building a
//! [`RaceSetup`] additionally needs [`TrackOptions`] for the runtime parts of
//! strategies (seeds and the interaction handler).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use race_core::{
    CellKind, Direction, Entrant, Grid, GridError, InteractionHandler, Position, RaceSetup,
    RandomStrategy, Strategy,
};

/// Line that separates the entrant list from the grid.
pub const TRACK_MARKER: &str = "TRACK";

/// Errors raised while reading a track description. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: unexpected trailing field `{value}`")]
    TrailingField { line: usize, value: String },

    #[error("line {line}: `{value}` is not a valid coordinate")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: unknown strategy `{value}`")]
    UnknownStrategy { line: usize, value: String },

    #[error("line {line}: unknown direction `{value}`")]
    UnknownDirection { line: usize, value: String },

    #[error("line {line}, column {column}: unknown terrain symbol `{symbol}`")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    #[error("no `TRACK` line found")]
    MissingTrackSection,

    #[error("line {line}: the track has no rows")]
    EmptyTrack { line: usize },

    #[error("line {line}: {name} is interactive but no interaction handler is available")]
    NoInteractionHandler { line: usize, name: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Terrain kind for a track-file symbol.
pub fn cell_kind(symbol: char) -> Option<CellKind> {
    match symbol {
        'R' => Some(CellKind::Track),
        'S' => Some(CellKind::Start),
        'E' => Some(CellKind::Finish),
        'X' => Some(CellKind::HazardOfftrack),
        'O' => Some(CellKind::Slick),
        _ => None,
    }
}

/// Strategy keyword of an entrant line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategySpec {
    /// `DUMB` or `RANDOM`.
    Random,
    Interactive,
    /// `FIXED:<DIRECTION>`.
    Fixed(Direction),
}

impl FromStr for StrategySpec {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Some((keyword, direction)) = value.split_once(':') {
            if !keyword.eq_ignore_ascii_case("FIXED") {
                return Err(());
            }
            return Direction::from_str(direction)
                .map(StrategySpec::Fixed)
                .map_err(|_| ());
        }

        if value.eq_ignore_ascii_case("DUMB") || value.eq_ignore_ascii_case("RANDOM") {
            Ok(StrategySpec::Random)
        } else if value.eq_ignore_ascii_case("INTERACTIVE") {
            Ok(StrategySpec::Interactive)
        } else {
            Err(())
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::Random => write!(f, "DUMB"),
            StrategySpec::Interactive => write!(f, "INTERACTIVE"),
            StrategySpec::Fixed(direction) => write!(f, "FIXED:{direction}"),
        }
    }
}

/// One parsed entrant line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntrantSpec {
    pub line: usize,
    pub name: String,
    pub start: Position,
    pub strategy: StrategySpec,
    pub first_move: Direction,
}

/// A parsed track file: entrants in turn order and padded grid rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackDescription {
    pub entrants: Vec<EntrantSpec>,
    pub rows: Vec<Vec<CellKind>>,
}

/// Runtime inputs needed to turn strategy keywords into strategies.
#[derive(Clone, Default)]
pub struct TrackOptions {
    /// Base seed for random strategies; entrant `i` gets `seed + i`.
    /// `None` draws a fresh seed per entrant.
    pub seed: Option<u64>,
    pub interaction: Option<Arc<dyn InteractionHandler>>,
}

impl TrackOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            interaction: None,
        }
    }

    pub fn with_interaction(mut self, handler: Arc<dyn InteractionHandler>) -> Self {
        self.interaction = Some(handler);
        self
    }
}

impl fmt::Debug for TrackOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackOptions")
            .field("seed", &self.seed)
            .field("interaction", &self.interaction.is_some())
            .finish()
    }
}

impl TrackDescription {
    /// Parses the text of a track file.
    pub fn parse(text: &str) -> Result<Self, TrackError> {
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

        let mut entrants = Vec::new();
        let mut marker_line = None;
        for (number, line) in lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == TRACK_MARKER {
                marker_line = Some(number);
                break;
            }
            entrants.push(parse_entrant(number, line)?);
        }
        let marker_line = marker_line.ok_or(TrackError::MissingTrackSection)?;

        let mut rows = lines
            .map(|(number, line)| parse_row(number, line.trim_end()))
            .collect::<Result<Vec<_>, _>>()?;
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(TrackError::EmptyTrack { line: marker_line });
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellKind::HazardOfftrack);
        }

        Ok(Self { entrants, rows })
    }

    /// Builds the race inputs, instantiating each entrant's strategy.
    pub fn into_setup(self, options: &TrackOptions) -> Result<RaceSetup, TrackError> {
        let grid = Grid::from_rows(self.rows)?;

        let entrants = self
            .entrants
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let strategy = match spec.strategy {
                    StrategySpec::Random => Strategy::Random(match options.seed {
                        Some(seed) => RandomStrategy::seeded(seed.wrapping_add(index as u64)),
                        None => RandomStrategy::from_entropy(),
                    }),
                    StrategySpec::Interactive => match &options.interaction {
                        Some(handler) => Strategy::interactive(Arc::clone(handler)),
                        None => {
                            return Err(TrackError::NoInteractionHandler {
                                line: spec.line,
                                name: spec.name,
                            });
                        }
                    },
                    StrategySpec::Fixed(direction) => Strategy::fixed(direction),
                };
                Ok(Entrant::new(spec.name, strategy, spec.start, spec.first_move))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RaceSetup::new(grid, entrants))
    }
}

fn parse_entrant(line: usize, text: &str) -> Result<EntrantSpec, TrackError> {
    let mut fields = text.split_whitespace();
    let mut next = |field: &'static str| {
        fields.next().ok_or(TrackError::MissingField { line, field })
    };

    let name = next("name")?.to_owned();
    let x = parse_coordinate(line, next("x coordinate")?)?;
    let y = parse_coordinate(line, next("y coordinate")?)?;

    let strategy = next("strategy")?;
    let strategy = strategy
        .parse::<StrategySpec>()
        .map_err(|()| TrackError::UnknownStrategy {
            line,
            value: strategy.to_owned(),
        })?;

    let first_move = next("first move")?;
    let first_move = Direction::from_str(first_move).map_err(|_| TrackError::UnknownDirection {
        line,
        value: first_move.to_owned(),
    })?;

    if let Some(extra) = fields.next() {
        return Err(TrackError::TrailingField {
            line,
            value: extra.to_owned(),
        });
    }

    Ok(EntrantSpec {
        line,
        name,
        start: Position::new(x, y),
        strategy,
        first_move,
    })
}

fn parse_coordinate(line: usize, value: &str) -> Result<i32, TrackError> {
    value.parse().map_err(|_| TrackError::InvalidCoordinate {
        line,
        value: value.to_owned(),
    })
}

fn parse_row(line: usize, text: &str) -> Result<Vec<CellKind>, TrackError> {
    text.chars()
        .enumerate()
        .map(|(i, symbol)| {
            cell_kind(symbol).ok_or(TrackError::UnknownSymbol {
                line,
                column: i + 1,
                symbol,
            })
        })
        .collect()
}
