use std::fmt;

use crate::movement::Direction;
use crate::state::{Displacement, ParticipantId, Position};

/// Why a participant left the race.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CrashReason {
    /// The path touched an off-track cell or the grid edge.
    Offtrack,
    /// The strategy found no legal direction.
    NoLegalMove,
    /// The strategy picked a destination that was off the grid or taken.
    IllegalMove,
    /// Oil pushed the participant into an occupied cell.
    Collision,
}

/// What happened during one call to `advance_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// The race was not running; nothing changed.
    Idle,
    /// The participant had already crashed.
    Skipped { participant: ParticipantId },
    Moved {
        participant: ParticipantId,
        direction: Direction,
        from: Position,
        to: Position,
        displacement: Displacement,
    },
    /// Oil stopped the participant at its inertia center.
    Slid {
        participant: ParticipantId,
        from: Position,
        to: Position,
    },
    Crashed {
        participant: ParticipantId,
        at: Option<Position>,
        reason: CrashReason,
    },
    Finished {
        participant: ParticipantId,
        at: Position,
    },
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::Idle => write!(f, "race is not running"),
            TurnEvent::Skipped { participant } => write!(f, "{participant} is out of the race"),
            TurnEvent::Moved {
                participant,
                direction,
                from,
                to,
                ..
            } => write!(f, "{participant} steers {direction}: {from} -> {to}"),
            TurnEvent::Slid {
                participant,
                from,
                to,
            } => write!(f, "{participant} slides on oil: {from} -> {to}"),
            TurnEvent::Crashed {
                participant,
                at: Some(at),
                reason,
            } => write!(f, "{participant} crashed at {at} ({reason})"),
            TurnEvent::Crashed {
                participant,
                at: None,
                reason,
            } => write!(f, "{participant} crashed ({reason})"),
            TurnEvent::Finished { participant, at } => {
                write!(f, "{participant} crossed the finish line at {at}")
            }
        }
    }
}
