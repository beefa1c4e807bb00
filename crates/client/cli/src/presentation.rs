//! Text rendering of the race for the terminal.
use race_core::{CellKind, Grid, Participant, ParticipantId, Race, TurnEvent};

/// Glyph for an empty cell.
pub fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Finish => '@',
        CellKind::HazardOfftrack => 'X',
        CellKind::Slick => 'O',
        CellKind::Start => '.',
        CellKind::Track => ' ',
    }
}

/// Single-character label of an occupant: the last digit of its id.
pub fn occupant_glyph(id: ParticipantId) -> char {
    char::from_digit(id.0 % 10, 10).unwrap_or('?')
}

/// Draws the grid with a frame, one text line per row.
pub fn render_grid(grid: &Grid) -> String {
    let width = grid.width() as usize;
    let border = format!("+{}+", "-".repeat(width));

    let mut out = String::with_capacity((width + 3) * (grid.height() as usize + 2));
    out.push_str(&border);
    for (position, cell) in grid.cells() {
        if position.x == 0 {
            out.push_str("\n|");
        }
        out.push(cell.occupant().map_or(glyph(cell.kind()), occupant_glyph));
        if position.x as usize == width - 1 {
            out.push('|');
        }
    }
    out.push('\n');
    out.push_str(&border);
    out
}

pub fn label(participant: &Participant) -> String {
    format!("{} ({})", participant.name(), participant.id())
}

fn label_of(race: &Race, id: ParticipantId) -> String {
    race.participant(id)
        .map(label)
        .unwrap_or_else(|| id.to_string())
}

/// Roster line per participant: label, strategy, and where it stands.
pub fn roster(race: &Race) -> Vec<String> {
    race.participants()
        .iter()
        .map(|participant| {
            let status = match race.position(participant.id()) {
                Some(position) => format!("at {}", position),
                None => "crashed".to_owned(),
            };
            format!(
                "{}  {:<11} {}  speed {}",
                label(participant),
                participant.strategy().name(),
                status,
                participant.last_displacement()
            )
        })
        .collect()
}

/// One human-readable sentence for a turn event.
pub fn describe(race: &Race, event: &TurnEvent) -> String {
    let who = |id| label_of(race, id);
    match *event {
        TurnEvent::Idle => "The race is over.".to_owned(),
        TurnEvent::Skipped { participant } => {
            format!("{} has crashed and sits this turn out.", who(participant))
        }
        TurnEvent::Moved {
            participant,
            direction,
            to,
            displacement,
            ..
        } => format!(
            "{} steers {} and moves to {} with speed {}.",
            who(participant),
            direction,
            to,
            displacement
        ),
        TurnEvent::Slid { participant, to, .. } => {
            format!("{} hits oil and slides to {}.", who(participant), to)
        }
        TurnEvent::Crashed {
            participant,
            at,
            reason,
        } => match at {
            Some(at) => format!("{} crashed at {} ({}).", who(participant), at, reason),
            None => format!("{} crashed ({}).", who(participant), reason),
        },
        TurnEvent::Finished { participant, at } => {
            format!("{} crosses the finish line at {}!", who(participant), at)
        }
    }
}

/// Final line of a race.
pub fn outcome(race: &Race) -> String {
    match race.winner() {
        Some(winner) => format!("The winner is {}!", label(winner)),
        None => "Nobody won.".to_owned(),
    }
}
