//! Glue code tying content loading, the race and the console together.
use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use race_content::{ContentFactory, TrackOptions};
use race_core::{InteractionHandler, Race};

use crate::config::CliConfig;
use crate::input::Console;
use crate::presentation::{describe, label, outcome, render_grid, roster};

/// How a single race ended from the client's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RaceEnd {
    /// The race stopped on its own: a winner, or everybody crashed.
    Over,
    TurnLimit,
    /// The user quit or input was closed.
    Quit,
}

pub struct RaceApp<R, W> {
    config: CliConfig,
    factory: ContentFactory,
    console: Arc<Console<R, W>>,
}

impl<R, W> RaceApp<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    pub fn new(config: CliConfig, console: Console<R, W>) -> Self {
        let factory = ContentFactory::new(config.resolve_data_dir());
        Self {
            config,
            factory,
            console: Arc::new(console),
        }
    }

    /// Runs races on `track` (or a track picked from the menu) until the
    /// user stops asking for another one.
    pub fn run(&self, track: Option<&str>) -> Result<()> {
        tracing::info!(data_dir = %self.factory.data_dir().display(), "CLI client starting...");

        let track = match track {
            Some(track) => track.to_owned(),
            None => match self.choose_track()? {
                Some(track) => track,
                None => return Ok(()),
            },
        };

        let mut race = self.load_race(&track)?;
        self.console.say(format!("Track: {track}"))?;
        race.start_game();

        loop {
            let end = self.play(&mut race)?;
            match end {
                RaceEnd::Over => {}
                RaceEnd::TurnLimit => self.console.say(format!(
                    "Turn limit of {} reached.",
                    self.config.max_turns.unwrap_or_default()
                ))?,
                RaceEnd::Quit => {
                    self.console.say("Race abandoned.")?;
                    return Ok(());
                }
            }
            self.console.say(outcome(&race))?;
            tracing::info!(winner = ?race.winner().map(|p| p.id()), ?end, "race ended");

            match self.console.ask("Race again? [y/N] ")? {
                Some(answer) if is_yes(&answer) => race.reset_game(),
                _ => return Ok(()),
            }
        }
    }

    fn play(&self, race: &mut Race) -> Result<RaceEnd> {
        for line in roster(race) {
            self.console.say(line)?;
        }

        let mut turns = 0u64;
        while race.is_running() {
            if let Some(max_turns) = self.config.max_turns
                && turns >= max_turns
            {
                return Ok(RaceEnd::TurnLimit);
            }

            self.console.say(render_grid(race.grid()))?;
            let current = race.current_participant();
            if current.has_crashed() {
                self.console.say(format!("{} has crashed.", label(current)))?;
            } else {
                self.console.say(format!("{}'s turn.", label(current)))?;
            }

            if !self.config.auto_advance {
                match self.console.ask("Press Enter to play the turn (q to quit) ")? {
                    Some(answer) if !answer.eq_ignore_ascii_case("q") => {}
                    _ => return Ok(RaceEnd::Quit),
                }
            }

            let event = race.advance_turn();
            self.console.say(describe(race, &event))?;
            turns += 1;
        }

        self.console.say(render_grid(race.grid()))?;
        Ok(RaceEnd::Over)
    }

    /// Lists the tracks and reads a choice by number or name.
    fn choose_track(&self) -> Result<Option<String>> {
        let tracks = self.factory.list_tracks()?;
        if tracks.is_empty() {
            anyhow::bail!(
                "No tracks found in {}",
                self.factory.tracks_dir().display()
            );
        }

        self.console.say("Available tracks:")?;
        for (i, track) in tracks.iter().enumerate() {
            self.console.say(format!("  {}) {}", i + 1, track))?;
        }

        loop {
            let Some(answer) = self.console.ask("Track> ")? else {
                return Ok(None);
            };
            let choice = match answer.parse::<usize>() {
                Ok(number) => number.checked_sub(1).and_then(|i| tracks.get(i)),
                Err(_) => tracks.iter().find(|track| **track == answer),
            };
            match choice {
                Some(track) => return Ok(Some(track.clone())),
                None => self.console.say(format!("No track named `{answer}`."))?,
            }
        }
    }

    fn load_race(&self, track: &str) -> Result<Race> {
        let interaction: Arc<dyn InteractionHandler> = self.console.clone();
        let options = TrackOptions {
            seed: self.config.seed,
            interaction: Some(interaction),
        };

        let config = self.factory.load_config()?;
        let setup = self.factory.load_track(track, &options)?;
        let race = Race::new(setup, config)
            .with_context(|| format!("Track `{track}` cannot be raced"))?;

        Ok(race)
    }
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use super::*;

    type TestApp = RaceApp<Cursor<Vec<u8>>, Vec<u8>>;

    fn app(data_dir: &std::path::Path, input: &str, config: CliConfig) -> TestApp {
        let config = CliConfig {
            data_dir: Some(data_dir.to_path_buf()),
            ..config
        };
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        RaceApp::new(config, console)
    }

    fn output(app: TestApp) -> String {
        let console = Arc::try_unwrap(app.console).ok().unwrap();
        let (_, output) = console.into_parts();
        String::from_utf8(output).unwrap()
    }

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let tracks = dir.path().join("tracks");
        fs::create_dir(&tracks).unwrap();
        fs::write(
            tracks.join("drop.txt"),
            "ANN 0 0 FIXED:CENTER DOWN\nTRACK\nS\nR\nE\n",
        )
        .unwrap();
        fs::write(
            tracks.join("wall.txt"),
            "BOB 0 0 FIXED:CENTER RIGHT\nTRACK\nSX\nEE\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn auto_race_reports_the_winner_and_replays_on_request() {
        let dir = data_dir();
        let config = CliConfig {
            auto_advance: true,
            ..CliConfig::default()
        };
        let app = app(dir.path(), "yes\nno\n", config);
        app.run(Some("drop")).unwrap();

        let text = output(app);
        assert_eq!(text.matches("The winner is ANN (#1)!").count(), 2);
        assert!(text.contains("ANN (#1) crosses the finish line at (0, 2)!"));
        assert!(text.contains("+-+\n|1|\n| |\n|@|\n+-+"));
    }

    #[test]
    fn menu_choice_and_pauses() {
        let dir = data_dir();
        let app = app(dir.path(), "nope\n2\n\n", CliConfig::default());
        app.run(None).unwrap();

        let text = output(app);
        assert!(text.contains("  1) drop\n  2) wall\n"));
        assert!(text.contains("No track named `nope`."));
        assert!(text.contains("BOB (#1) crashed at (1, 0) (offtrack)."));
        assert!(text.contains("Nobody won."));
    }

    #[test]
    fn closed_input_abandons_the_race() {
        let dir = data_dir();
        let app = app(dir.path(), "", CliConfig::default());
        app.run(Some("drop")).unwrap();

        let text = output(app);
        assert!(text.contains("ANN (#1)'s turn."));
        assert!(text.ends_with("Race abandoned.\n"));
    }

    #[test]
    fn turn_limit_stops_a_race() {
        let dir = data_dir();
        let config = CliConfig {
            auto_advance: true,
            max_turns: Some(1),
            ..CliConfig::default()
        };
        let app = app(dir.path(), "", config);
        app.run(Some("drop")).unwrap();

        let text = output(app);
        assert!(text.contains("Turn limit of 1 reached."));
        assert!(text.contains("Nobody won."));
    }

    #[test]
    fn unknown_tracks_are_errors() {
        let dir = data_dir();
        let app = app(dir.path(), "", CliConfig::default());
        let err = app.run(Some("missing")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}
