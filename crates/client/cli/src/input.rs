//! Line-oriented terminal input.
//!
//! [`Console`] owns the reader and writer the client talks through. It is
//! shared between the app loop (pauses, menus) and interactive entrants,
//! which reach it through [`InteractionHandler`].
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Mutex;

use race_core::{Direction, InteractionHandler};

pub struct Console<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R, W> Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&self, text: impl AsRef<str>) -> io::Result<()> {
        let mut output = self.lock_output();
        writeln!(output, "{}", text.as_ref())?;
        output.flush()
    }

    /// Writes `prompt` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. The line is returned trimmed.
    pub fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut output = self.lock_output();
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (R, W) {
        let input = self.input.into_inner().unwrap_or_else(|p| p.into_inner());
        let output = self.output.into_inner().unwrap_or_else(|p| p.into_inner());
        (input, output)
    }

    fn lock_output(&self) -> std::sync::MutexGuard<'_, W> {
        self.output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Asks until the answer names one of `choices`, by name or by number.
    fn ask_direction(&self, choices: &[Direction]) -> io::Result<Option<Direction>> {
        let menu = choices
            .iter()
            .enumerate()
            .map(|(i, direction)| format!("{}) {}", i + 1, direction))
            .collect::<Vec<_>>()
            .join("  ");
        self.say(format!("Possible moves: {menu}"))?;

        loop {
            let Some(answer) = self.ask("Direction> ")? else {
                return Ok(None);
            };
            match parse_choice(&answer, choices) {
                Some(direction) => return Ok(Some(direction)),
                None => self.say(format!("`{answer}` is not one of the possible moves."))?,
            }
        }
    }
}

impl<R, W> InteractionHandler for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn take_input(&self, choices: &[Direction]) -> Option<Direction> {
        match self.ask_direction(choices) {
            Ok(direction) => direction,
            Err(e) => {
                tracing::warn!("Failed to read a move: {}", e);
                None
            }
        }
    }
}

/// Matches a direction name (case-insensitive, `NONE` allowed) or a 1-based
/// menu number against the offered choices.
fn parse_choice(answer: &str, choices: &[Direction]) -> Option<Direction> {
    if let Ok(number) = answer.parse::<usize>() {
        return number.checked_sub(1).and_then(|i| choices.get(i)).copied();
    }

    Direction::from_str(answer)
        .ok()
        .filter(|direction| choices.contains(direction))
}
