//! Human oracle: a person holding the hidden code types the feedback

use super::{Oracle, OracleError, Response};
use crate::core::{Code, Evaluation};
use std::io::{BufRead, Write};

/// Oracle that prints each guess and reads the peg counts from a terminal
///
/// Accepted answers: `B` or `B W` (black, optionally white), `q` to abort.
pub struct ConsoleOracle<R, W> {
    input: R,
    output: W,
    length: usize,
    guess_count: usize,
}

impl<R: BufRead, W: Write> ConsoleOracle<R, W> {
    pub const fn new(input: R, output: W, length: usize) -> Self {
        Self {
            input,
            output,
            length,
            guess_count: 0,
        }
    }

    /// Parse a feedback line; `None` means the line is not valid feedback
    fn parse_feedback(&self, line: &str) -> Option<Evaluation> {
        let mut parts = line.split_whitespace().map(str::parse::<usize>);
        let black = parts.next()?.ok()?;
        let white = match parts.next() {
            Some(value) => value.ok()?,
            None => 0,
        };
        if parts.next().is_some() || black + white > self.length {
            return None;
        }
        Some(Evaluation::new(black, white))
    }
}

impl<R: BufRead, W: Write> Oracle for ConsoleOracle<R, W> {
    fn length(&self) -> usize {
        self.length
    }

    fn submit(&mut self, guess: &Code) -> Result<Response, OracleError> {
        guess.check_guess(self.length)?;
        let shown: Vec<String> = guess
            .symbols()
            .iter()
            .map(|&s| if s == 0 { "·".to_string() } else { s.to_string() })
            .collect();

        writeln!(self.output, "\nGuess #{}: {}", self.guess_count + 1, shown.join(" "))?;

        loop {
            write!(self.output, "Black pegs (and optionally white): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(OracleError::InputClosed);
            }

            let line = line.trim();
            if matches!(line, "q" | "quit" | "exit") {
                return Err(OracleError::Aborted);
            }

            if let Some(evaluation) = self.parse_feedback(line) {
                self.guess_count += 1;
                return Ok(Response {
                    evaluation,
                    guess_count: self.guess_count,
                });
            }
            writeln!(
                self.output,
                "❌ Enter a black count between 0 and {} (e.g. '2' or '2 1')",
                self.length
            )?;
        }
    }
}
