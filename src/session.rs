//! The interactive part: collects the white piece and the black pieces line by
//! line, then reports which black pieces can be captured.
//!
//! [`Session::run`] goes through the phases strictly in order: white piece,
//! black pieces, report. Invalid input never aborts a phase, the user is told
//! what went wrong and prompted again.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::bail;
use clap::Parser;

use crate::capture::{capturable, Defenders, DuplicatePolicy, MAX_DEFENDERS};
use crate::chess::attacks::moves_for;
use crate::chess::core::Piece;

const ATTACKER_PROMPT: &str = "Enter the white piece and its position (e.g., 'pawn a5'): ";
const DEFENDER_PROMPT: &str = "Enter a black piece and its position (or 'done' to finish): ";
const FINISH: &str = "done";
const INVALID_INPUT: &str = "Your input is Invalid. Enter a valid piece and position.";
const NO_DEFENDERS: &str = "There must be at least one black piece added before finishing.";
#[allow(clippy::cast_possible_truncation)]
const DEFAULT_MAX_DEFENDERS: u8 = MAX_DEFENDERS as u8;

/// Finds the black pieces a single white pawn or rook can capture.
#[derive(Parser, Clone, Copy, Debug, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Stop collecting black pieces once this many are entered.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEFENDERS,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(DEFAULT_MAX_DEFENDERS))
    )]
    pub max_defenders: u8,
    /// Reject a black piece on an occupied square even if its kind differs.
    #[arg(long)]
    pub strict_squares: bool,
    /// Print diagnostics ("info string ...") along with the regular output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    fn duplicate_policy(self) -> DuplicatePolicy {
        if self.strict_squares {
            DuplicatePolicy::SameSquare
        } else {
            DuplicatePolicy::SamePiece
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_defenders: DEFAULT_MAX_DEFENDERS,
            strict_squares: false,
            verbose: false,
        }
    }
}

/// Connects the line source, the capture logic and the output.
pub struct Session<'a, R: BufRead, W: Write> {
    config: Config,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a new session reading from `input` and writing prompts and
    /// results to `output`.
    #[must_use]
    pub fn new(config: Config, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Runs all phases and prints the report.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and when the input ends before the white piece and
    /// at least one black piece are entered. Running out of input after that
    /// is the same as entering "done".
    pub fn run(&mut self) -> anyhow::Result<()> {
        let attacker = self.read_attacker()?;
        let defenders = self.read_defenders()?;
        self.report(attacker, &defenders)
    }

    fn read_attacker(&mut self) -> anyhow::Result<Piece> {
        loop {
            self.prompt(ATTACKER_PROMPT)?;
            let Some(line) = self.next_line()? else {
                bail!("input ended before the white piece was entered");
            };
            match Piece::try_from(line.trim()) {
                Ok(piece) => {
                    writeln!(self.output, "White piece added: {piece}")?;
                    return Ok(piece);
                },
                Err(e) => self.reject(&e)?,
            }
        }
    }

    fn read_defenders(&mut self) -> anyhow::Result<Defenders> {
        let mut defenders = Defenders::new(
            usize::from(self.config.max_defenders),
            self.config.duplicate_policy(),
        );
        while !defenders.is_full() {
            self.prompt(DEFENDER_PROMPT)?;
            let Some(line) = self.next_line()? else {
                if defenders.is_empty() {
                    bail!("input ended before any black piece was entered");
                }
                break;
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case(FINISH) {
                if defenders.is_empty() {
                    writeln!(self.output, "{NO_DEFENDERS}")?;
                    continue;
                }
                break;
            }
            match Piece::try_from(line) {
                Ok(piece) => match defenders.insert(piece) {
                    Ok(()) => writeln!(self.output, "Black piece added: {piece}")?,
                    Err(rejection) => writeln!(self.output, "{rejection}")?,
                },
                Err(e) => self.reject(&e)?,
            }
        }
        self.info(format_args!("collected {} black pieces", defenders.len()))?;
        Ok(defenders)
    }

    fn report(&mut self, attacker: Piece, defenders: &Defenders) -> anyhow::Result<()> {
        self.info(format_args!(
            "{attacker} can capture on: {}",
            moves_for(attacker.kind, attacker.square)
        ))?;
        let captured = capturable(attacker, defenders);
        if captured.is_empty() {
            writeln!(self.output, "The white piece cannot take any black pieces.")?;
            return Ok(());
        }
        writeln!(self.output, "The white piece can take these black pieces:")?;
        for piece in captured {
            writeln!(self.output, "{piece}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns the next line or [`None`] when the input is exhausted. Bytes
    /// that are not valid UTF-8 are replaced, so such a line is rejected by
    /// the parser like any other malformed input.
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&line).into_owned())),
        }
    }

    fn reject(&mut self, reason: &anyhow::Error) -> anyhow::Result<()> {
        writeln!(self.output, "{INVALID_INPUT}")?;
        self.info(format_args!("{reason}"))
    }

    fn info(&mut self, message: fmt::Arguments<'_>) -> anyhow::Result<()> {
        if self.config.verbose {
            writeln!(self.output, "info string {message}")?;
        }
        Ok(())
    }
}
