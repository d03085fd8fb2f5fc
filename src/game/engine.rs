//! The simulation engine.
//!
//! A [`Game`] is constructed once from validated settings and then run once
//! per action sequence, in file order. Construction is the validation gate:
//! absent settings and rule violations are both rejected here, and a
//! successfully constructed engine can run any action slice without failing.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::core::{Action, Board, Direction, GameSettings, Tile};
use crate::validate::{SettingsValidator, ValidationReport};

use super::outcome::{Outcome, SequenceReport};
use super::turtle::Turtle;

/// Why an engine could not be constructed.
#[derive(Debug, Error)]
pub enum GameError {
    /// No settings value at all, distinct from a value that breaks rules.
    #[error("Settings file is empty.")]
    EmptySettings,

    /// The settings broke one or more rules; the report lists every one.
    #[error("Game Settings file is invalid:\n{0}")]
    InvalidSettings(ValidationReport),
}

/// The turtle simulation engine.
///
/// Holds the immutable game setup plus the running sequence ordinal. Each
/// [`run`](Game::run) starts a fresh turtle at the configured start tile and
/// heading; no turtle state carries over between sequences, and the ordinal
/// advances by exactly one per call whatever the outcome.
///
/// The engine is strictly sequential: `run` takes `&mut self` and there is
/// no internal locking. Callers that want cross-thread use must own the
/// ordinal themselves; this type does not support it.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    start_tile: Tile,
    start_heading: Direction,
    exit_tile: Tile,
    mines: FxHashSet<Tile>,
    next_ordinal: u32,
}

impl Game {
    /// Validate the settings and build an engine from them.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptySettings`] when `settings` is `None`, and
    /// [`GameError::InvalidSettings`] carrying the full violation report
    /// when any rule fails.
    pub fn new(settings: Option<GameSettings>) -> Result<Self, GameError> {
        let Some(settings) = settings else {
            return Err(GameError::EmptySettings);
        };

        let report = SettingsValidator::new().validate(&settings);
        if !report.is_valid() {
            return Err(GameError::InvalidSettings(report));
        }

        let (Some(board), Some(start), Some(exit)) = (
            settings.board,
            settings.starting_position,
            settings.exit_position,
        ) else {
            unreachable!("a clean report guarantees board and both positions");
        };
        let (Some(start_tile), Some(start_heading), Some(exit_tile)) =
            (start.tile, start.direction, exit.tile)
        else {
            unreachable!("a clean report guarantees tiles and heading");
        };

        let mines: FxHashSet<Tile> = settings.mines().iter().copied().collect();
        debug!(%board, %start_tile, %exit_tile, mines = mines.len(), "game constructed");

        Ok(Self {
            board,
            start_tile,
            start_heading,
            exit_tile,
            mines,
            next_ordinal: 1,
        })
    }

    /// The board this game is played on.
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    /// Run one action sequence to its outcome.
    ///
    /// The sequence stops at the first move that hits a mine, reaches the
    /// exit, or falls off the edge; turns never end a sequence. A sequence
    /// exhausted without a terminal event is still in danger.
    pub fn run(&mut self, actions: &[Action]) -> SequenceReport {
        let mut turtle = Turtle::new(self.start_tile, self.start_heading);
        let mut outcome = Outcome::StillInDanger;

        for &action in actions {
            match action {
                Action::Turn => turtle.turn(),
                Action::Move => {
                    turtle.advance();
                    outcome = self.assess(&turtle);
                    if outcome.is_terminal() {
                        break;
                    }
                }
            }
        }

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        debug!(ordinal, outcome = %outcome, "sequence finished");
        SequenceReport::new(ordinal, outcome)
    }

    /// Outcome policy after a move, first match wins: mine, exit, edge.
    fn assess(&self, turtle: &Turtle) -> Outcome {
        let position = turtle.position();

        if self.mines.contains(&position) {
            return Outcome::MineHit;
        }
        if position == self.exit_tile {
            return Outcome::Success;
        }
        if self.fell_off(turtle) {
            return Outcome::FellOffEdge;
        }
        Outcome::StillInDanger
    }

    /// Out-of-bounds is only detected along the travel axis. The far-edge
    /// thresholds compare X against `rows` and Y against `columns`.
    fn fell_off(&self, turtle: &Turtle) -> bool {
        let position = turtle.position();
        match turtle.heading() {
            Direction::West => position.x < 0,
            Direction::North => position.y < 0,
            Direction::East => position.x == self.board.rows + 1,
            Direction::South => position.y == self.board.columns + 1,
        }
    }
}
