//! Settings validation rules.
//!
//! Rules cascade conditionally: a rule only runs once its preconditions
//! passed, so a missing board reports exactly one violation and an
//! undersized board never produces position noise. Independent rules are
//! never short-circuited against each other; everything that fails within
//! an active rule group is collected.
//!
//! Rule order, and therefore violation order:
//!
//! 1. board present; rows ≥ 2 and columns ≥ 2 (each reported on its own)
//! 2. starting and exit positions present
//! 3. starting tile present and inside the board; direction present
//! 4. exit tile present → inside the board → on the edge (stop at the
//!    first failure of the three)
//! 5. with both tiles present: start ≠ exit, then each mine in list order
//!    against start, exit, and the board bounds (every failure collected,
//!    so one mine can yield several violations)

use crate::core::{Board, GameSettings, Tile};

use super::report::{ValidationReport, Violation};

/// Rule-based validator for [`GameSettings`].
///
/// Produces a [`ValidationReport`]; it never panics on malformed input.
/// Absence of the settings value as a whole is not this type's concern;
/// the game constructor signals that separately.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettingsValidator;

impl SettingsValidator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run every applicable rule and collect the violations.
    #[must_use]
    pub fn validate(&self, settings: &GameSettings) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(board) = settings.board else {
            report.push(Violation::MissingBoard);
            return report;
        };

        if board.rows < 2 {
            report.push(Violation::BoardRowsTooSmall);
        }
        if board.columns < 2 {
            report.push(Violation::BoardColumnsTooSmall);
        }
        if board.rows < 2 || board.columns < 2 {
            return report;
        }

        let start = settings.starting_position.as_ref();
        let exit = settings.exit_position.as_ref();

        if start.is_none() {
            report.push(Violation::MissingStartingPosition);
        }
        if exit.is_none() {
            report.push(Violation::MissingExitPosition);
        }

        if let Some(start) = start {
            match start.tile {
                None => report.push(Violation::MissingStartTile),
                Some(tile) if !board.contains(tile) => {
                    report.push(Violation::StartTileOutsideBoard);
                }
                Some(_) => {}
            }
            if start.direction.is_none() {
                report.push(Violation::MissingDirection);
            }
        }

        if let Some(exit) = exit {
            // The three exit tile rules stop at the first failure.
            match exit.tile {
                None => report.push(Violation::MissingExitTile),
                Some(tile) if !board.contains(tile) => {
                    report.push(Violation::ExitTileOutsideBoard);
                }
                Some(tile) if !board.is_edge(tile) => report.push(Violation::ExitNotOnEdge),
                Some(_) => {}
            }
        }

        let start_tile = start.and_then(|start| start.tile);
        let exit_tile = exit.and_then(|exit| exit.tile);
        if let (Some(start_tile), Some(exit_tile)) = (start_tile, exit_tile) {
            if start_tile == exit_tile {
                report.push(Violation::StartEqualsExit);
            }
            for &mine in settings.mines() {
                check_mine(&mut report, board, mine, start_tile, exit_tile);
            }
        }

        report
    }
}

/// All three mine rules run for every mine; a mine sitting on both the start
/// and the exit tile yields both messages.
fn check_mine(
    report: &mut ValidationReport,
    board: Board,
    mine: Tile,
    start_tile: Tile,
    exit_tile: Tile,
) {
    if mine == start_tile {
        report.push(Violation::MineOnStart);
    }
    if mine == exit_tile {
        report.push(Violation::MineOnExit);
    }
    if !board.contains(mine) {
        report.push(Violation::MineOutsideBoard);
    }
}
