//! Violations and the collected validation report.
//!
//! Validators never fail fast on independent rules: they collect every
//! violated rule into a [`ValidationReport`] and let the caller decide what
//! to do with it. Each [`Violation`] renders as a fixed human-readable
//! message; the report joins them one per line.

use thiserror::Error;

/// One failed configuration invariant.
///
/// The display string of each variant is the exact message surfaced to the
/// user, so variants are compared in tests both by value and by rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Board should not be null.")]
    MissingBoard,

    #[error("Board rows should be greater or equal 2.")]
    BoardRowsTooSmall,

    #[error("Board columns should be greater or equal 2.")]
    BoardColumnsTooSmall,

    #[error("StartingPosition should not be null.")]
    MissingStartingPosition,

    #[error("ExitPosition should not be null.")]
    MissingExitPosition,

    #[error("StartingPosition tile should not be null.")]
    MissingStartTile,

    #[error("Property StartingPosition: Tile should be inside the board.")]
    StartTileOutsideBoard,

    #[error("Direction should not be null.")]
    MissingDirection,

    #[error("ExitPosition tile should not be null.")]
    MissingExitTile,

    #[error("Property ExitPosition: Tile should be inside the board.")]
    ExitTileOutsideBoard,

    #[error("ExitPosition should be on the edge of the board.")]
    ExitNotOnEdge,

    #[error("Starting and Exit position should not be in the same tile.")]
    StartEqualsExit,

    #[error("There is a mine on starting position.")]
    MineOnStart,

    #[error("There is a mine on exit position.")]
    MineOnExit,

    #[error("Some of the mines are invalid.")]
    MineOutsideBoard,

    #[error("At least one sequence should be informed on moves file.")]
    EmptyBatch,

    #[error("All sequences should have at least one action.")]
    EmptySequence,
}

/// Ordered collection of violations produced by one validation pass.
///
/// An empty report means the input passed every rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no rule was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations, in rule evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl std::fmt::Display for ValidationReport {
    /// Violation messages, one per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
