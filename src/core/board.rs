//! Board dimensions and tile placement predicates.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Rectangular board dimensions.
///
/// A usable board is at least 2×2; the validator enforces that before a game
/// is ever constructed. The JSON key for `columns` is `cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub rows: i32,

    #[serde(rename = "cols")]
    pub columns: i32,
}

impl Board {
    /// Create a board with the given dimensions.
    #[must_use]
    pub const fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }

    /// Whether a tile counts as inside this board.
    ///
    /// X is bounds-inclusive on the right (`0 ≤ x ≤ columns`) while Y is not
    /// (`0 ≤ y < rows`).
    #[must_use]
    pub const fn contains(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.x <= self.columns && tile.y >= 0 && tile.y < self.rows
    }

    /// Whether a tile lies on the edge of the board.
    #[must_use]
    pub const fn is_edge(&self, tile: Tile) -> bool {
        tile.x == 0 || tile.y == 0 || tile.x == self.columns - 1 || tile.y == self.rows - 1
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
