//! Board tile coordinates.
//!
//! A `Tile` is a plain `(x, y)` pair with value equality. Tiles carry no
//! identity and no knowledge of the board they sit on; containment and edge
//! questions belong to [`Board`](super::Board).
//!
//! On the wire a tile is the two-element array `[x, y]`, matching the
//! settings file format.

use serde::{Deserialize, Serialize};

/// An integer grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    /// Create a tile at the given coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Tile {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Tile> for (i32, i32) {
    fn from(tile: Tile) -> Self {
        (tile.x, tile.y)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
