//! Live turtle state.
//!
//! A `Turtle` exists only for the duration of one sequence run; the engine
//! creates a fresh one per run and discards it afterwards, so no state ever
//! leaks between sequences.

use crate::core::{Direction, Tile};

/// The turtle's current position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turtle {
    position: Tile,
    heading: Direction,
}

impl Turtle {
    /// Place a turtle on a tile, facing a heading.
    #[must_use]
    pub const fn new(position: Tile, heading: Direction) -> Self {
        Self { position, heading }
    }

    #[must_use]
    pub const fn position(&self) -> Tile {
        self.position
    }

    #[must_use]
    pub const fn heading(&self) -> Direction {
        self.heading
    }

    /// Rotate right one step in the cycle. Position is unchanged.
    pub fn turn(&mut self) {
        self.heading = self.heading.turned();
    }

    /// Step one tile forward along the current heading.
    ///
    /// The turtle itself never checks where it lands; mines, exits and
    /// board edges are the engine's concern.
    pub fn advance(&mut self) {
        let (dx, dy) = self.heading.offset();
        self.position = Tile::new(self.position.x + dx, self.position.y + dy);
    }
}
