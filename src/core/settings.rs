//! Declarative game settings.
//!
//! This is the parsed shape of a settings file, before any rule has looked
//! at it. Every field is optional: a missing board or a position without a
//! tile is representable here and turned into violations by
//! [`SettingsValidator`](crate::validate::SettingsValidator), never by the
//! deserializer. Construction is the boundary's job; once validated the
//! value is treated as immutable for the lifetime of the run.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::direction::Direction;
use super::tile::Tile;

/// Where the turtle starts, and facing which way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingPosition {
    #[serde(default)]
    pub tile: Option<Tile>,

    #[serde(default, rename = "dir")]
    pub direction: Option<Direction>,
}

impl StartingPosition {
    #[must_use]
    pub const fn new(tile: Tile, direction: Direction) -> Self {
        Self {
            tile: Some(tile),
            direction: Some(direction),
        }
    }
}

/// The tile the turtle must reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitPosition {
    #[serde(default)]
    pub tile: Option<Tile>,
}

impl ExitPosition {
    #[must_use]
    pub const fn new(tile: Tile) -> Self {
        Self { tile: Some(tile) }
    }
}

/// Aggregate of everything a game needs: board, start, exit, and mines.
///
/// Mine duplicates are permitted and mine order only matters for violation
/// reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(default)]
    pub board: Option<Board>,

    #[serde(default)]
    pub starting_position: Option<StartingPosition>,

    #[serde(default)]
    pub exit_position: Option<ExitPosition>,

    #[serde(default)]
    pub mines: Option<Vec<Tile>>,
}

impl GameSettings {
    /// Mines as a slice, whether or not the settings listed any.
    #[must_use]
    pub fn mines(&self) -> &[Tile] {
        self.mines.as_deref().unwrap_or_default()
    }
}
