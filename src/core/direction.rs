//! Cardinal headings and the right-turn cycle.
//!
//! The turtle only ever turns right: North → East → South → West → North.
//! There is no left turn anywhere in the rules, so the type exposes a single
//! [`turned`](Direction::turned) step along that cycle.
//!
//! Settings files spell a heading either as its position in the cycle
//! (0 = North .. 3 = West) or as a case-insensitive name; both are accepted
//! when deserializing. Serialization always emits the lowercase name.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the four cardinal headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings, in cycle order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The heading after one right turn.
    ///
    /// Four successive turns return to the original heading:
    ///
    /// ```
    /// use turtle_escape::core::Direction;
    ///
    /// let mut heading = Direction::North;
    /// for _ in 0..4 {
    ///     heading = heading.turned();
    /// }
    /// assert_eq!(heading, Direction::North);
    /// ```
    #[must_use]
    pub const fn turned(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit offset `(dx, dy)` of a forward move along this heading.
    ///
    /// Y grows southward: North is `(0, -1)` and South is `(0, 1)`.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Lowercase name, also the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }

    fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Direction::North),
            1 => Some(Direction::East),
            2 => Some(Direction::South),
            3 => Some(Direction::West),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("north") {
            Some(Direction::North)
        } else if name.eq_ignore_ascii_case("east") {
            Some(Direction::East)
        } else if name.eq_ignore_ascii_case("south") {
            Some(Direction::South)
        } else if name.eq_ignore_ascii_case("west") {
            Some(Direction::West)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct DirectionVisitor;

impl Visitor<'_> for DirectionVisitor {
    type Value = Direction;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a heading index 0-3 or a cardinal name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Direction, E> {
        Direction::from_index(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Direction, E> {
        u64::try_from(value)
            .ok()
            .and_then(Direction::from_index)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Direction, E> {
        Direction::from_name(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DirectionVisitor)
    }
}
