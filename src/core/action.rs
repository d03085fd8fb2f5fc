//! Scripted turtle actions.
//!
//! A moves file is a list of sequences, each sequence a non-empty list of
//! actions. The engine consumes one sequence per run and reports a single
//! outcome for it.
//!
//! Like headings, actions on the wire are either an enumerant (0 = Move,
//! 1 = Turn) or a case-insensitive string tag.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One scripted step: move forward one tile, or rotate right in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Move,
    Turn,
}

impl Action {
    /// Lowercase tag, also the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Turn => "turn",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct ActionVisitor;

impl Visitor<'_> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an action enumerant 0-1 or a \"move\"/\"turn\" tag")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Action, E> {
        match value {
            0 => Ok(Action::Move),
            1 => Ok(Action::Turn),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Action, E> {
        u64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            .and_then(|value| self.visit_u64(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Action, E> {
        if value.eq_ignore_ascii_case("move") {
            Ok(Action::Move)
        } else if value.eq_ignore_ascii_case("turn") {
            Ok(Action::Turn)
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ActionVisitor)
    }
}
