//! # turtle-escape
//!
//! A scripted turtle-escape board game engine.
//!
//! A turtle walks a rectangular grid following scripted sequences of two
//! actions (move forward, turn right), and each sequence ends in one of
//! four outcomes: it hits a mine, reaches the exit, falls off the edge, or
//! finishes still inside the board ("still in danger").
//!
//! ## Design Principles
//!
//! 1. **Validation gates simulation**: a [`Game`] cannot be constructed
//!    from settings that break any structural rule. Violations are
//!    collected, never thrown one at a time.
//!
//! 2. **Values in, values out**: the core consumes already-typed settings
//!    and action data and produces typed reports. File formats and the CLI
//!    live at the boundary (`io`, the binary).
//!
//! 3. **No hidden state**: the sequence ordinal lives on the engine
//!    instance, so separate games and test runs never interfere. Turtle
//!    state is created fresh per sequence and discarded.
//!
//! ## Modules
//!
//! - `core`: tiles, headings, boards, actions, settings
//! - `validate`: rule-based validators and the violation report
//! - `game`: the simulation engine and its outcomes
//! - `io`: JSON file loading
//! - `logging`: tracing setup for the binary

pub mod core;
pub mod game;
pub mod io;
pub mod logging;
pub mod validate;

// Re-export commonly used types
pub use crate::core::{Action, Board, Direction, ExitPosition, GameSettings, StartingPosition, Tile};

pub use crate::validate::{SequencesValidator, SettingsValidator, ValidationReport, Violation};

pub use crate::game::{Game, GameError, Outcome, SequenceReport, Turtle};

pub use crate::io::{load_sequences, load_settings, LoadError};
