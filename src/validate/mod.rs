//! Rule-based validation gating the simulation.
//!
//! Two independent validators live here: one for the settings aggregate,
//! one for the moves batch. Both collect every violated rule into a
//! [`ValidationReport`] instead of failing fast; the game refuses to run
//! unless the settings report is clean, and the boundary refuses to run
//! any sequence unless the batch report is clean.

pub mod report;
pub mod sequences;
pub mod settings;

pub use report::{ValidationReport, Violation};
pub use sequences::SequencesValidator;
pub use settings::SettingsValidator;
