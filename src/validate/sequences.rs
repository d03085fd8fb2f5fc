//! Action batch validation.

use crate::core::Action;

use super::report::{ValidationReport, Violation};

/// Validator for a moves batch: the outer list must be non-empty, and only
/// then is every sequence required to hold at least one action. One
/// violation is collected per empty sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequencesValidator;

impl SequencesValidator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn validate(&self, sequences: &[Vec<Action>]) -> ValidationReport {
        let mut report = ValidationReport::new();

        if sequences.is_empty() {
            report.push(Violation::EmptyBatch);
            return report;
        }

        for sequence in sequences {
            if sequence.is_empty() {
                report.push(Violation::EmptySequence);
            }
        }

        report
    }
}
