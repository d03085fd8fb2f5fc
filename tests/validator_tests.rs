//! Validation engine integration tests: rule ordering and cascade gating
//! across the whole settings aggregate.

use turtle_escape::{
    Board, Direction, ExitPosition, GameSettings, SequencesValidator, SettingsValidator,
    StartingPosition, Tile, Violation,
};

fn validate(settings: &GameSettings) -> Vec<Violation> {
    SettingsValidator::new()
        .validate(settings)
        .violations()
        .to_vec()
}

#[test]
fn test_board_rules_come_first_and_gate_everything() {
    assert_eq!(
        validate(&GameSettings::default()),
        vec![Violation::MissingBoard]
    );

    let undersized = GameSettings {
        board: Some(Board::new(1, 1)),
        // Would be violations of their own, were the board usable.
        starting_position: Some(StartingPosition::default()),
        exit_position: None,
        mines: Some(vec![Tile::new(9, 9)]),
    };
    assert_eq!(
        validate(&undersized),
        vec![
            Violation::BoardRowsTooSmall,
            Violation::BoardColumnsTooSmall,
        ]
    );
}

#[test]
fn test_violations_follow_rule_order_across_groups() {
    let settings = GameSettings {
        board: Some(Board::new(4, 5)),
        starting_position: Some(StartingPosition {
            tile: Some(Tile::new(9, 9)),
            direction: None,
        }),
        exit_position: Some(ExitPosition::new(Tile::new(2, 2))),
        mines: Some(vec![Tile::new(9, 9), Tile::new(2, 2), Tile::new(7, 7)]),
    };

    assert_eq!(
        validate(&settings),
        vec![
            Violation::StartTileOutsideBoard,
            Violation::MissingDirection,
            Violation::ExitNotOnEdge,
            // Mine (9, 9) sits on the start tile and outside the board:
            // both collected.
            Violation::MineOnStart,
            Violation::MineOutsideBoard,
            // Mine (2, 2) sits on the exit tile.
            Violation::MineOnExit,
            // Mine (7, 7) is just out of bounds.
            Violation::MineOutsideBoard,
        ]
    );
}

#[test]
fn test_position_presence_is_reported_before_field_rules() {
    let settings = GameSettings {
        board: Some(Board::new(4, 5)),
        starting_position: None,
        exit_position: Some(ExitPosition::new(Tile::new(2, 2))),
        mines: None,
    };

    assert_eq!(
        validate(&settings),
        vec![Violation::MissingStartingPosition, Violation::ExitNotOnEdge]
    );
}

#[test]
fn test_report_message_lists_violations_one_per_line() {
    let settings = GameSettings {
        board: Some(Board::new(2, 2)),
        ..GameSettings::default()
    };

    let report = SettingsValidator::new().validate(&settings);
    assert_eq!(
        report.to_string(),
        "StartingPosition should not be null.\nExitPosition should not be null."
    );
}

#[test]
fn test_sequences_batch_rule_gates_per_sequence_rule() {
    let validator = SequencesValidator::new();

    let report = validator.validate(&[]);
    assert_eq!(report.violations(), &[Violation::EmptyBatch]);

    // The per-sequence rule only runs on a non-empty batch.
    let report = validator.validate(&[vec![], vec![]]);
    assert_eq!(
        report.violations(),
        &[Violation::EmptySequence, Violation::EmptySequence]
    );
}
