//! Boundary round trip: JSON files through the loaders into a running game.

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use turtle_escape::{load_sequences, load_settings, Game, GameError, SequencesValidator};

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SETTINGS_JSON: &str = r#"{
    "board": {"rows": 4, "cols": 5},
    "startingPosition": {"tile": [0, 1], "dir": "north"},
    "exitPosition": {"tile": [4, 2]},
    "mines": [[1, 1], [3, 1], [3, 3]]
}"#;

// The moves file spells actions as enumerants: 0 = move, 1 = turn.
const MOVES_JSON: &str = r#"[
    [0, 1, 0, 0, 0, 0, 1, 0, 0],
    [1, 0],
    [1, 1, 1],
    [0, 0]
]"#;

#[test]
fn test_files_to_report_lines() {
    let settings_file = write_file(SETTINGS_JSON);
    let moves_file = write_file(MOVES_JSON);

    let sequences = load_sequences(moves_file.path()).unwrap().unwrap();
    assert!(SequencesValidator::new().validate(&sequences).is_valid());

    let settings = load_settings(settings_file.path()).unwrap();
    let mut game = Game::new(settings).unwrap();

    let lines: Vec<String> = sequences
        .iter()
        .map(|sequence| game.run(sequence).to_string())
        .collect();

    assert_eq!(
        lines,
        vec![
            "Sequence 1: Success!",
            "Sequence 2: Mine hit!",
            "Sequence 3: Still in danger!",
            "Sequence 4: Fell off the edge!",
        ]
    );
}

#[test]
fn test_null_settings_file_refuses_to_run() {
    let settings_file = write_file("null");

    let settings = load_settings(settings_file.path()).unwrap();
    assert_eq!(settings, None);

    let err = Game::new(settings).unwrap_err();
    assert!(matches!(err, GameError::EmptySettings));
    assert_eq!(err.to_string(), "Settings file is empty.");
}

#[test]
fn test_invalid_settings_file_reports_every_violation() {
    let settings_file = write_file(r#"{"board": {"rows": 1, "cols": 1}}"#);

    let settings = load_settings(settings_file.path()).unwrap();
    let err = Game::new(settings).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Game Settings file is invalid:\n\
         Board rows should be greater or equal 2.\n\
         Board columns should be greater or equal 2."
    );
}

#[test]
fn test_string_tagged_moves_load_too() {
    let moves_file = write_file(r#"[["turn", "move"]]"#);
    let settings_file = write_file(SETTINGS_JSON);

    let sequences = load_sequences(moves_file.path()).unwrap().unwrap();
    let mut game = Game::new(load_settings(settings_file.path()).unwrap()).unwrap();

    assert_eq!(game.run(&sequences[0]).to_string(), "Sequence 1: Mine hit!");
}

#[test]
fn test_missing_file_names_the_path() {
    let err = load_settings(Path::new("missing-settings.json")).unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("File missing-settings.json not found."));
}

#[test]
fn test_empty_batch_is_a_violation_not_a_crash() {
    let moves_file = write_file("[]");

    let sequences = load_sequences(moves_file.path()).unwrap().unwrap();
    let report = SequencesValidator::new().validate(&sequences);

    assert_eq!(
        report.to_string(),
        "At least one sequence should be informed on moves file."
    );
}
