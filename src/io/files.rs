//! JSON file loading for settings and moves.
//!
//! Both loaders return `Ok(None)` when the file holds JSON `null`, an
//! "empty file" in the game's sense, and leave deciding what that means to
//! the caller. A missing tile or heading inside an otherwise well-formed
//! settings file is not a load error; it parses into an absent field and
//! surfaces later as a validation violation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::core::{Action, GameSettings};

/// A file could not be turned into typed data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {} not found. Error: {source}", path.display())]
    NotFound { path: PathBuf, source: io::Error },

    #[error("Error reading file {}. Error: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Error parsing file {}. Error: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the settings file. `Ok(None)` means the file held `null`.
pub fn load_settings(path: &Path) -> Result<Option<GameSettings>, LoadError> {
    load_json(path)
}

/// Load the moves file: a list of action sequences. `Ok(None)` means the
/// file held `null`.
pub fn load_sequences(path: &Path) -> Result<Option<Vec<Vec<Action>>>, LoadError> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), bytes = text.len(), "loaded file");

    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_null_file_loads_as_none() {
        let file = write_temp("null");
        assert_eq!(load_settings(file.path()).unwrap(), None);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_settings(Path::new("no/such/settings.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().starts_with("File no/such/settings.json not found."));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let file = write_temp("{not json");
        let err = load_sequences(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_sequences_accept_both_spellings() {
        let file = write_temp(r#"[[0, 1], ["move", "turn"]]"#);
        let sequences = load_sequences(file.path()).unwrap().unwrap();

        assert_eq!(
            sequences,
            vec![
                vec![Action::Move, Action::Turn],
                vec![Action::Move, Action::Turn],
            ]
        );
    }
}
