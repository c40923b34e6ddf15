//! Error types for PeoplePick
//!
//! Everything that can go wrong while loading a people dataset or driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for PeoplePick operations
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse people data from '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate person slug '{0}'")]
    DuplicateSlug(String),

    #[error("Invalid person record: {0}")]
    InvalidPerson(String),

    #[error("Unknown output format '{0}' (expected text or json)")]
    InvalidOutputFormat(String),
}

/// Result type alias for PeoplePick operations
pub type Result<T> = std::result::Result<T, PickerError>;

impl PickerError {
    /// Wrap a JSON error with the source it was read from
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PickerError::JsonError {
            path: path.into(),
            source,
        }
    }

    /// Check if this error comes from the people data rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            PickerError::JsonError { .. }
                | PickerError::DuplicateSlug(_)
                | PickerError::InvalidPerson(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_errors_are_classified() {
        assert!(PickerError::DuplicateSlug("anna".into()).is_data_error());
        assert!(PickerError::InvalidPerson("blank name".into()).is_data_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!PickerError::from(io).is_data_error());
        assert!(!PickerError::InvalidOutputFormat("xml".into()).is_data_error());
    }

    #[test]
    fn json_error_mentions_path() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = PickerError::json("people.json", source);
        assert!(err.to_string().contains("people.json"));
    }
}
