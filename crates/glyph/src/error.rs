use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::GlyphClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Parse,
    InvalidKey,
    EmptyKey,
    InvalidFileType,
    Io,
}

/// Serializable form of a [`TableError`], carried in session events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed symbol table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("symbol table key {key} is not a vowel-only or consonant-only sub-glyph")]
    InvalidKey { key: u16 },
    #[error("cannot define an entry for an empty {class:?} component")]
    EmptyKey { class: GlyphClass },
    #[error("'{}' is not a json file (detected {detected})", path.display())]
    InvalidFileType { path: PathBuf, detected: String },
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TableError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TableError::Parse(_) => ErrorCode::Parse,
            TableError::InvalidKey { .. } => ErrorCode::InvalidKey,
            TableError::EmptyKey { .. } => ErrorCode::EmptyKey,
            TableError::InvalidFileType { .. } => ErrorCode::InvalidFileType,
            TableError::Io { .. } => ErrorCode::Io,
        }
    }
}

impl From<&TableError> for ErrorReport {
    fn from(value: &TableError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
