use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid arguments: {0} (usage: highest <path> <displayLength>)")]
    Usage(String),

    #[error("invalid display length {0:?}: expected an integer >= 1")]
    InvalidDisplayLength(String),

    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("line {line}: missing ':' between score and payload")]
    MissingSeparator { line: usize },

    #[error("line {line}: score {field:?} is not a number")]
    InvalidScore { line: usize, field: String },

    #[error("line {line}: score {field:?} is negative")]
    NegativeScore { line: usize, field: String },

    #[error("line {line}: score {field:?} is out of range")]
    ScoreOutOfRange { line: usize, field: String },

    #[error("line {line}: malformed JSON payload: {source}")]
    MalformedPayload {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: payload has a missing or falsy id")]
    MissingId { line: usize },

    #[error("line {line}: duplicate score {score}")]
    DuplicateScore { line: usize, score: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used to pick the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Input,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound(_) => ErrorKind::FileNotFound,
            _ => ErrorKind::Input,
        }
    }

    /// Exit status for this error: 1 for a missing input file, 2 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::FileNotFound => 1,
            ErrorKind::Input => 2,
        }
    }
}
