//! Error types for the scanning pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A front-end failure while building the declaration tree for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    /// 1-based line of the offending token
    pub line: usize,
    /// 1-based column (in characters) of the offending token
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Errors surfaced by discovery, loading and rendering
#[derive(Error, Debug)]
pub enum Error {
    /// The input path is missing or could not be traversed
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered source file could not be read
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The front-end could not build a declaration tree for a file
    #[error("failed to parse {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    /// A function parameter has no type and strict rendering was requested
    #[error("parameter `{parameter}` of function `{function}` has no type annotation")]
    MissingTypeAnnotation { function: String, parameter: String },

    /// A declaration could not be encoded as JSON
    #[error("failed to encode declaration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Path of the file or root the error relates to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::ResourceNotFound { path, .. }
            | Error::Read { path, .. }
            | Error::ParseFailure { path, .. } => Some(path),
            Error::MissingTypeAnnotation { .. } | Error::Serialize(_) => None,
        }
    }
}

/// Result type alias for [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
