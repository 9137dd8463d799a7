//! Error types for the desequencer.
//!
//! Only configuration problems surface as [`Error`]. A malformed command line
//! is never an `Err`: it is reported through [`ErrorKind`] on the pass
//! outcome, together with a [`Diagnostic`] naming the halt point.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error raised while building a descriptor set.
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor was registered without a short or long trigger
    #[error("Argument '{0}' has neither a short nor a long trigger")]
    NoTrigger(String),

    /// A long trigger was given as the empty string
    #[error("Argument '{0}' has an empty long trigger")]
    EmptyLongTrigger(String),

    /// A manifest `short` entry was not exactly one character
    #[error("Invalid short trigger for argument '{id}': {value:?}")]
    InvalidShortTrigger { id: String, value: String },

    /// The manifest could not be parsed
    #[error("Invalid manifest: {0}")]
    Manifest(String),
}

/// Result type alias for desequencer configuration.
pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Manifest(err.to_string())
    }
}

/// The kind of error a pass halted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    None,
    /// A trigger or bare token did not match any registered descriptor
    UnknownArgument,
    /// A descriptor needed more parcels than the command line supplied
    MissingArgument,
}

impl ErrorKind {
    /// Numeric code of the error kind; `0` means no error.
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::None => 0,
            ErrorKind::UnknownArgument => 1,
            ErrorKind::MissingArgument => 2,
        }
    }

    pub fn is_error(self) -> bool {
        self != ErrorKind::None
    }
}

/// Where and why a pass halted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// `token` is the offending input; for a short cluster it is the
    /// offending character re-prefixed with `-`.
    #[error("Unknown argument '{token}' at position {index}")]
    UnknownArgument { index: usize, token: String },

    #[error("Missing argument for '{id}': expected {expected} parcel(s), got {received}")]
    MissingArgument {
        id: String,
        expected: usize,
        received: usize,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Diagnostic::UnknownArgument { .. } => ErrorKind::UnknownArgument,
            Diagnostic::MissingArgument { .. } => ErrorKind::MissingArgument,
        }
    }
}
