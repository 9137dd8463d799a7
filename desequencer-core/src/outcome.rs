//! Result of a single desequencing pass.

use serde::{Deserialize, Serialize};

use crate::error::{Diagnostic, ErrorKind};

/// Error state and derived flags of one pass. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    error: ErrorKind,
    help_found: bool,
    verbosity: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diagnostic: Option<Diagnostic>,
}

impl ParseOutcome {
    pub(crate) fn new(help_found: bool, verbosity: usize, diagnostic: Option<Diagnostic>) -> Self {
        Self {
            error: diagnostic.as_ref().map(Diagnostic::kind).unwrap_or_default(),
            help_found,
            verbosity,
            diagnostic,
        }
    }

    /// Whether the pass halted on an error.
    pub fn sequence_error(&self) -> bool {
        self.error.is_error()
    }

    /// `0` when the pass succeeded, otherwise the code of [`ErrorKind`].
    pub fn sequence_error_code(&self) -> u8 {
        self.error.code()
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// Whether `-h`/`--help` appeared before the pass ended.
    pub fn found_help_flag(&self) -> bool {
        self.help_found
    }

    /// Number of `-v`/`--verbose` occurrences.
    pub fn verbosity(&self) -> usize {
        self.verbosity
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }
}
