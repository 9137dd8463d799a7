//! Single-pass command-line argument desequencer.
//!
//! A [`Registry`] holds the argument descriptors an application accepts. One
//! call to [`Registry::desequence`] walks a command line left to right,
//! sorting tokens into triggers and parcels, and returns a [`Desequence`]:
//! the [`ParseOutcome`] (error kind, help flag, verbosity) together with the
//! values collected for each descriptor, including the partial values
//! gathered before an error halted the pass.

mod descriptor;
mod engine;
mod error;
mod manifest;
mod outcome;
mod registry;
mod value;

pub use descriptor::{ArgumentDescriptor, HELP_ID, VERBOSE_ID};
pub use engine::{desequence, Desequence};
pub use error::{Diagnostic, Error, ErrorKind, Result};
pub use manifest::{ArgumentEntry, DescriptorManifest};
pub use outcome::ParseOutcome;
pub use registry::Registry;
pub use value::{ValueHolder, Values};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        ArgumentDescriptor,
        Desequence,
        Diagnostic,
        ErrorKind,
        ParseOutcome,
        Registry,
        ValueHolder,
    };
}
