//! Argument descriptors.
//!
//! A descriptor names one argument the command line may carry: how it is
//! triggered (`-c` and/or `--name`) and how many values ("parcels") each
//! occurrence takes.

use serde::{Deserialize, Serialize};

/// Id of the built-in help descriptor.
pub const HELP_ID: &str = "help";

/// Id of the built-in verbose descriptor.
pub const VERBOSE_ID: &str = "verbose";

/// Description of one argument. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Unique key within a registry
    pub id: String,

    /// Character matched inside a `-` cluster
    #[serde(default)]
    pub short: Option<char>,

    /// String matched after a `--` prefix
    #[serde(default)]
    pub long: Option<String>,

    /// Number of parcels each occurrence takes
    #[serde(default)]
    pub parcel_count: usize,

    /// Accumulate parcels across occurrences instead of overwriting
    #[serde(default)]
    pub is_array: bool,

    /// Take every remaining bare token once matched
    #[serde(default)]
    pub is_unbounded: bool,

    #[serde(default)]
    pub description: String,
}

impl ArgumentDescriptor {
    /// Start a descriptor with no triggers and no parcels.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short: None,
            long: None,
            parcel_count: 0,
            is_array: false,
            is_unbounded: false,
            description: String::new(),
        }
    }

    /// The built-in `-h`/`--help` flag.
    pub fn help() -> Self {
        Self::new(HELP_ID)
            .short('h')
            .long("help")
            .description("Show usage information")
    }

    /// The built-in `-v`/`--verbose` flag, counted per occurrence.
    pub fn verbose() -> Self {
        Self::new(VERBOSE_ID)
            .short('v')
            .long("verbose")
            .description("Increase verbosity")
    }

    /// Both built-ins, help first.
    pub fn builtins() -> Vec<Self> {
        vec![Self::help(), Self::verbose()]
    }

    pub fn short(mut self, trigger: char) -> Self {
        self.short = Some(trigger);
        self
    }

    pub fn long(mut self, trigger: impl Into<String>) -> Self {
        self.long = Some(trigger.into());
        self
    }

    pub fn parcels(mut self, count: usize) -> Self {
        self.parcel_count = count;
        self
    }

    pub fn array(mut self, is_array: bool) -> Self {
        self.is_array = is_array;
        self
    }

    pub fn unbounded(mut self, is_unbounded: bool) -> Self {
        self.is_unbounded = is_unbounded;
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn has_trigger(&self) -> bool {
        self.short.is_some() || self.long.is_some()
    }

    /// Whether an occurrence of this descriptor waits for parcels.
    /// The unbounded flag has no effect on zero-parcel descriptors.
    pub fn takes_parcels(&self) -> bool {
        self.parcel_count > 0
    }

    /// Triggers as they appear on a command line, e.g. `-o, --output`.
    pub fn trigger_display(&self) -> String {
        let mut parts = Vec::new();
        if let Some(c) = self.short {
            parts.push(format!("-{}", c));
        }
        if let Some(name) = &self.long {
            parts.push(format!("--{}", name));
        }
        parts.join(", ")
    }
}
