use std::path::PathBuf;

use clap::Parser;
use desequencer_core::{DescriptorManifest, Registry};

/// Command line arguments for the desequencer front end
#[derive(Parser, Debug)]
#[command(
    name = "desequencer",
    author,
    version,
    about = "Desequence a command line against a descriptor manifest"
)]
pub struct Cli {
    /// Descriptor manifest (TOML). Without one only the built-in
    /// help and verbose flags are registered
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Leave out the built-in help and verbose descriptors
    #[arg(long, default_value_t = false)]
    pub no_builtins: bool,

    /// Print usage text for the descriptor set instead of desequencing
    #[arg(long, default_value_t = false)]
    pub usage: bool,

    /// Output compact JSON
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Disable colored usage output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Enable debug logging of every classified token
    #[arg(long, default_value_t = false, conflicts_with = "quiet")]
    pub debug: bool,

    /// Suppress all logging except errors
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Tokens to desequence, given after `--`
    #[arg(last = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Build the registry selected by `--manifest` and `--no-builtins`.
    pub fn registry(&self) -> anyhow::Result<Registry> {
        let mut manifest = match &self.manifest {
            Some(path) => DescriptorManifest::load(path)?,
            None => DescriptorManifest::default(),
        };
        if self.no_builtins {
            manifest.builtins = false;
        }
        Ok(manifest.into_registry()?)
    }

    /// Default log filter, overridable through `DESEQUENCER_LOG`.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "desequencer=debug,desequencer_core=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
