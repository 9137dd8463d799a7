//! TOML descriptor manifests.
//!
//! A manifest lists the arguments an application accepts so the descriptor
//! set can live in a file instead of code:
//!
//! ```toml
//! builtins = true
//!
//! [[argument]]
//! id = "output"
//! short = "o"
//! long = "output"
//! parcels = 1
//! description = "Write results to a file"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::ArgumentDescriptor;
use crate::error::{Error, Result};
use crate::registry::Registry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorManifest {
    /// Register the help and verbose descriptors ahead of `arguments`
    #[serde(default = "default_builtins")]
    pub builtins: bool,

    #[serde(default, rename = "argument")]
    pub arguments: Vec<ArgumentEntry>,
}

/// One `[[argument]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentEntry {
    pub id: String,
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub parcels: usize,
    #[serde(default)]
    pub array: bool,
    #[serde(default)]
    pub unbounded: bool,
    #[serde(default)]
    pub description: String,
}

fn default_builtins() -> bool {
    true
}

impl Default for DescriptorManifest {
    fn default() -> Self {
        Self {
            builtins: true,
            arguments: Vec::new(),
        }
    }
}

impl DescriptorManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Manifest(format!(
                "Failed to read manifest {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Descriptors in registration order: built-ins first when enabled, then
    /// the manifest's arguments in file order.
    pub fn descriptors(&self) -> Result<Vec<ArgumentDescriptor>> {
        let mut descriptors = if self.builtins {
            ArgumentDescriptor::builtins()
        } else {
            Vec::new()
        };
        for entry in &self.arguments {
            descriptors.push(entry.to_descriptor()?);
        }
        Ok(descriptors)
    }

    pub fn into_registry(self) -> Result<Registry> {
        Registry::from_descriptors(self.descriptors()?)
    }
}

impl ArgumentEntry {
    pub fn to_descriptor(&self) -> Result<ArgumentDescriptor> {
        let mut descriptor = ArgumentDescriptor::new(&self.id)
            .parcels(self.parcels)
            .array(self.array)
            .unbounded(self.unbounded)
            .description(&self.description);

        if let Some(short) = &self.short {
            let mut chars = short.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => descriptor = descriptor.short(c),
                _ => {
                    return Err(Error::InvalidShortTrigger {
                        id: self.id.clone(),
                        value: short.clone(),
                    })
                }
            }
        }
        if let Some(long) = &self.long {
            descriptor = descriptor.long(long);
        }
        Ok(descriptor)
    }
}
