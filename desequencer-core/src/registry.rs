//! Descriptor registry.
//!
//! The registry owns the descriptor set and the two trigger indices used by
//! the engine. It is read-only during a pass, so one registry can serve any
//! number of command lines.

use std::collections::HashMap;

use tracing::warn;

use crate::descriptor::ArgumentDescriptor;
use crate::engine::{self, Desequence};
use crate::error::{Error, Result};

/// Registered descriptors plus short and long trigger lookups.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Descriptors in registration order
    descriptors: Vec<ArgumentDescriptor>,

    /// id -> position in `descriptors`
    slots: HashMap<String, usize>,

    short_index: HashMap<char, String>,
    long_index: HashMap<String, String>,
}

impl Registry {
    /// A registry holding the built-in help and verbose descriptors.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for descriptor in ArgumentDescriptor::builtins() {
            registry.insert(descriptor);
        }
        registry
    }

    /// A registry with no descriptors at all, not even the built-ins.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding exactly `descriptors`. Include
    /// [`ArgumentDescriptor::builtins`] in the list to keep help and verbose.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = ArgumentDescriptor>,
    {
        let mut registry = Self::empty();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Register a descriptor.
    ///
    /// Conflicts resolve as last registration wins: a repeated id replaces
    /// the earlier descriptor in place, and a trigger already claimed by
    /// another id is moved to the new descriptor.
    pub fn register(&mut self, descriptor: ArgumentDescriptor) -> Result<()> {
        if !descriptor.has_trigger() {
            return Err(Error::NoTrigger(descriptor.id));
        }
        if descriptor.long.as_deref() == Some("") {
            return Err(Error::EmptyLongTrigger(descriptor.id));
        }
        self.insert(descriptor);
        Ok(())
    }

    /// Chaining form of [`Registry::register`].
    pub fn with(mut self, descriptor: ArgumentDescriptor) -> Result<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    fn insert(&mut self, descriptor: ArgumentDescriptor) {
        let id = descriptor.id.clone();

        match self.slots.get(&id).copied() {
            Some(slot) => {
                warn!(id = %id, "argument registered twice, replacing earlier descriptor");
                let previous = std::mem::replace(&mut self.descriptors[slot], descriptor);
                self.unindex(&previous);
            }
            None => {
                self.slots.insert(id.clone(), self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }

        let descriptor = &self.descriptors[self.slots[&id]];
        if let Some(c) = descriptor.short {
            if let Some(previous) = self.short_index.insert(c, id.clone()) {
                if previous != id {
                    warn!(trigger = %c, from = %previous, to = %id, "short trigger reassigned");
                }
            }
        }
        if let Some(name) = &descriptor.long {
            if let Some(previous) = self.long_index.insert(name.clone(), id.clone()) {
                if previous != id {
                    warn!(trigger = %name, from = %previous, to = %id, "long trigger reassigned");
                }
            }
        }
    }

    /// Drop index entries that still point at `descriptor`.
    fn unindex(&mut self, descriptor: &ArgumentDescriptor) {
        if let Some(c) = descriptor.short {
            if self.short_index.get(&c) == Some(&descriptor.id) {
                self.short_index.remove(&c);
            }
        }
        if let Some(name) = &descriptor.long {
            if self.long_index.get(name) == Some(&descriptor.id) {
                self.long_index.remove(name);
            }
        }
    }

    pub fn lookup_by_short(&self, trigger: char) -> Option<&str> {
        self.short_index.get(&trigger).map(String::as_str)
    }

    pub fn lookup_by_long(&self, trigger: &str) -> Option<&str> {
        self.long_index.get(trigger).map(String::as_str)
    }

    /// Descriptor matched by a short trigger.
    pub fn resolve_short(&self, trigger: char) -> Option<&ArgumentDescriptor> {
        self.lookup_by_short(trigger).and_then(|id| self.descriptor(id))
    }

    /// Descriptor matched by a long trigger (without its `--` prefix).
    pub fn resolve_long(&self, trigger: &str) -> Option<&ArgumentDescriptor> {
        self.lookup_by_long(trigger).and_then(|id| self.descriptor(id))
    }

    pub fn descriptor(&self, id: &str) -> Option<&ArgumentDescriptor> {
        self.slots.get(id).map(|&slot| &self.descriptors[slot])
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.descriptors.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Run one pass over `tokens`. See [`engine::desequence`].
    pub fn desequence<I, S>(&self, tokens: I) -> Desequence
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        engine::desequence(self, tokens)
    }
}
