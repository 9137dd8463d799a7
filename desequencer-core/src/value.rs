//! Per-descriptor value holders.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

static EMPTY: ValueHolder = ValueHolder::new();

/// Parcels and occurrence count collected for one descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueHolder {
    pub parcels: Vec<String>,
    pub occurrences: usize,
}

impl ValueHolder {
    pub const fn new() -> Self {
        Self {
            parcels: Vec::new(),
            occurrences: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty() && self.occurrences == 0
    }

    /// Whether the descriptor's trigger appeared at least once.
    pub fn found(&self) -> bool {
        self.occurrences > 0
    }

    pub fn first(&self) -> Option<&str> {
        self.parcels.first().map(String::as_str)
    }
}

/// Value holders keyed by descriptor id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values {
    holders: HashMap<String, ValueHolder>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values collected for `id`. Ids that were never registered (or never
    /// matched) yield an empty holder.
    pub fn get(&self, id: &str) -> &ValueHolder {
        self.holders.get(id).unwrap_or(&EMPTY)
    }

    /// Mutable holder for `id`, created empty on first access.
    pub fn get_or_create(&mut self, id: &str) -> &mut ValueHolder {
        self.holders.entry(id.to_string()).or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.holders.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueHolder)> {
        self.holders.iter().map(|(id, holder)| (id.as_str(), holder))
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}
