use desequencer_core::{Desequence, ParseOutcome, Registry};
use serde::Serialize;

/// JSON document printed after a pass.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub outcome: &'a ParseOutcome,
    /// One entry per registered descriptor, in registration order
    pub values: Vec<ValueEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ValueEntry<'a> {
    pub id: &'a str,
    pub occurrences: usize,
    pub parcels: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(registry: &'a Registry, result: &'a Desequence) -> Self {
        let values = registry
            .descriptors()
            .map(|descriptor| {
                let holder = result.values_for(&descriptor.id);
                ValueEntry {
                    id: &descriptor.id,
                    occurrences: holder.occurrences,
                    parcels: &holder.parcels,
                }
            })
            .collect();

        Self {
            outcome: result.outcome(),
            values,
        }
    }

    pub fn to_json(&self, raw: bool) -> serde_json::Result<String> {
        if raw {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}
