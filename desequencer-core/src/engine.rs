//! The desequencer engine.
//!
//! One left-to-right pass over a command line. Every token is either a
//! trigger token (`--name` or a `-abc` cluster) or a bare token. Each matched
//! descriptor that takes parcels queues a demand; bare tokens are handed to
//! the oldest open demand, so parcels follow their triggers in order even
//! when other triggers are interleaved:
//!
//! ```text
//! -2 foo -1 bar fish   =>   2: [foo, bar]   1: [fish]
//! ```
//!
//! The first error halts the pass. Values stored before the halt are kept
//! and returned alongside the outcome.

use std::collections::VecDeque;

use tracing::debug;

use crate::descriptor::{ArgumentDescriptor, HELP_ID, VERBOSE_ID};
use crate::error::{Diagnostic, ErrorKind};
use crate::outcome::ParseOutcome;
use crate::registry::Registry;
use crate::value::{ValueHolder, Values};

/// Outcome and collected values of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desequence {
    outcome: ParseOutcome,
    values: Values,
}

impl Desequence {
    pub fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }

    /// Values collected for `id`, empty for ids that were never registered.
    pub fn values_for(&self, id: &str) -> &ValueHolder {
        self.values.get(id)
    }

    /// Parcels collected for `id`.
    pub fn parcels(&self, id: &str) -> &[String] {
        &self.values.get(id).parcels
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn sequence_error(&self) -> bool {
        self.outcome.sequence_error()
    }

    pub fn sequence_error_code(&self) -> u8 {
        self.outcome.sequence_error_code()
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.outcome.error_kind()
    }

    pub fn found_help_flag(&self) -> bool {
        self.outcome.found_help_flag()
    }

    pub fn verbosity(&self) -> usize {
        self.outcome.verbosity()
    }
}

/// Run one pass of `tokens` against `registry`.
///
/// This is a pure function of its inputs: the registry is not modified and
/// every call starts from empty value holders.
pub fn desequence<I, S>(registry: &Registry, tokens: I) -> Desequence
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(registry);
    let halt = match scanner.scan(tokens) {
        Some(diagnostic) => Some(diagnostic),
        None => scanner.settle_demands(),
    };

    if let Some(diagnostic) = &halt {
        debug!(%diagnostic, "desequencing halted");
    }

    Desequence {
        outcome: ParseOutcome::new(scanner.help_found, scanner.verbosity, halt),
        values: scanner.values,
    }
}

/// An occurrence still waiting for parcels.
struct Demand<'r> {
    descriptor: &'r ArgumentDescriptor,
    received: usize,
}

impl Demand<'_> {
    fn satisfied(&self) -> bool {
        self.received >= self.descriptor.parcel_count
    }
}

struct Scanner<'r> {
    registry: &'r Registry,
    values: Values,
    demands: VecDeque<Demand<'r>>,
    help_found: bool,
    verbosity: usize,
}

impl<'r> Scanner<'r> {
    fn new(registry: &'r Registry) -> Self {
        let mut values = Values::new();
        for descriptor in registry.descriptors() {
            values.get_or_create(&descriptor.id);
        }

        Self {
            registry,
            values,
            demands: VecDeque::new(),
            help_found: false,
            verbosity: 0,
        }
    }

    /// Classify tokens until input runs out or one fails to classify.
    fn scan<I, S>(&mut self, tokens: I) -> Option<Diagnostic>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();

            if let Some(name) = token.strip_prefix("--").filter(|name| !name.is_empty()) {
                let registry = self.registry;
                match registry.resolve_long(name) {
                    Some(descriptor) => {
                        debug!(index, token, id = %descriptor.id, "long trigger");
                        self.occur(descriptor);
                    }
                    None => return Some(unknown(index, token)),
                }
            } else if let Some(cluster) = token
                .strip_prefix('-')
                .filter(|c| !c.is_empty() && !c.starts_with('-'))
            {
                for c in cluster.chars() {
                    let registry = self.registry;
                    match registry.resolve_short(c) {
                        Some(descriptor) => {
                            debug!(index, trigger = %c, id = %descriptor.id, "short trigger");
                            self.occur(descriptor);
                        }
                        None => return Some(unknown(index, &format!("-{}", c))),
                    }
                }
            } else if !self.deliver(token) {
                return Some(unknown(index, token));
            }
        }
        None
    }

    fn occur(&mut self, descriptor: &'r ArgumentDescriptor) {
        self.values.get_or_create(&descriptor.id).occurrences += 1;

        match descriptor.id.as_str() {
            HELP_ID => self.help_found = true,
            VERBOSE_ID => self.verbosity += 1,
            _ => {}
        }

        if descriptor.takes_parcels() {
            self.demands.push_back(Demand {
                descriptor,
                received: 0,
            });
        }
    }

    /// Hand a bare token to the oldest open demand. Returns `false` when no
    /// occurrence is waiting for parcels.
    fn deliver(&mut self, token: &str) -> bool {
        let Some(demand) = self.demands.front_mut() else {
            return false;
        };
        let descriptor = demand.descriptor;
        let holder = self.values.get_or_create(&descriptor.id);

        if !descriptor.is_array && demand.received == 0 {
            holder.parcels.clear();
        }
        holder.parcels.push(token.to_string());
        demand.received += 1;

        if descriptor.is_unbounded {
            // a non-array unbounded occurrence keeps its trailing parcels only
            if !descriptor.is_array && holder.parcels.len() > descriptor.parcel_count {
                let excess = holder.parcels.len() - descriptor.parcel_count;
                holder.parcels.drain(..excess);
            }
        } else if demand.satisfied() {
            self.demands.pop_front();
        }

        debug!(token, id = %descriptor.id, "parcel");
        true
    }

    /// Close the pass at end of input. Reports the first demand left short
    /// of its parcel count. A non-array occurrence that received nothing
    /// still replaces earlier values, leaving its holder empty.
    fn settle_demands(&mut self) -> Option<Diagnostic> {
        let mut missing = None;
        for demand in self.demands.iter().filter(|demand| !demand.satisfied()) {
            let descriptor = demand.descriptor;
            if !descriptor.is_array && demand.received == 0 {
                self.values.get_or_create(&descriptor.id).parcels.clear();
            }
            missing.get_or_insert_with(|| Diagnostic::MissingArgument {
                id: descriptor.id.clone(),
                expected: descriptor.parcel_count,
                received: demand.received,
            });
        }
        missing
    }
}

fn unknown(index: usize, token: &str) -> Diagnostic {
    Diagnostic::UnknownArgument {
        index,
        token: token.to_string(),
    }
}
