//! Ownership of the live chart in each slot.
//!
//! Drawing a second chart onto a canvas that still holds one leaves two
//! charts fighting over it, so every redraw goes through
//! [`ChartRegistry::replace`], which disposes the previous chart before the
//! new one is created. Entries are tagged with the refresh generation that
//! produced them, and each slot remembers the newest generation that has
//! asked for it. A slower response from an older refresh is dropped instead
//! of overwriting a newer chart, even when the newer refresh failed.

use crate::error::Result;
use crate::slot::Slot;
use std::collections::HashMap;

/// Monotonically increasing refresh counter. Bumped on every metric toggle.
pub type Generation = u64;

/// A drawn chart that must be torn down before its canvas is reused.
pub trait ChartHandle {
    fn dispose(self);
}

/// What [`ChartRegistry::replace`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// First chart for the slot.
    Created,
    /// A previous chart was disposed and the new one installed.
    Replaced,
    /// A newer refresh has claimed the slot; nothing drawn.
    Stale,
}

struct Entry<H> {
    generation: Generation,
    handle: H,
}

pub struct ChartRegistry<H> {
    entries: HashMap<Slot, Entry<H>>,
    requested: HashMap<Slot, Generation>,
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            requested: HashMap::new(),
        }
    }

    /// Number of live charts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.entries.contains_key(&slot)
    }

    pub fn get(&self, slot: Slot) -> Option<&H> {
        self.entries.get(&slot).map(|e| &e.handle)
    }

    /// Generation of the chart currently drawn in `slot`.
    pub fn generation(&self, slot: Slot) -> Option<Generation> {
        self.entries.get(&slot).map(|e| e.generation)
    }

    /// Record that refresh `generation` is about to fetch for `slot`.
    pub fn begin(&mut self, slot: Slot, generation: Generation) {
        let newest = self.requested.entry(slot).or_insert(generation);
        *newest = (*newest).max(generation);
    }

    /// Newest generation that has started a refresh of, or drawn, `slot`.
    pub fn newest(&self, slot: Slot) -> Option<Generation> {
        let requested = self.requested.get(&slot).copied();
        requested.max(self.generation(slot))
    }

    /// True when a newer refresh has started for `slot` or drawn into it.
    pub fn is_stale(&self, slot: Slot, generation: Generation) -> bool {
        self.newest(slot).is_some_and(|newest| generation < newest)
    }

    /// Dispose the chart in `slot` (if any), then create and store a new one.
    ///
    /// `create` is not called for stale generations. If it fails the slot is
    /// left empty and the error is returned.
    pub fn replace<F>(&mut self, slot: Slot, generation: Generation, create: F) -> Result<ReplaceOutcome>
    where
        F: FnOnce() -> Result<H>,
    {
        if self.is_stale(slot, generation) {
            return Ok(ReplaceOutcome::Stale);
        }
        self.begin(slot, generation);

        let outcome = match self.entries.remove(&slot) {
            Some(previous) => {
                previous.handle.dispose();
                ReplaceOutcome::Replaced
            }
            None => ReplaceOutcome::Created,
        };

        let handle = create()?;
        self.entries.insert(slot, Entry { generation, handle });
        Ok(outcome)
    }

    /// Dispose every chart.
    pub fn clear(&mut self) {
        for (_, entry) in self.entries.drain() {
            entry.handle.dispose();
        }
    }
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
