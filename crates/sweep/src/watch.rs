// ABOUTME: Mutation intake queue that coalesces change bursts into single sweep passes.
// ABOUTME: Re-classification always covers all current items, never just the added ones.

use std::collections::VecDeque;

use crate::surface::Surface;
use crate::sweep::{PassSummary, Sweeper};

/// Kind of DOM mutation the host reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    ChildList,
    Attributes,
    CharacterData,
}

/// One observed mutation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationBatch {
    pub kind: MutationKind,
    pub added_nodes: usize,
}

impl MutationBatch {
    /// A child-list record that added `added_nodes` nodes.
    pub fn child_list(added_nodes: usize) -> Self {
        MutationBatch {
            kind: MutationKind::ChildList,
            added_nodes,
        }
    }

    /// Whether this record alone justifies a re-classification pass. Only
    /// child-list mutations that actually added nodes qualify.
    pub fn is_qualifying(&self) -> bool {
        self.kind == MutationKind::ChildList && self.added_nodes > 0
    }
}

/// Change intake for one page lifetime.
///
/// The host feeds mutation records in via `observe`; `pump` drains them and
/// decides whether a pass is due. However many batches a scroll burst
/// produced, one pump runs at most one pass, and that pass re-classifies
/// every item currently present. `pump` takes `&mut self`, so passes never
/// overlap.
#[derive(Debug, Default)]
pub struct ChangeWatcher {
    queue: VecDeque<MutationBatch>,
}

impl ChangeWatcher {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Records one mutation batch for the next pump.
    pub fn observe(&mut self, batch: MutationBatch) {
        self.queue.push_back(batch);
    }

    /// Number of batches waiting to be pumped.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drains every queued batch. Runs one sweep pass if any drained batch
    /// qualified, and returns its summary; returns `None` when nothing
    /// qualified.
    pub fn pump<S: Surface>(
        &mut self,
        sweeper: &Sweeper,
        surface: &mut S,
    ) -> Option<PassSummary> {
        let mut drained = 0usize;
        let mut qualifying = 0usize;
        while let Some(batch) = self.queue.pop_front() {
            drained += 1;
            if batch.is_qualifying() {
                qualifying += 1;
            }
        }
        if qualifying == 0 {
            if drained > 0 {
                tracing::trace!("drained {} batches, none qualified", drained);
            }
            return None;
        }
        tracing::debug!("coalesced {} of {} batches into one pass", qualifying, drained);
        Some(sweeper.sweep(surface))
    }
}
