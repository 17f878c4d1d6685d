// ABOUTME: The capability trait isolating host-page access from classification.
// ABOUTME: The sweeper runs against any Surface, parsed page or test double alike.

use std::hash::Hash;

use tidyfeed_rules::{ItemSnapshot, PageContext};

/// Host-page access required to run a sweep pass.
///
/// Everything the engine does to a page goes through this trait: enumerate
/// the items currently present, project one item into an `ItemSnapshot`,
/// and collapse an item. Classification itself stays pure over snapshots,
/// so it behaves identically against a parsed document or an in-memory
/// double.
pub trait Surface {
    /// Opaque per-item handle, stable for the lifetime of one pass.
    type Handle: Copy + Eq + Hash;

    /// The context the page was detected as.
    fn context(&self) -> PageContext;

    /// Handles of all feed items currently present, in document order.
    fn items(&self) -> Vec<Self::Handle>;

    /// Projects an item into its host-independent snapshot. `None` when the
    /// handle no longer resolves.
    fn snapshot(&self, handle: Self::Handle) -> Option<ItemSnapshot>;

    /// Collapses the item's grid cell. Returns true when this call newly
    /// collapsed it, false when it was collapsed already.
    fn collapse(&mut self, handle: Self::Handle) -> bool;

    /// Whether the item is currently collapsed.
    fn is_collapsed(&self, handle: Self::Handle) -> bool;
}
