use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Decides when the holes left by removed nodes are compacted.
///
/// Removing an element closes its node in place; the position stays in the storage until
/// a compaction moves the active nodes over the holes and truncates the storage.
/// Every compaction advances the [`MemoryState`] of the collection, which invalidates the
/// node handles created earlier. This holds even when no node moves: truncated positions
/// are reused by later pushes, and a handle to a truncated node must not resolve to them.
///
/// * [`MemoryReclaimOnThreshold`] compacts once the holes exceed a fraction of the storage.
/// * [`MemoryReclaimNever`] leaves compaction to explicit `reclaim_closed_nodes` calls.
///
/// [`MemoryState`]: crate::MemoryState
pub trait MemoryPolicy<V: Variant>: Clone + Default {
    /// Called after every removal; compacts the storage if the policy decides to.
    ///
    /// Returns whether the storage was compacted.
    fn reclaim_closed_nodes<P>(col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>;
}

/// Moves the active nodes of a collection over the holes of its storage.
///
/// After `reclaim_nodes`, the active nodes must occupy the first `col.len()` positions
/// of the storage, and every link, the ends included, must point to the new positions.
/// The caller truncates the storage afterwards.
pub trait MemoryReclaimer<V: Variant>: Clone + Default {
    /// Compacts the active nodes; returns true if any node moved.
    fn reclaim_nodes<P>(col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>;
}

/// Never compacts on removal.
///
/// Handles of active nodes are never invalidated and handles of removed nodes
/// keep reporting [`ClearedNode`]. Storage can still be compacted on demand with
/// `reclaim_closed_nodes`.
///
/// [`ClearedNode`]: crate::CollectionError::ClearedNode
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl<V: Variant> MemoryPolicy<V> for MemoryReclaimNever {
    #[inline(always)]
    fn reclaim_closed_nodes<P>(_: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>,
    {
        false
    }
}
