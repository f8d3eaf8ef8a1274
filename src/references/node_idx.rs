use super::NodePtr;
use crate::{MemoryState, Variant};
use core::fmt::Debug;

/// A node handle providing safe and constant time access to an element
/// of a linked collection.
///
/// A handle stays usable as long as the node it points to belongs to the collection
/// and the collection has not reorganized its storage. Otherwise, resolving it through
/// the collection fails with one of:
///
/// * [`ClearedNode`]: the node has been removed,
/// * [`ReorganizedCollection`]: the storage has been compacted by the memory policy,
/// * [`NodeOutOfBounds`]: the handle belongs to another collection.
///
/// [`ClearedNode`]: crate::CollectionError::ClearedNode
/// [`ReorganizedCollection`]: crate::CollectionError::ReorganizedCollection
/// [`NodeOutOfBounds`]: crate::CollectionError::NodeOutOfBounds
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue(7);
/// let first = queue.first_node().unwrap();
///
/// assert_eq!(queue.node_value(&first), Ok(&7));
/// assert_eq!(queue.dequeue(), Ok(7));
/// assert_eq!(queue.node_value(&first), Err(CollectionError::ClearedNode));
/// ```
pub struct NodeIdx<V: Variant> {
    node: NodePtr<V>,
    state: MemoryState,
}

impl<V: Variant> Clone for NodeIdx<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Copy for NodeIdx<V> {}

impl<V: Variant> PartialEq for NodeIdx<V> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.state == other.state
    }
}

impl<V: Variant> Eq for NodeIdx<V> {}

impl<V: Variant> core::hash::Hash for NodeIdx<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        self.state.hash(state);
    }
}

impl<V: Variant> Debug for NodeIdx<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("node", &self.node)
            .field("state", &self.state)
            .finish()
    }
}

impl<V: Variant> NodeIdx<V> {
    /// Handle to the node at `node_ptr` of a collection currently in the given memory `state`.
    #[inline(always)]
    pub fn new(state: MemoryState, node_ptr: NodePtr<V>) -> Self {
        Self {
            node: node_ptr,
            state,
        }
    }

    /// Whether the handle was created while the collection was in `state`.
    #[inline(always)]
    pub fn is_in_state(&self, state: MemoryState) -> bool {
        self.state == state
    }

    #[inline(always)]
    pub(crate) fn node_ptr(&self) -> NodePtr<V> {
        self.node
    }
}
