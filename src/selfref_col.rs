use crate::{
    CollectionError, CoreCol, MemoryPolicy, MemoryState, Node, NodeIdx, NodePtr, Refs, Storage,
    Variant,
};
use core::ops::{Deref, DerefMut};
use orx_pinned_vec::PinnedVec;

/// `SelfRefCol` is the node store every linked collection of this crate is built on.
///
/// * Nodes live in a pinned vector `P`; a pushed node never moves unless the memory
///   policy `M` compacts the storage.
/// * Links among nodes are therefore plain node pointers.
/// * Every compaction advances the [`MemoryState`], which makes it possible to detect
///   stale [`NodeIdx`] handles, including handles to truncated positions reused later.
pub struct SelfRefCol<V, M, P = Storage<V>>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    core: CoreCol<V, P>,
    policy: M,
    state: MemoryState,
}

impl<V, M, P> Default for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M, P> Deref for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    type Target = CoreCol<V, P>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<V, M, P> DerefMut for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<V, M, P> SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            core: CoreCol::default(),
            policy: M::default(),
            state: MemoryState::default(),
        }
    }

    /// Memory state of the collection.
    #[inline(always)]
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Memory policy of the collection.
    pub fn memory_policy(&self) -> &M {
        &self.policy
    }

    /// Creates a node handle for the node at `node_ptr` in the current memory state.
    #[inline(always)]
    pub fn node_idx(&self, node_ptr: NodePtr<V>) -> NodeIdx<V> {
        NodeIdx::new(self.state, node_ptr)
    }

    /// Resolves the node handle to the node pointer of this collection.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::ReorganizedCollection`] if the storage was compacted after the handle was created,
    /// * [`CollectionError::NodeOutOfBounds`] if the handle does not point into the storage of this collection,
    /// * [`CollectionError::ClearedNode`] if the node was removed.
    pub fn try_node_ptr(&self, node_idx: &NodeIdx<V>) -> Result<NodePtr<V>, CollectionError> {
        if !node_idx.is_in_state(self.state) {
            return Err(CollectionError::ReorganizedCollection);
        }

        let ptr = node_idx.node_ptr();
        if !self.core.contains_ptr(ptr) {
            return Err(CollectionError::NodeOutOfBounds);
        }

        match self.core.node(ptr).is_active() {
            true => Ok(ptr),
            false => Err(CollectionError::ClearedNode),
        }
    }

    /// Resolves the node handle to a node of this collection; see [`Self::try_node_ptr`] for the errors.
    pub fn try_node(&self, node_idx: &NodeIdx<V>) -> Result<&Node<V>, CollectionError> {
        self.try_node_ptr(node_idx).map(|ptr| self.core.node(ptr))
    }

    /// Returns a reference to the data of the node at `node_ptr`, None if it is closed.
    #[inline(always)]
    pub(crate) fn data(&self, node_ptr: NodePtr<V>) -> Option<&V::Item> {
        self.core.node(node_ptr).data()
    }

    /// Closes the node at `node_ptr`, returns its data and lets the memory policy
    /// reclaim closed nodes.
    pub(crate) fn close_and_reclaim(&mut self, node_ptr: NodePtr<V>) -> Option<V::Item> {
        let data = self.core.close(node_ptr);
        self.reclaim_by_policy();
        data
    }

    /// Walks the chain starting at `first` by following `next`, closes every node on the
    /// way, and lets the memory policy reclaim the storage.
    pub(crate) fn clear_chain<F>(&mut self, first: Option<NodePtr<V>>, next: F)
    where
        F: Fn(&Node<V>) -> Option<NodePtr<V>>,
    {
        let mut current = first;
        while let Some(ptr) = current {
            current = next(self.core.node(ptr));
            _ = self.core.close(ptr);
        }
        debug_assert_eq!(self.core.len(), 0);
        self.core.ends_mut().clear();
        self.reclaim_by_policy();
    }

    /// Manually reclaims the memory of closed nodes with the reclaimer `R`, regardless of
    /// the memory policy.
    ///
    /// Node handles created before this call are invalidated if there was any closed node
    /// to reclaim.
    pub fn reclaim_closed_nodes<R>(&mut self)
    where
        R: crate::MemoryReclaimer<V>,
    {
        let num_active_nodes = self.core.len();
        let num_used_nodes = self.core.nodes().len();
        let nodes_moved = R::reclaim_nodes(&mut self.core);
        self.core.nodes_mut().truncate(num_active_nodes);
        if nodes_moved || num_used_nodes > num_active_nodes {
            self.state = self.state.successor_state();
        }
    }

    fn reclaim_by_policy(&mut self) {
        if M::reclaim_closed_nodes(&mut self.core) {
            self.state = self.state.successor_state();
        }
    }
}
