use crate::{NodePtr, Refs, Utilization, Variant, node::Node};
use orx_pinned_vec::PinnedVec;

/// Node storage of a linked collection together with its ends and its active length.
///
/// Nodes are pushed to a pinned vector and never move afterwards, except through
/// [`CoreCol::fill_hole`] while a memory reclaimer compacts the storage. Removed nodes
/// are closed in place; they stay in the storage as holes until then.
pub struct CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: P,
    ends: V::Ends,
    len: usize,
}

impl<V, P> Default for CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self {
            nodes: P::default(),
            ends: Refs::empty(),
            len: 0,
        }
    }
}

impl<V, P> CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    /// Number of active nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no node is active.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Storage use, holes included.
    pub fn utilization(&self) -> Utilization {
        let used = self.nodes.len();
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: used - self.len,
        }
    }

    /// The pinned node storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    #[inline(always)]
    pub(crate) fn nodes_mut(&mut self) -> &mut P {
        &mut self.nodes
    }

    /// Head and tail of the collection.
    #[inline(always)]
    pub fn ends(&self) -> &V::Ends {
        &self.ends
    }

    /// Mutable head and tail of the collection.
    #[inline(always)]
    pub fn ends_mut(&mut self) -> &mut V::Ends {
        &mut self.ends
    }

    /// Whether `node_ptr` points to a position of this storage.
    #[inline(always)]
    pub fn contains_ptr(&self, node_ptr: NodePtr<V>) -> bool {
        self.nodes.contains_ptr(node_ptr.ptr_mut())
    }

    /// Storage position of the node at `node_ptr`; None if it is not in this storage.
    #[inline(always)]
    pub fn position_of(&self, node_ptr: NodePtr<V>) -> Option<usize> {
        self.nodes.index_of_ptr(node_ptr.ptr_mut())
    }

    /// Pointer to the storage position `position`; None if out of bounds.
    #[inline(always)]
    pub fn ptr_at(&self, position: usize) -> Option<NodePtr<V>> {
        self.nodes
            .get_ptr(position)
            .map(|ptr| NodePtr::new(ptr as *const Node<V>))
    }

    // SAFETY for `node` and `node_mut`: pointers handed to these methods are created by
    // this collection from its own pinned storage, or validated by `SelfRefCol::try_node_ptr`.

    #[inline(always)]
    pub(crate) fn node(&self, node_ptr: NodePtr<V>) -> &Node<V> {
        unsafe { &*node_ptr.ptr() }
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, node_ptr: NodePtr<V>) -> &mut Node<V> {
        unsafe { &mut *node_ptr.ptr_mut() }
    }

    /// Stores a new unlinked node holding `data`.
    pub(crate) fn push(&mut self, data: V::Item) -> NodePtr<V> {
        let ptr = self.nodes.push_get_ptr(Node::new_free_node(data));
        self.len += 1;
        NodePtr::new(ptr as *const Node<V>)
    }

    /// Closes the node at `node_ptr`, leaving a hole; None if it was already closed.
    pub(crate) fn close(&mut self, node_ptr: NodePtr<V>) -> Option<V::Item> {
        let data = self.node_mut(node_ptr).close()?;
        self.len -= 1;
        Some(data)
    }

    /// Moves the active node at `occupied` into the hole at `vacant`, which lies before it.
    ///
    /// Links pointing to the moved node are left to the caller.
    pub fn fill_hole(&mut self, vacant: usize, occupied: usize) {
        debug_assert!(vacant < occupied);
        debug_assert!(self.nodes[vacant].is_closed());
        debug_assert!(self.nodes[occupied].is_active());

        self.nodes.swap(vacant, occupied);
    }
}
