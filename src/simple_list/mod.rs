mod enumerator;
mod policy;
mod queue;
mod read_only;
mod stack;

pub use enumerator::SimpleLinkedListEnumerator;
pub use policy::{FifoPolicy, LifoPolicy, SimpleLinkedPolicy};
pub use queue::Queue;
pub use read_only::ReadOnlySimpleLinkedList;
pub use stack::Stack;

use crate::{
    CollectionError, Countable, Enumerable, MemoryPolicy, MemoryReclaimOnThreshold, MemoryState,
    NodeIdx, Peekable, SelfRefCol, SimpleLinkedCollection, SinglyReclaimer, Utilization,
    variant::{HEAD, Singly},
};
use alloc::vec::Vec;
use core::marker::PhantomData;

/// Default memory policy of queues and stacks: closed nodes are reclaimed once they exceed
/// a quarter of the storage.
pub type DefaultSinglyMemory<T> = MemoryReclaimOnThreshold<2, Singly<T>, SinglyReclaimer>;

/// Singly linked list holding a head pointer and the number of elements.
///
/// Where a new element is linked in is decided by the policy `K`:
/// * [`FifoPolicy`] appends after the tail, which makes the list a [`Queue`];
/// * [`LifoPolicy`] links the new element before the head, which makes the list a [`Stack`].
///
/// Removal always takes the head. The removed node is cleared; a [`NodeIdx`] still pointing
/// at it resolves to [`CollectionError::ClearedNode`].
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
/// assert_eq!(queue.peek(), Ok(&'a'));
/// assert_eq!(queue.dequeue(), Ok('a'));
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.pop(), Ok('b'));
/// ```
pub struct SimpleLinkedList<T, K, M = DefaultSinglyMemory<T>>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    col: SelfRefCol<Singly<T>, M>,
    phantom: PhantomData<K>,
}

impl<T, K, M> Default for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    fn default() -> Self {
        Self {
            col: SelfRefCol::new(),
            phantom: PhantomData,
        }
    }
}

impl<T, K> SimpleLinkedList<T, K>
where
    K: SimpleLinkedPolicy,
{
    /// Creates a new empty list with the default memory policy.
    ///
    /// A list with another memory policy is created by `default`:
    ///
    /// ```rust
    /// use orx_linked_col::*;
    ///
    /// let mut queue = Queue::<char, MemoryReclaimNever>::default();
    /// queue.enqueue('x');
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, K, M> SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    /// Number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if the list is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    /// Node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.col.utilization()
    }

    /// Memory state of the underlying storage; it changes whenever nodes are moved to reclaim memory.
    pub fn memory_state(&self) -> MemoryState {
        self.col.memory_state()
    }

    /// Compacts the storage regardless of the memory policy.
    ///
    /// Node handles created before this call are invalidated if any node moves.
    pub fn reclaim_closed_nodes(&mut self) {
        self.col.reclaim_closed_nodes::<SinglyReclaimer>();
    }

    // add

    /// Adds the `value` as defined by the policy and returns the handle of its node.
    pub fn add_node(&mut self, value: T) -> NodeIdx<Singly<T>> {
        let node = self.col.push(value);
        let (head, run_item_added) = K::add_item::<T>(&mut self.col, node);
        self.col.ends_mut().set(HEAD, Some(head));
        if run_item_added {
            K::item_added::<T>(&mut self.col, node);
        }
        self.col.node_idx(node)
    }

    // peek

    /// Returns a reference to the element at the head; None if the list is empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.col.ends().get(HEAD).and_then(|head| self.col.data(head))
    }

    /// Returns a reference to the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.try_peek().ok_or(CollectionError::EmptyCollection)
    }

    // remove

    /// Removes and returns the element at the head; None if the list is empty.
    pub fn try_remove(&mut self) -> Option<T> {
        let head = self.col.ends().get(HEAD)?;
        match K::remove_item::<T>(&self.col, head) {
            Some(new_head) => self.col.ends_mut().set(HEAD, Some(new_head)),
            None => crate::Refs::clear(self.col.ends_mut()),
        }
        self.col.close_and_reclaim(head)
    }

    /// Removes and returns the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        self.try_remove().ok_or(CollectionError::EmptyCollection)
    }

    /// Removes all elements; every node is cleared.
    pub fn clear(&mut self) {
        log::debug!("clearing simple linked list with {} elements", self.len());
        let head = self.col.ends().get(HEAD);
        self.col.clear_chain(head, |node| node.next().get());
    }

    // nodes

    /// Handle of the head node; None if the list is empty.
    pub fn first_node(&self) -> Option<NodeIdx<Singly<T>>> {
        self.col.ends().get(HEAD).map(|head| self.col.node_idx(head))
    }

    /// Value of the node with the given handle.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ClearedNode`] if the node has been removed, or the other
    /// handle errors described in [`NodeIdx`].
    pub fn node_value(&self, node_idx: &NodeIdx<Singly<T>>) -> Result<&T, CollectionError> {
        self.col.try_node(node_idx)?.value()
    }

    /// Handle of the node following the node with the given handle; None if it is the last node.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ClearedNode`] if the node has been removed, or the other
    /// handle errors described in [`NodeIdx`].
    pub fn next_node(
        &self,
        node_idx: &NodeIdx<Singly<T>>,
    ) -> Result<Option<NodeIdx<Singly<T>>>, CollectionError> {
        let next = self.col.try_node(node_idx)?.next_checked()?.get();
        Ok(next.map(|ptr| self.col.node_idx(ptr)))
    }

    // enumeration

    /// Creates an enumerator walking the list from the head; i.e., in removal order.
    pub fn enumerator(&self) -> SimpleLinkedListEnumerator<'_, T, M> {
        SimpleLinkedListEnumerator::new(&self.col)
    }

    /// Iterator over the elements from the head; i.e., in removal order.
    pub fn iter(&self) -> SimpleLinkedListEnumerator<'_, T, M> {
        self.enumerator()
    }

    /// Clones the elements into a vector in removal order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clones the elements in removal order into `destination` starting at position `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ArgumentOutOfRange`] if `start` is beyond the destination
    /// or the destination has less than `self.len()` positions after `start`; the
    /// destination is not modified in this case.
    pub fn copy_to(&self, destination: &mut [T], start: usize) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        crate::common_traits::copy_to(self.iter(), self.len(), destination, start)
    }
}

impl<T, K, M> Countable for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, K, M> Peekable<T> for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    fn try_peek(&self) -> Option<&T> {
        Self::try_peek(self)
    }
}

impl<T, K, M> SimpleLinkedCollection<T> for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    fn is_read_only(&self) -> bool {
        false
    }

    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        _ = self.add_node(value);
        Ok(())
    }

    fn try_remove(&mut self) -> Result<Option<T>, CollectionError> {
        Ok(Self::try_remove(self))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Self::clear(self);
        Ok(())
    }
}

impl<T, K, M> Enumerable<T> for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    type Enumerator<'a>
        = SimpleLinkedListEnumerator<'a, T, M>
    where
        Self: 'a,
        T: 'a;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        Self::enumerator(self)
    }
}
