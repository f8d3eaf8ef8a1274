mod enumerator;
mod read_only;

pub use enumerator::LinkedListEnumerator;
pub use read_only::ReadOnlyLinkedList;

use crate::{
    CollectionError, Countable, DoublyReclaimer, Enumerable, EnumerationDirection, Indexable,
    MemoryPolicy, MemoryReclaimOnThreshold, MemoryState, NodeIdx, NodePtr, Peekable,
    QueueCapability, SelfRefCol, StackCapability, Utilization,
    variant::{Doubly, HEAD, TAIL},
};
use alloc::vec::Vec;

/// Default memory policy of the linked list: closed nodes are reclaimed once they exceed
/// a quarter of the storage.
pub type DefaultDoublyMemory<T> = MemoryReclaimOnThreshold<2, Doubly<T>, DoublyReclaimer>;

/// Doubly linked list holding its first and last nodes.
///
/// Elements can be added and removed at both ends in constant time, and next to any node
/// given its [`NodeIdx`]. For every interior node `n`, `n.next.prev == n` and
/// `n.prev.next == n`; the first node has no previous and the last node has no next.
///
/// The same list can be consumed as a queue through [`QueueCapability`] and as a stack
/// through [`StackCapability`]:
/// * `enqueue` adds last, `dequeue` removes first;
/// * `push` adds first, `pop` removes first.
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let mut list = LinkedList::new();
/// list.add_last(2);
/// list.add_last(3);
/// list.add_first(1);
///
/// assert_eq!(list.first(), Ok(&1));
/// assert_eq!(list.last(), Ok(&3));
///
/// let forward: Vec<_> = list.iter().copied().collect();
/// assert_eq!(forward, [1, 2, 3]);
///
/// let backward: Vec<_> = list.iter_rev().copied().collect();
/// assert_eq!(backward, [3, 2, 1]);
///
/// assert_eq!(list.get_and_remove_last(), Ok(3));
/// assert_eq!(list.len(), 2);
/// ```
pub struct LinkedList<T, M = DefaultDoublyMemory<T>>
where
    M: MemoryPolicy<Doubly<T>>,
{
    col: SelfRefCol<Doubly<T>, M>,
}

impl<T, M> Default for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn default() -> Self {
        Self {
            col: SelfRefCol::new(),
        }
    }
}

impl<T> LinkedList<T> {
    /// Creates a new empty list with the default memory policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M> LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
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
        self.col.reclaim_closed_nodes::<DoublyReclaimer>();
    }

    // add

    /// Adds the `value` to the front of the list and returns the handle of its node.
    pub fn add_first(&mut self, value: T) -> NodeIdx<Doubly<T>> {
        let first = self.col.ends().get(HEAD);
        let node = self.insert(value, None, first);
        self.col.node_idx(node)
    }

    /// Adds the `value` to the back of the list and returns the handle of its node.
    pub fn add_last(&mut self, value: T) -> NodeIdx<Doubly<T>> {
        let last = self.col.ends().get(TAIL);
        let node = self.insert(value, last, None);
        self.col.node_idx(node)
    }

    /// Adds the `value` right before the node with the given handle.
    ///
    /// # Errors
    ///
    /// Fails with the handle errors described in [`NodeIdx`]; the list is not modified in this case.
    pub fn add_before(
        &mut self,
        node_idx: &NodeIdx<Doubly<T>>,
        value: T,
    ) -> Result<NodeIdx<Doubly<T>>, CollectionError> {
        let next = self.col.try_node_ptr(node_idx)?;
        let prev = self.col.node(next).prev().get();
        let node = self.insert(value, prev, Some(next));
        Ok(self.col.node_idx(node))
    }

    /// Adds the `value` right after the node with the given handle.
    ///
    /// # Errors
    ///
    /// Fails with the handle errors described in [`NodeIdx`]; the list is not modified in this case.
    pub fn add_after(
        &mut self,
        node_idx: &NodeIdx<Doubly<T>>,
        value: T,
    ) -> Result<NodeIdx<Doubly<T>>, CollectionError> {
        let prev = self.col.try_node_ptr(node_idx)?;
        let next = self.col.node(prev).next().get();
        let node = self.insert(value, Some(prev), next);
        Ok(self.col.node_idx(node))
    }

    // get

    /// Returns a reference to the first element; None if the list is empty.
    pub fn try_get_first(&self) -> Option<&T> {
        self.col.ends().get(HEAD).and_then(|x| self.col.data(x))
    }

    /// Returns a reference to the last element; None if the list is empty.
    pub fn try_get_last(&self) -> Option<&T> {
        self.col.ends().get(TAIL).and_then(|x| self.col.data(x))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn first(&self) -> Result<&T, CollectionError> {
        self.try_get_first().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn last(&self) -> Result<&T, CollectionError> {
        self.try_get_last().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns the element at the `index`-th position from the front; None if out of bounds.
    ///
    /// Time complexity is linear in `index`.
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    // remove

    /// Removes and returns the first element; None if the list is empty.
    pub fn try_get_and_remove_first(&mut self) -> Option<T> {
        let first = self.col.ends().get(HEAD)?;
        self.unlink(first)
    }

    /// Removes and returns the last element; None if the list is empty.
    pub fn try_get_and_remove_last(&mut self) -> Option<T> {
        let last = self.col.ends().get(TAIL)?;
        self.unlink(last)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn get_and_remove_first(&mut self) -> Result<T, CollectionError> {
        self.try_get_and_remove_first()
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn get_and_remove_last(&mut self) -> Result<T, CollectionError> {
        self.try_get_and_remove_last()
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Removes the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<(), CollectionError> {
        self.get_and_remove_first().map(|_| ())
    }

    /// Removes the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<(), CollectionError> {
        self.get_and_remove_last().map(|_| ())
    }

    /// Removes the node with the given handle and returns its value.
    ///
    /// # Errors
    ///
    /// Fails with the handle errors described in [`NodeIdx`]; a handle of an already
    /// removed node fails with [`CollectionError::ClearedNode`] when no reorganization
    /// happened in between.
    pub fn remove(&mut self, node_idx: &NodeIdx<Doubly<T>>) -> Result<T, CollectionError> {
        let ptr = self.col.try_node_ptr(node_idx)?;
        self.unlink(ptr).ok_or(CollectionError::ClearedNode)
    }

    /// Removes all elements; every node is cleared.
    pub fn clear(&mut self) {
        log::debug!("clearing linked list with {} elements", self.len());
        let first = self.col.ends().get(HEAD);
        self.col.clear_chain(first, |node| node.next().get());
    }

    // nodes

    /// Handle of the first node; None if the list is empty.
    pub fn first_node(&self) -> Option<NodeIdx<Doubly<T>>> {
        self.col.ends().get(HEAD).map(|x| self.col.node_idx(x))
    }

    /// Handle of the last node; None if the list is empty.
    pub fn last_node(&self) -> Option<NodeIdx<Doubly<T>>> {
        self.col.ends().get(TAIL).map(|x| self.col.node_idx(x))
    }

    /// Value of the node with the given handle.
    ///
    /// # Errors
    ///
    /// Fails with the handle errors described in [`NodeIdx`].
    pub fn node_value(&self, node_idx: &NodeIdx<Doubly<T>>) -> Result<&T, CollectionError> {
        self.col.try_node(node_idx)?.value()
    }

    /// Handle of the node following the node with the given handle; None if it is the last node.
    ///
    /// # Errors
    ///
    /// Fails with the handle errors described in [`NodeIdx`].
    pub fn next_node(
        &self,
        node_idx: &NodeIdx<Doubly<T>>,
    ) -> Result<Option<NodeIdx<Doubly<T>>>, CollectionError> {
        let next = self.col.try_node(node_idx)?.next_checked()?.get();
        Ok(next.map(|x| self.col.node_idx(x)))
    }

    /// Handle of the node preceding the node with the given handle; None if it is the first node.
    ///
    /// # Errors
    ///
    /// Fails with the handle errors described in [`NodeIdx`].
    pub fn previous_node(
        &self,
        node_idx: &NodeIdx<Doubly<T>>,
    ) -> Result<Option<NodeIdx<Doubly<T>>>, CollectionError> {
        let prev = self.col.try_node(node_idx)?.prev_checked()?.get();
        Ok(prev.map(|x| self.col.node_idx(x)))
    }

    /// Handle of the first node, from the front, holding a value equal to `value`; None if absent.
    pub fn find(&self, value: &T) -> Option<NodeIdx<Doubly<T>>>
    where
        T: PartialEq,
    {
        let mut current = self.col.ends().get(HEAD);
        while let Some(ptr) = current {
            let node = self.col.node(ptr);
            if node.data() == Some(value) {
                return Some(self.col.node_idx(ptr));
            }
            current = node.next().get();
        }
        None
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    // enumeration

    /// Creates an enumerator walking the list from the first element forward when
    /// `direction` is [`EnumerationDirection::Fifo`], from the last element backward otherwise.
    pub fn enumerator(&self, direction: EnumerationDirection) -> LinkedListEnumerator<'_, T, M> {
        LinkedListEnumerator::new(&self.col, direction)
    }

    /// Iterator over the elements from the first to the last.
    pub fn iter(&self) -> LinkedListEnumerator<'_, T, M> {
        self.enumerator(EnumerationDirection::Fifo)
    }

    /// Iterator over the elements from the last to the first.
    pub fn iter_rev(&self) -> LinkedListEnumerator<'_, T, M> {
        self.enumerator(EnumerationDirection::Lifo)
    }

    /// Clones the elements into a vector from the first to the last.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clones the elements from the first to the last into `destination` starting at position `start`.
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

    // helpers

    fn insert(
        &mut self,
        value: T,
        prev: Option<NodePtr<Doubly<T>>>,
        next: Option<NodePtr<Doubly<T>>>,
    ) -> NodePtr<Doubly<T>> {
        let node = self.col.push(value);

        {
            let links = self.col.node_mut(node);
            links.prev_mut().set(prev);
            links.next_mut().set(next);
        }

        match prev {
            Some(prev) => self.col.node_mut(prev).next_mut().set_some(node),
            None => self.col.ends_mut().set(HEAD, Some(node)),
        }

        match next {
            Some(next) => self.col.node_mut(next).prev_mut().set_some(node),
            None => self.col.ends_mut().set(TAIL, Some(node)),
        }

        node
    }

    fn unlink(&mut self, node: NodePtr<Doubly<T>>) -> Option<T> {
        let (prev, next) = {
            let node = self.col.node(node);
            (node.prev().get(), node.next().get())
        };

        match prev {
            Some(prev) => self.col.node_mut(prev).next_mut().set(next),
            None => self.col.ends_mut().set(HEAD, next),
        }

        match next {
            Some(next) => self.col.node_mut(next).prev_mut().set(prev),
            None => self.col.ends_mut().set(TAIL, prev),
        }

        self.col.close_and_reclaim(node)
    }
}

impl<T, M> Countable for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, M> Peekable<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn try_peek(&self) -> Option<&T> {
        self.try_get_first()
    }
}

impl<T, M> Indexable<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn get_at(&self, index: usize) -> Option<&T> {
        Self::get_at(self, index)
    }
}

impl<T, M> QueueCapability<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn enqueue(&mut self, value: T) {
        _ = self.add_last(value);
    }

    fn try_dequeue(&mut self) -> Option<T> {
        self.try_get_and_remove_first()
    }
}

impl<T, M> StackCapability<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn push(&mut self, value: T) {
        _ = self.add_first(value);
    }

    fn try_pop(&mut self) -> Option<T> {
        self.try_get_and_remove_first()
    }
}

impl<T, M> Enumerable<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    type Enumerator<'a>
        = LinkedListEnumerator<'a, T, M>
    where
        Self: 'a,
        T: 'a;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryReclaimNever, Node, Refs};
    use test_case::test_case;

    fn assert_links<T, M: MemoryPolicy<Doubly<T>>>(list: &LinkedList<T, M>) {
        let mut prev: Option<NodePtr<Doubly<T>>> = None;
        let mut current = list.col.ends().get(HEAD);
        let mut count = 0;

        while let Some(ptr) = current {
            let node: &Node<Doubly<T>> = list.col.node(ptr);
            assert!(node.is_active());
            assert_eq!(node.prev().get(), prev);
            prev = Some(ptr);
            current = node.next().get();
            count += 1;
        }

        assert_eq!(list.col.ends().get(TAIL), prev);
        assert_eq!(count, list.len());
    }

    #[test]
    fn links_stay_consistent() {
        let mut list = LinkedList::<u32, MemoryReclaimNever>::default();
        assert_links(&list);

        let b = list.add_last(2);
        assert_links(&list);
        let _ = list.add_first(0);
        let _ = list.add_before(&b, 1);
        let _ = list.add_after(&b, 3);
        assert_links(&list);
        assert_eq!(list.to_vec(), [0, 1, 2, 3]);

        assert_eq!(list.remove(&b), Ok(2));
        assert_links(&list);
        assert_eq!(list.remove(&b), Err(CollectionError::ClearedNode));

        assert_eq!(list.get_and_remove_last(), Ok(3));
        assert_eq!(list.get_and_remove_first(), Ok(0));
        assert_links(&list);
        assert_eq!(list.to_vec(), [1]);

        assert_eq!(list.get_and_remove_first(), Ok(1));
        assert_links(&list);
        assert!(list.col.ends().is_empty());
    }

    #[test_case(EnumerationDirection::Fifo, &[0, 1, 2, 3, 4])]
    #[test_case(EnumerationDirection::Lifo, &[4, 3, 2, 1, 0])]
    fn enumerate_both_ways(direction: EnumerationDirection, expected: &[u32]) {
        let list: LinkedList<_> = (0..5).collect();
        let values: Vec<_> = list.enumerator(direction).copied().collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn reclaim_keeps_links_and_invalidates_handles() {
        let mut list = LinkedList::<u32, MemoryReclaimNever>::default();
        let nodes: Vec<_> = (0..8).map(|x| list.add_last(x)).collect();
        for idx in nodes.iter().step_by(2) {
            _ = list.remove(idx);
        }
        assert_eq!(list.utilization().num_closed_nodes, 4);

        list.reclaim_closed_nodes();
        assert_links(&list);
        assert_eq!(list.utilization().num_closed_nodes, 0);
        assert_eq!(list.to_vec(), [1, 3, 5, 7]);
        assert_eq!(
            list.node_value(&nodes[7]),
            Err(CollectionError::ReorganizedCollection)
        );

        let idx = list.find(&5);
        assert_eq!(idx.map(|x| list.node_value(&x).copied()), Some(Ok(5)));
    }

    #[test]
    fn capabilities_share_storage() {
        let mut list = LinkedList::new();
        QueueCapability::enqueue(&mut list, 'b');
        StackCapability::push(&mut list, 'a');
        QueueCapability::enqueue(&mut list, 'c');
        assert_eq!(Peekable::peek(&list), Ok(&'a'));
        assert_eq!(Indexable::get_at(&list, 2), Some(&'c'));

        assert_eq!(StackCapability::pop(&mut list), Ok('a'));
        assert_eq!(QueueCapability::dequeue(&mut list), Ok('b'));
        assert_eq!(QueueCapability::try_dequeue(&mut list), Some('c'));
        assert_eq!(StackCapability::pop(&mut list), Err(CollectionError::EmptyCollection));
    }
}
