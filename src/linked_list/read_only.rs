use super::{LinkedList, LinkedListEnumerator};
use crate::{
    CollectionError, Countable, Enumerable, EnumerationDirection, Indexable, MemoryPolicy,
    NodeIdx, Peekable, variant::Doubly,
};
use core::fmt::Debug;

/// Read-only view over a [`LinkedList`].
///
/// Every read is forwarded to the list; every mutation fails with [`CollectionError::ReadOnly`].
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let mut list = LinkedList::new();
/// list.add_last(1);
///
/// let view = ReadOnlyLinkedList::new(&list);
/// assert_eq!(view.first(), Ok(&1));
/// assert_eq!(view.add_last(2), Err(CollectionError::ReadOnly));
/// ```
pub struct ReadOnlyLinkedList<'a, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    inner: &'a LinkedList<T, M>,
}

impl<T, M> Clone for ReadOnlyLinkedList<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M> Copy for ReadOnlyLinkedList<'_, T, M> where M: MemoryPolicy<Doubly<T>> {}

impl<T: Debug, M> Debug for ReadOnlyLinkedList<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ReadOnlyLinkedList")
            .field(self.inner)
            .finish()
    }
}

impl<'a, T, M> ReadOnlyLinkedList<'a, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    /// Creates a read-only view of the `list`.
    pub fn new(list: &'a LinkedList<T, M>) -> Self {
        Self { inner: list }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// See [`LinkedList::first`].
    pub fn first(&self) -> Result<&'a T, CollectionError> {
        self.inner.first()
    }

    /// See [`LinkedList::last`].
    pub fn last(&self) -> Result<&'a T, CollectionError> {
        self.inner.last()
    }

    /// See [`LinkedList::try_get_first`].
    pub fn try_get_first(&self) -> Option<&'a T> {
        self.inner.try_get_first()
    }

    /// See [`LinkedList::try_get_last`].
    pub fn try_get_last(&self) -> Option<&'a T> {
        self.inner.try_get_last()
    }

    /// See [`LinkedList::node_value`].
    pub fn node_value(&self, node_idx: &NodeIdx<Doubly<T>>) -> Result<&'a T, CollectionError> {
        self.inner.node_value(node_idx)
    }

    /// See [`LinkedList::enumerator`].
    pub fn enumerator(&self, direction: EnumerationDirection) -> LinkedListEnumerator<'a, T, M> {
        self.inner.enumerator(direction)
    }

    /// See [`LinkedList::iter`].
    pub fn iter(&self) -> LinkedListEnumerator<'a, T, M> {
        self.inner.iter()
    }

    /// See [`LinkedList::iter_rev`].
    pub fn iter_rev(&self) -> LinkedListEnumerator<'a, T, M> {
        self.inner.iter_rev()
    }

    // rejected mutations

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn add_first(&self, _: T) -> Result<NodeIdx<Doubly<T>>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn add_last(&self, _: T) -> Result<NodeIdx<Doubly<T>>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn remove_first(&self) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn remove_last(&self) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn get_and_remove_first(&self) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn get_and_remove_last(&self) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_get_and_remove_first(&self) -> Result<Option<T>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_get_and_remove_last(&self) -> Result<Option<T>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`], even if the node is not in the list.
    pub fn add_before(
        &self,
        _: &NodeIdx<Doubly<T>>,
        _: T,
    ) -> Result<NodeIdx<Doubly<T>>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`], even if the node is not in the list.
    pub fn add_after(
        &self,
        _: &NodeIdx<Doubly<T>>,
        _: T,
    ) -> Result<NodeIdx<Doubly<T>>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`], even if the node is not in the list.
    pub fn remove(&self, _: &NodeIdx<Doubly<T>>) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn clear(&self) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    // queue and stack capabilities of the list

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn enqueue(&self, _: T) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn dequeue(&self) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_dequeue(&self) -> Result<Option<T>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn push(&self, _: T) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn pop(&self) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_pop(&self) -> Result<Option<T>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }
}

impl<T, M> Countable for ReadOnlyLinkedList<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn count(&self) -> usize {
        self.inner.len()
    }
}

impl<T, M> Peekable<T> for ReadOnlyLinkedList<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn try_peek(&self) -> Option<&T> {
        self.inner.try_get_first()
    }
}

impl<T, M> Indexable<T> for ReadOnlyLinkedList<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn get_at(&self, index: usize) -> Option<&T> {
        self.inner.get_at(index)
    }
}

impl<T, M> Enumerable<T> for ReadOnlyLinkedList<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    type Enumerator<'b>
        = LinkedListEnumerator<'b, T, M>
    where
        Self: 'b,
        T: 'b;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn mutations_leave_the_list_untouched() {
        let list: LinkedList<_> = (0..3).collect();
        let view = ReadOnlyLinkedList::new(&list);

        assert_eq!(view.add_first(9), Err(CollectionError::ReadOnly));
        assert_eq!(view.add_last(9), Err(CollectionError::ReadOnly));
        assert_eq!(view.remove_first(), Err(CollectionError::ReadOnly));
        assert_eq!(view.remove_last(), Err(CollectionError::ReadOnly));
        assert_eq!(view.get_and_remove_first(), Err(CollectionError::ReadOnly));
        assert_eq!(view.get_and_remove_last(), Err(CollectionError::ReadOnly));
        assert_eq!(view.try_get_and_remove_first(), Err(CollectionError::ReadOnly));
        assert_eq!(view.try_get_and_remove_last(), Err(CollectionError::ReadOnly));
        assert_eq!(view.clear(), Err(CollectionError::ReadOnly));

        let middle = list.find(&1).expect("1 is in the list");
        assert_eq!(view.add_before(&middle, 9), Err(CollectionError::ReadOnly));
        assert_eq!(view.add_after(&middle, 9), Err(CollectionError::ReadOnly));
        assert_eq!(view.remove(&middle), Err(CollectionError::ReadOnly));
        assert_eq!(list.node_value(&middle), Ok(&1));

        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(view.iter_rev().copied().collect::<Vec<_>>(), [2, 1, 0]);
        assert_eq!(view.get_at(1), Some(&1));
        assert_eq!(view.peek(), Ok(&0));
        assert_eq!(view.last(), Ok(&2));
    }
}
