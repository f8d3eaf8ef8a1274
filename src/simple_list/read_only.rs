use crate::{CollectionError, Countable, Enumerable, Peekable, SimpleLinkedCollection};
use core::fmt::Debug;

/// Read-only view over a singly linked collection.
///
/// Reads are forwarded to the wrapped collection, so the view reflects every change made
/// through the owner once the borrow ends. Mutations through [`SimpleLinkedCollection`]
/// fail with [`CollectionError::ReadOnly`] and leave the collection untouched.
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
///
/// let mut view = ReadOnlySimpleLinkedList::new(&queue);
/// assert!(view.is_read_only());
/// assert_eq!(view.peek(), Ok(&1));
/// assert_eq!(view.add(2), Err(CollectionError::ReadOnly));
/// assert_eq!(view.count(), 1);
/// ```
pub struct ReadOnlySimpleLinkedList<'a, L: ?Sized> {
    inner: &'a L,
}

impl<L: ?Sized> Clone for ReadOnlySimpleLinkedList<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for ReadOnlySimpleLinkedList<'_, L> {}

impl<L: ?Sized + Debug> Debug for ReadOnlySimpleLinkedList<'_, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ReadOnlySimpleLinkedList")
            .field(&self.inner)
            .finish()
    }
}

impl<'a, L: ?Sized> ReadOnlySimpleLinkedList<'a, L> {
    /// Creates a read-only view of `inner`.
    pub fn new(inner: &'a L) -> Self {
        Self { inner }
    }

    /// Returns the wrapped collection.
    pub fn inner(&self) -> &'a L {
        self.inner
    }

    // queue and stack mutations of the wrapped collection; all rejected

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn enqueue<T>(&self, _: T) -> Result<(), CollectionError>
    where
        L: Peekable<T>,
    {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`], also when the collection is empty.
    pub fn dequeue<T>(&self) -> Result<T, CollectionError>
    where
        L: Peekable<T>,
    {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_dequeue<T>(&self) -> Result<Option<T>, CollectionError>
    where
        L: Peekable<T>,
    {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn push<T>(&self, _: T) -> Result<(), CollectionError>
    where
        L: Peekable<T>,
    {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`], also when the collection is empty.
    pub fn pop<T>(&self) -> Result<T, CollectionError>
    where
        L: Peekable<T>,
    {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_pop<T>(&self) -> Result<Option<T>, CollectionError>
    where
        L: Peekable<T>,
    {
        Err(CollectionError::ReadOnly)
    }
}

impl<L: Countable + ?Sized> Countable for ReadOnlySimpleLinkedList<'_, L> {
    fn count(&self) -> usize {
        self.inner.count()
    }
}

impl<T, L: Peekable<T> + ?Sized> Peekable<T> for ReadOnlySimpleLinkedList<'_, L> {
    fn try_peek(&self) -> Option<&T> {
        self.inner.try_peek()
    }
}

impl<T, L: Peekable<T> + ?Sized> SimpleLinkedCollection<T> for ReadOnlySimpleLinkedList<'_, L> {
    fn is_read_only(&self) -> bool {
        true
    }

    fn add(&mut self, _: T) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    fn remove(&mut self) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    fn try_remove(&mut self) -> Result<Option<T>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }
}

impl<T, L: Enumerable<T> + ?Sized> Enumerable<T> for ReadOnlySimpleLinkedList<'_, L> {
    type Enumerator<'b>
        = L::Enumerator<'b>
    where
        Self: 'b,
        T: 'b;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        self.inner.enumerator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enumerator, Queue, Stack};
    use test_case::test_case;

    fn view_of<L: SimpleLinkedCollection<u32>>(col: &L) -> ReadOnlySimpleLinkedList<'_, L> {
        ReadOnlySimpleLinkedList::new(col)
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(5)]
    fn every_mutation_is_rejected(len: u32) {
        let mut queue = Queue::new();
        (0..len).for_each(|x| queue.enqueue(x));

        let mut view = view_of(&queue);
        assert_eq!(view.add(42), Err(CollectionError::ReadOnly));
        assert_eq!(view.remove(), Err(CollectionError::ReadOnly));
        assert_eq!(view.try_remove(), Err(CollectionError::ReadOnly));
        assert_eq!(SimpleLinkedCollection::clear(&mut view), Err(CollectionError::ReadOnly));
        assert_eq!(view.enqueue(42), Err(CollectionError::ReadOnly));
        assert_eq!(view.dequeue(), Err::<u32, _>(CollectionError::ReadOnly));
        assert_eq!(view.try_dequeue(), Err::<Option<u32>, _>(CollectionError::ReadOnly));
        assert_eq!(view.count(), len as usize);

        assert_eq!(queue.to_vec(), (0..len).collect::<alloc::vec::Vec<_>>());
    }

    #[test]
    fn reads_reflect_the_owner() {
        let mut stack = Stack::new();
        stack.push('a');
        assert_eq!(view_char(&stack).peek(), Ok(&'a'));

        stack.push('b');
        let view = ReadOnlySimpleLinkedList::new(&stack);
        assert_eq!(view.peek(), Ok(&'b'));
        assert_eq!(view.count(), 2);

        let mut enumerator = view.enumerator();
        assert_eq!(enumerator.move_next(), Ok(true));
        assert_eq!(enumerator.current(), Ok(Some(&&'b')));
    }

    fn view_char<L: Peekable<char>>(col: &L) -> ReadOnlySimpleLinkedList<'_, L> {
        ReadOnlySimpleLinkedList::new(col)
    }
}
