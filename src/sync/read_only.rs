use super::SynchronizedSimpleLinkedList;
use crate::{CollectionError, SimpleLinkedCollection};

/// Read-only view over a [`SynchronizedSimpleLinkedList`].
///
/// Reads take the lock of the shared collection and therefore observe its live state;
/// mutations fail with [`CollectionError::ReadOnly`].
pub struct ReadOnlySynchronized<'a, T, L>
where
    L: SimpleLinkedCollection<T>,
{
    inner: &'a SynchronizedSimpleLinkedList<T, L>,
}

impl<T, L> Clone for ReadOnlySynchronized<'_, T, L>
where
    L: SimpleLinkedCollection<T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, L> Copy for ReadOnlySynchronized<'_, T, L> where L: SimpleLinkedCollection<T> {}

impl<'a, T, L> ReadOnlySynchronized<'a, T, L>
where
    L: SimpleLinkedCollection<T>,
{
    /// Creates a read-only view of the shared collection.
    pub fn new(inner: &'a SynchronizedSimpleLinkedList<T, L>) -> Self {
        Self { inner }
    }

    /// Always true.
    pub fn is_read_only(&self) -> bool {
        true
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// See [`SynchronizedSimpleLinkedList::peek`].
    pub fn peek(&self) -> Result<T, CollectionError>
    where
        T: Clone,
    {
        self.inner.peek()
    }

    /// See [`SynchronizedSimpleLinkedList::try_peek`].
    pub fn try_peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.try_peek()
    }

    /// Runs `f` with shared access to the collection while holding the lock.
    pub fn with_lock<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        self.inner.with_lock(f)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn add(&self, _: T) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn remove(&self) -> Result<T, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn try_remove(&self) -> Result<Option<T>, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    /// Always fails with [`CollectionError::ReadOnly`].
    pub fn clear(&self) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

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
