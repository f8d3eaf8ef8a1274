//! Small capability traits composed by the collections instead of a deep interface hierarchy.

use crate::CollectionError;
use alloc::vec::Vec;

/// A collection that knows its number of elements.
pub trait Countable {
    /// Number of elements in the collection.
    fn count(&self) -> usize;

    /// Returns true if the collection has no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// A collection exposing the element which would be removed next.
pub trait Peekable<T>: Countable {
    /// Returns a reference to the next element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    fn peek(&self) -> Result<&T, CollectionError> {
        self.try_peek().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns a reference to the next element without removing it; None if the collection is empty.
    fn try_peek(&self) -> Option<&T>;
}

/// A collection with random access by position.
pub trait Indexable<T>: Countable {
    /// Returns the element at the `index`-th position; None if out of bounds.
    fn get_at(&self, index: usize) -> Option<&T>;
}

/// A collection which can be walked by an [`Enumerator`](crate::Enumerator).
pub trait Enumerable<T> {
    /// Type of the enumerator.
    type Enumerator<'a>: crate::Enumerator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Creates a new enumerator in the not-started state.
    fn enumerator(&self) -> Self::Enumerator<'_>;
}

/// The polymorphic contract of singly linked collections; a queue and a stack differ only by
/// where `add` inserts.
///
/// Mutating methods of read-only implementors fail with [`CollectionError::ReadOnly`].
pub trait SimpleLinkedCollection<T>: Peekable<T> {
    /// Returns true if mutations are rejected.
    fn is_read_only(&self) -> bool;

    /// Adds the `value` to the collection.
    fn add(&mut self, value: T) -> Result<(), CollectionError>;

    /// Removes and returns the next element.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::ReadOnly`] if the collection is read-only,
    /// * [`CollectionError::EmptyCollection`] if the collection is empty.
    fn remove(&mut self) -> Result<T, CollectionError> {
        self.try_remove()?.ok_or(CollectionError::EmptyCollection)
    }

    /// Removes and returns the next element; Ok(None) if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ReadOnly`] if the collection is read-only.
    fn try_remove(&mut self) -> Result<Option<T>, CollectionError>;

    /// Removes all elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ReadOnly`] if the collection is read-only.
    fn clear(&mut self) -> Result<(), CollectionError>;
}

/// First-in-first-out access.
pub trait QueueCapability<T>: Peekable<T> {
    /// Adds the `value` to the back of the queue.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the front of the queue; None if empty.
    fn try_dequeue(&mut self) -> Option<T>;

    /// Removes and returns the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.try_dequeue().ok_or(CollectionError::EmptyCollection)
    }
}

/// Last-in-first-out access.
pub trait StackCapability<T>: Peekable<T> {
    /// Pushes the `value` to the top of the stack.
    fn push(&mut self, value: T);

    /// Removes and returns the top of the stack; None if empty.
    fn try_pop(&mut self) -> Option<T>;

    /// Removes and returns the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    fn pop(&mut self) -> Result<T, CollectionError> {
        self.try_pop().ok_or(CollectionError::EmptyCollection)
    }
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Indexable<T> for [T] {
    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Indexable<T> for Vec<T> {
    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Indexable<T> for [T; N] {
    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
