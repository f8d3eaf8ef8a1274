use crate::{
    CollectionError, Countable, DefaultSinglyMemory, Enumerable, Enumerator, MemoryPolicy,
    Peekable, Queue, SimpleLinkedCollection, Stack, variant::Singly,
};
use core::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};
use std::vec::Vec;

/// Synchronized queue; see [`SynchronizedSimpleLinkedList`].
pub type SynchronizedQueue<T, M = DefaultSinglyMemory<T>> =
    SynchronizedSimpleLinkedList<T, Queue<T, M>>;

/// Synchronized stack; see [`SynchronizedSimpleLinkedList`].
pub type SynchronizedStack<T, M = DefaultSinglyMemory<T>> =
    SynchronizedSimpleLinkedList<T, Stack<T, M>>;

/// Singly linked collection guarded by a single mutex.
///
/// Every operation locks the entire collection for its duration. Operations never leave the
/// collection partially mutated; hence, a lock poisoned by a panicking thread is recovered
/// rather than propagated.
///
/// Peeked values are cloned out of the lock; [`Self::with_lock`] gives access to the
/// collection itself, for instance to enumerate it, while the lock is held.
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let queue = SynchronizedQueue::new(Queue::new());
///
/// std::thread::scope(|s| {
///     for t in 0..4 {
///         let queue = &queue;
///         s.spawn(move || {
///             for i in 0..100 {
///                 queue.enqueue(t * 100 + i);
///             }
///         });
///     }
/// });
///
/// assert_eq!(queue.count(), 400);
/// ```
pub struct SynchronizedSimpleLinkedList<T, L>
where
    L: SimpleLinkedCollection<T>,
{
    inner: Mutex<L>,
    phantom: PhantomData<fn(T) -> T>,
}

impl<T, L> Default for SynchronizedSimpleLinkedList<T, L>
where
    L: SimpleLinkedCollection<T> + Default,
{
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<T, L> SynchronizedSimpleLinkedList<T, L>
where
    L: SimpleLinkedCollection<T>,
{
    /// Wraps the `collection`.
    pub fn new(collection: L) -> Self {
        Self {
            inner: Mutex::new(collection),
            phantom: PhantomData,
        }
    }

    /// Unwraps the collection.
    pub fn into_inner(self) -> L {
        self.inner.into_inner().unwrap_or_else(|poisoned| {
            log::warn!("recovering the collection of a poisoned lock");
            poisoned.into_inner()
        })
    }

    fn lock(&self) -> MutexGuard<'_, L> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("recovering a poisoned lock of a synchronized collection");
            poisoned.into_inner()
        })
    }

    /// Runs `f` with shared access to the collection while holding the lock.
    pub fn with_lock<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        f(&self.lock())
    }

    /// Runs `f` with exclusive access to the collection while holding the lock.
    pub fn with_lock_mut<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        f(&mut self.lock())
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.lock().count()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns true if the wrapped collection rejects mutations.
    pub fn is_read_only(&self) -> bool {
        self.lock().is_read_only()
    }

    /// Returns a clone of the element which would be removed next.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    pub fn peek(&self) -> Result<T, CollectionError>
    where
        T: Clone,
    {
        self.lock().peek().cloned()
    }

    /// Returns a clone of the element which would be removed next; None if the collection is empty.
    pub fn try_peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().try_peek().cloned()
    }

    /// Adds the `value` to the wrapped collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ReadOnly`] if the wrapped collection is read-only.
    pub fn add(&self, value: T) -> Result<(), CollectionError> {
        self.lock().add(value)
    }

    /// Removes and returns the next element.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::ReadOnly`] if the wrapped collection is read-only,
    /// * [`CollectionError::EmptyCollection`] if the collection is empty.
    pub fn remove(&self) -> Result<T, CollectionError> {
        self.lock().remove()
    }

    /// Removes and returns the next element; Ok(None) if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ReadOnly`] if the wrapped collection is read-only.
    pub fn try_remove(&self) -> Result<Option<T>, CollectionError> {
        self.lock().try_remove()
    }

    /// Removes all elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ReadOnly`] if the wrapped collection is read-only.
    pub fn clear(&self) -> Result<(), CollectionError> {
        self.lock().clear()
    }

    /// Clones the elements in enumeration order while holding the lock.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
        L: Enumerable<T>,
    {
        self.with_lock(|col| {
            let mut values = Vec::with_capacity(col.count());
            let mut enumerator = col.enumerator();
            while let Ok(true) = enumerator.move_next() {
                if let Ok(Some(x)) = enumerator.current() {
                    values.push((*x).clone());
                }
            }
            values
        })
    }
}

impl<T, M> SynchronizedQueue<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Adds the `value` to the back of the queue.
    pub fn enqueue(&self, value: T) {
        self.lock().enqueue(value)
    }

    /// Removes and returns the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&self) -> Result<T, CollectionError> {
        self.lock().dequeue()
    }

    /// Removes and returns the front of the queue; None if the queue is empty.
    pub fn try_dequeue(&self) -> Option<T> {
        self.lock().try_dequeue()
    }
}

impl<T, M> SynchronizedStack<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Pushes the `value` to the top of the stack.
    pub fn push(&self, value: T) {
        self.lock().push(value)
    }

    /// Removes and returns the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn pop(&self) -> Result<T, CollectionError> {
        self.lock().pop()
    }

    /// Removes and returns the top of the stack; None if the stack is empty.
    pub fn try_pop(&self) -> Option<T> {
        self.lock().try_pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadOnlySimpleLinkedList;
    use std::thread;

    #[test]
    fn concurrent_dequeue_sees_every_element_once() {
        let queue = SynchronizedQueue::new((0..1000).collect::<Queue<u32>>());

        let mut seen: Vec<u32> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        let mut taken = Vec::new();
                        while let Some(x) = queue.try_dequeue() {
                            taken.push(x);
                        }
                        taken
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap_or_default())
                .collect()
        });

        seen.sort();
        assert_eq!(seen, (0..1000).collect::<Vec<_>>());
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let stack = SynchronizedStack::new(Stack::new());
        stack.push(1);

        let result = thread::scope(|s| {
            s.spawn(|| {
                stack.with_lock_mut(|x| {
                    x.push(2);
                    if !x.is_empty() {
                        panic!("poison the lock");
                    }
                })
            })
            .join()
        });
        assert!(result.is_err());

        assert_eq!(stack.peek(), Ok(2));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.into_inner().to_vec(), [1]);
    }

    #[test]
    fn wrapped_read_only_collection_rejects_mutations() {
        let queue: Queue<_> = [1, 2].into_iter().collect();
        let sync = SynchronizedSimpleLinkedList::new(ReadOnlySimpleLinkedList::new(&queue));

        assert!(sync.is_read_only());
        assert_eq!(sync.add(3), Err(CollectionError::ReadOnly));
        assert_eq!(sync.clear(), Err(CollectionError::ReadOnly));
        assert_eq!(sync.peek(), Ok(1));
        assert_eq!(sync.to_vec(), [1, 2]);
    }
}
