use super::{DefaultSinglyMemory, FifoPolicy, SimpleLinkedList};
use crate::{CollectionError, MemoryPolicy, QueueCapability, variant::Singly};

/// First-in-first-out singly linked queue: enqueues after the tail, dequeues from the head.
pub type Queue<T, M = DefaultSinglyMemory<T>> = SimpleLinkedList<T, FifoPolicy, M>;

impl<T, M> Queue<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Adds the `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        _ = self.add_node(value);
    }

    /// Removes and returns the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.remove()
    }

    /// Removes and returns the front of the queue; None if the queue is empty.
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.try_remove()
    }
}

impl<T, M> QueueCapability<T> for Queue<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn enqueue(&mut self, value: T) {
        Self::enqueue(self, value)
    }

    fn try_dequeue(&mut self) -> Option<T> {
        Self::try_dequeue(self)
    }
}
