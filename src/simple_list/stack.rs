use super::{DefaultSinglyMemory, LifoPolicy, SimpleLinkedList};
use crate::{CollectionError, MemoryPolicy, StackCapability, variant::Singly};

/// Last-in-first-out singly linked stack: pushes and pops at the head.
pub type Stack<T, M = DefaultSinglyMemory<T>> = SimpleLinkedList<T, LifoPolicy, M>;

impl<T, M> Stack<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Pushes the `value` to the top of the stack.
    pub fn push(&mut self, value: T) {
        _ = self.add_node(value);
    }

    /// Removes and returns the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.remove()
    }

    /// Removes and returns the top of the stack; None if the stack is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.try_remove()
    }
}

impl<T, M> StackCapability<T> for Stack<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn push(&mut self, value: T) {
        Self::push(self, value)
    }

    fn try_pop(&mut self) -> Option<T> {
        Self::try_pop(self)
    }
}
