use crate::{
    LinkedList, MemoryPolicy, SimpleLinkedList, SimpleLinkedPolicy,
    variant::{Doubly, Singly},
};

impl<T, K, M> FromIterator<T> for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    /// Adds the elements in iteration order; a queue dequeues them in the same order,
    /// a stack pops them in reverse.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T, K, M> Extend<T> for SimpleLinkedList<T, K, M>
where
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            _ = self.add_node(x);
        }
    }
}

impl<T, M> FromIterator<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T, M> Extend<T> for LinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            _ = self.add_last(x);
        }
    }
}
