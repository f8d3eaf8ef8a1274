use crate::{CollectionError, Refs, Variant};
use core::fmt::Debug;

/// Node of a linked collection.
///
/// A node is *active* while it holds its value. Removing the node from its collection
/// *closes* it: the value is taken out and its links are cleared. Reading the value or
/// the links of a closed node through the checked accessors fails with
/// [`CollectionError::ClearedNode`].
pub struct Node<V>
where
    V: Variant,
{
    data: Option<V::Item>,
    prev: V::Prev,
    next: V::Next,
}

unsafe impl<V: Variant> Send for Node<V> where V::Item: Send {}

unsafe impl<V: Variant> Sync for Node<V> where V::Item: Sync {}

impl<V> Node<V>
where
    V: Variant,
{
    /// Creates a new active node with the given `data` but with no connections.
    pub fn new_free_node(data: V::Item) -> Self {
        Self {
            data: Some(data),
            prev: Refs::empty(),
            next: Refs::empty(),
        }
    }

    // ref

    /// Returns a reference to the data of the node; None if the node is already closed.
    pub fn data(&self) -> Option<&V::Item> {
        self.data.as_ref()
    }

    /// Returns a reference to the value of the node.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ClearedNode`] if the node is closed.
    pub fn value(&self) -> Result<&V::Item, CollectionError> {
        self.data.as_ref().ok_or(CollectionError::ClearedNode)
    }

    /// Returns a reference to the previous references.
    pub fn prev(&self) -> &V::Prev {
        &self.prev
    }

    /// Returns a reference to the next references.
    pub fn next(&self) -> &V::Next {
        &self.next
    }

    /// Returns the previous references; fails with [`CollectionError::ClearedNode`] if the node is closed.
    pub fn prev_checked(&self) -> Result<&V::Prev, CollectionError> {
        match self.is_active() {
            true => Ok(&self.prev),
            false => Err(CollectionError::ClearedNode),
        }
    }

    /// Returns the next references; fails with [`CollectionError::ClearedNode`] if the node is closed.
    pub fn next_checked(&self) -> Result<&V::Next, CollectionError> {
        match self.is_active() {
            true => Ok(&self.next),
            false => Err(CollectionError::ClearedNode),
        }
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    /// Returns a mutable reference to the previous references.
    pub fn prev_mut(&mut self) -> &mut V::Prev {
        &mut self.prev
    }

    /// Returns a mutable reference to the next references.
    pub fn next_mut(&mut self) -> &mut V::Next {
        &mut self.next
    }

    /// Closes the node and returns its data, and clears its connections.
    ///
    /// Returns None if the node was already closed.
    pub fn close(&mut self) -> Option<V::Item> {
        self.prev.clear();
        self.next.clear();
        self.data.take()
    }
}

impl<V: Variant> Debug for Node<V>
where
    V::Item: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodePtr, Singly};

    #[test]
    fn closed_node_rejects_reads() {
        let mut other = Node::<Singly<char>>::new_free_node('b');
        let mut node = Node::<Singly<char>>::new_free_node('a');
        node.next_mut().set_some(NodePtr::new(&mut other as *mut _));

        assert_eq!(node.value(), Ok(&'a'));
        assert!(node.next_checked().is_ok_and(|n| n.get().is_some()));

        assert_eq!(node.close(), Some('a'));
        assert!(node.is_closed());
        assert_eq!(node.value(), Err(CollectionError::ClearedNode));
        assert!(matches!(
            node.next_checked(),
            Err(CollectionError::ClearedNode)
        ));
        assert!(node.next().get().is_none());

        assert_eq!(node.close(), None);
        assert_eq!(other.close(), Some('b'));
    }
}
