use crate::{Node, Variant};
use core::fmt::Debug;

/// Raw link to a node stored in the pinned storage of a collection.
///
/// The storage never moves a node it holds unless the collection reclaims closed nodes,
/// in which case the reclaimer rewrites every link to a moved node. A pointer is therefore
/// valid as long as it is held by the collection owning the node; it is only dereferenced
/// there.
pub struct NodePtr<V: Variant>(*mut Node<V>);

// SAFETY: a pointer is followed only through the collection owning the node,
// which in turn is shared or sent only when its elements are.
unsafe impl<V: Variant> Send for NodePtr<V> where V::Item: Send {}

unsafe impl<V: Variant> Sync for NodePtr<V> where V::Item: Sync {}

impl<V: Variant> Clone for NodePtr<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Copy for NodePtr<V> {}

impl<V: Variant> PartialEq for NodePtr<V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.0, other.0)
    }
}

impl<V: Variant> Eq for NodePtr<V> {}

impl<V: Variant> core::hash::Hash for NodePtr<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<V: Variant> Debug for NodePtr<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NodePtr({:p})", self.0)
    }
}

impl<V: Variant> NodePtr<V> {
    /// Links to the node at `ptr`.
    pub fn new(ptr: *const Node<V>) -> Self {
        Self(ptr as *mut Node<V>)
    }

    /// Address of the node.
    #[inline(always)]
    pub fn ptr(&self) -> *const Node<V> {
        self.0
    }

    /// Mutable address of the node.
    #[inline(always)]
    pub fn ptr_mut(&self) -> *mut Node<V> {
        self.0
    }
}
