use super::NodePtr;
use crate::variant::Variant;
use core::fmt::Debug;

/// Shape of the links a node, or a collection's ends, may hold.
///
/// A linked collection picks one shape per link direction through its [`Variant`]:
/// a singly linked node has no backward link, a doubly linked node has one link each way,
/// and both keep their head and tail in a fixed size array.
pub trait Refs: Clone + Debug {
    /// Links pointing nowhere.
    fn empty() -> Self;

    /// Whether no link is set.
    fn is_empty(&self) -> bool;

    /// Unsets every link.
    fn clear(&mut self);
}

/// Absent link direction, such as the backward link of a singly linked node.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefsNone;

impl Refs for RefsNone {
    #[inline(always)]
    fn empty() -> Self {
        Self
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline(always)]
    fn clear(&mut self) {}
}

/// Link to at most one neighbor.
pub struct RefsSingle<V: Variant>(Option<NodePtr<V>>);

impl<V: Variant> Clone for RefsSingle<V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<V: Variant> Debug for RefsSingle<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(ptr) => write!(f, "-> {:?}", ptr),
            None => write!(f, "-> none"),
        }
    }
}

impl<V: Variant> Refs for RefsSingle<V> {
    #[inline(always)]
    fn empty() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.0 = None;
    }
}

impl<V: Variant> RefsSingle<V> {
    /// The linked neighbor, if any.
    #[inline(always)]
    pub fn get(&self) -> Option<NodePtr<V>> {
        self.0
    }

    /// Links to `neighbor`, or unlinks when it is None.
    #[inline(always)]
    pub fn set(&mut self, neighbor: Option<NodePtr<V>>) {
        self.0 = neighbor;
    }

    /// Links to `neighbor`.
    #[inline(always)]
    pub fn set_some(&mut self, neighbor: NodePtr<V>) {
        self.0 = Some(neighbor);
    }
}
