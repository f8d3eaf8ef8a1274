use super::{NodePtr, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// A constant number of optional node references, such as the head and tail of a list.
pub struct RefsArray<const N: usize, V>([Option<NodePtr<V>>; N])
where
    V: Variant;

impl<const N: usize, V: Variant> Clone for RefsArray<N, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<const N: usize, V: Variant> Debug for RefsArray<N, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsArray").field(&self.0).finish()
    }
}

impl<const N: usize, V: Variant> Refs for RefsArray<N, V> {
    #[inline(always)]
    fn empty() -> Self {
        Self([None; N])
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.iter().all(|x| x.is_none())
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.0.iter_mut().for_each(|x| _ = x.take());
    }
}

impl<const N: usize, V: Variant> RefsArray<N, V> {
    /// Returns the node pointer at the `ref_idx` position of the references array.
    ///
    /// Returns None if the slot is empty or `ref_idx` is out of bounds.
    #[inline(always)]
    pub fn get(&self, ref_idx: usize) -> Option<NodePtr<V>> {
        self.0.get(ref_idx).copied().flatten()
    }

    /// Sets the the node pointer at the `ref_idx` position of the references array.
    ///
    /// Out-of-bounds `ref_idx` values are ignored.
    #[inline(always)]
    pub fn set(&mut self, ref_idx: usize, node_ptr: Option<NodePtr<V>>) {
        if let Some(slot) = self.0.get_mut(ref_idx) {
            *slot = node_ptr;
        }
    }

    /// Replaces every occurrence of `old` with `new`.
    pub fn replace(&mut self, old: NodePtr<V>, new: NodePtr<V>) {
        for slot in self.0.iter_mut().filter(|x| **x == Some(old)) {
            *slot = Some(new);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Doubly, Node};

    #[test]
    fn get_set_replace() {
        let a = Node::<Doubly<u32>>::new_free_node(1);
        let b = Node::<Doubly<u32>>::new_free_node(2);
        let pa = NodePtr::new(&a as *const _);
        let pb = NodePtr::new(&b as *const _);

        let mut ends = RefsArray::<2, Doubly<u32>>::empty();
        assert!(ends.is_empty());

        ends.set(0, Some(pa));
        ends.set(1, Some(pa));
        ends.set(7, Some(pb));
        assert_eq!(ends.get(0), Some(pa));
        assert_eq!(ends.get(7), None);

        ends.replace(pa, pb);
        assert_eq!(ends.get(0), Some(pb));
        assert_eq!(ends.get(1), Some(pb));

        ends.clear();
        assert!(ends.is_empty());
    }
}
