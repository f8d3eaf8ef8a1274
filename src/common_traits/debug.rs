use crate::{
    LinkedList, MemoryPolicy, Node, SelfRefCol, SimpleLinkedList, SimpleLinkedPolicy, Variant,
    variant::{Doubly, Singly},
};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<V, M, P> Debug for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V> + Debug,
    P: PinnedVec<Node<V>> + Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelfRefCol")
            .field("len", &self.len())
            .field("storage_len", &self.nodes().len())
            .field("policy", self.memory_policy())
            .field("state", &self.memory_state())
            .field("ends", self.ends())
            .field("nodes", self.nodes())
            .finish()
    }
}

impl<T, K, M> Debug for SimpleLinkedList<T, K, M>
where
    T: Debug,
    K: SimpleLinkedPolicy,
    M: MemoryPolicy<Singly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, M> Debug for LinkedList<T, M>
where
    T: Debug,
    M: MemoryPolicy<Doubly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
