use super::policy::{MemoryPolicy, MemoryReclaimer};
use crate::{CoreCol, Node, Variant};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;

/// Compacts the storage with the reclaimer `R` once the closed nodes exceed `1 / 2^D`
/// of the used storage positions.
///
/// | `D` | compacts below utilization |
/// |-----|----------------------------|
/// | 1   | 50%                        |
/// | 2   | 75%                        |
/// | 3   | 87.5%                      |
///
/// Queues, stacks and lists default to `D = 2`.
pub struct MemoryReclaimOnThreshold<const D: usize, V: Variant, R: MemoryReclaimer<V>>(
    PhantomData<fn() -> (V, R)>,
);

impl<const D: usize, V: Variant, R: MemoryReclaimer<V>> MemoryReclaimOnThreshold<D, V, R> {
    /// Whether `num_used` storage positions holding `num_active` active nodes are due for compaction.
    pub fn exceeds_threshold(num_used: usize, num_active: usize) -> bool {
        num_used - num_active > num_used >> D
    }
}

impl<const D: usize, V: Variant, R: MemoryReclaimer<V>> Default
    for MemoryReclaimOnThreshold<D, V, R>
{
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<const D: usize, V: Variant, R: MemoryReclaimer<V>> Clone
    for MemoryReclaimOnThreshold<D, V, R>
{
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<const D: usize, V: Variant, R: MemoryReclaimer<V>> core::fmt::Debug
    for MemoryReclaimOnThreshold<D, V, R>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MemoryReclaimOnThreshold<{}>", D)
    }
}

impl<const D: usize, V, R> MemoryPolicy<V> for MemoryReclaimOnThreshold<D, V, R>
where
    V: Variant,
    R: MemoryReclaimer<V>,
{
    fn reclaim_closed_nodes<P>(col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>,
    {
        let num_active = col.len();
        let num_used = col.nodes().len();
        if !Self::exceeds_threshold(num_used, num_active) {
            return false;
        }

        let nodes_moved = R::reclaim_nodes(col);
        col.nodes_mut().truncate(num_active);
        log::trace!(
            "reclaimed {} closed nodes; {} active nodes remain, nodes moved: {}",
            num_used - num_active,
            num_active,
            nodes_moved
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Doubly, DoublyReclaimer};
    use test_case::test_case;

    type Threshold<const D: usize> = MemoryReclaimOnThreshold<D, Doubly<u8>, DoublyReclaimer>;

    #[test_case(8, 8, false)]
    #[test_case(8, 6, false)]
    #[test_case(8, 5, true)]
    #[test_case(0, 0, false)]
    fn quarter_threshold(num_used: usize, num_active: usize, expected: bool) {
        assert_eq!(Threshold::<2>::exceeds_threshold(num_used, num_active), expected);
    }

    #[test]
    fn deeper_threshold_compacts_earlier() {
        assert!(!Threshold::<1>::exceeds_threshold(8, 5));
        assert!(Threshold::<3>::exceeds_threshold(8, 6));
    }
}
