use super::policy::MemoryReclaimer;
use crate::{CoreCol, Node, variant::Doubly};
use orx_pinned_vec::PinnedVec;

/// Reclaimer of doubly linked lists.
///
/// Every vacant position is filled with the right-most active node; both neighbors of a
/// moved node are reachable through its own links.
#[derive(Clone, Copy, Default, Debug)]
pub struct DoublyReclaimer;

impl<T> MemoryReclaimer<Doubly<T>> for DoublyReclaimer {
    fn reclaim_nodes<P>(col: &mut CoreCol<Doubly<T>, P>) -> bool
    where
        P: PinnedVec<Node<Doubly<T>>>,
    {
        let mut any_swapped = false;
        let mut right_bound = col.nodes().len();

        for vacant in 0..col.len() {
            if col.nodes()[vacant].is_active() {
                continue;
            }

            let occupied = ((vacant + 1)..right_bound)
                .rev()
                .find(|&i| col.nodes()[i].is_active());

            if let Some(occupied) = occupied {
                right_bound = occupied;
                any_swapped |= swap(col, vacant, occupied);
            }
        }

        any_swapped
    }
}

fn swap<P, T>(col: &mut CoreCol<Doubly<T>, P>, vacant: usize, occupied: usize) -> bool
where
    P: PinnedVec<Node<Doubly<T>>>,
{
    let (Some(new_ptr), Some(old_ptr)) = (col.ptr_at(vacant), col.ptr_at(occupied))
    else {
        return false;
    };

    let (prev, next) = {
        let node = &col.nodes()[occupied];
        (node.prev().get(), node.next().get())
    };

    if let Some(prev) = prev {
        col.node_mut(prev).next_mut().set_some(new_ptr);
    }

    if let Some(next) = next {
        col.node_mut(next).prev_mut().set_some(new_ptr);
    }

    col.fill_hole(vacant, occupied);
    col.ends_mut().replace(old_ptr, new_ptr);

    true
}
