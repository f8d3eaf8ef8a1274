use super::policy::MemoryReclaimer;
use crate::{
    CoreCol, Node, NodePtr,
    variant::{HEAD, Singly, TAIL},
};
use orx_pinned_vec::PinnedVec;

/// Reclaimer of singly linked queues and stacks.
///
/// Walks the list from the head; every vacant position is filled by the next node in list
/// order which is stored beyond it, so the predecessor of a moved node is always known.
#[derive(Clone, Copy, Default, Debug)]
pub struct SinglyReclaimer;

impl<T> MemoryReclaimer<Singly<T>> for SinglyReclaimer {
    fn reclaim_nodes<P>(col: &mut CoreCol<Singly<T>, P>) -> bool
    where
        P: PinnedVec<Node<Singly<T>>>,
    {
        let num_active_nodes = col.len();
        let mut nodes_moved = false;
        let mut prev: Option<NodePtr<Singly<T>>> = None;
        let mut current = col.ends().get(HEAD);

        for vacant in 0..num_active_nodes {
            if col.nodes()[vacant].is_active() {
                continue;
            }

            loop {
                let Some(node) = current else {
                    return nodes_moved;
                };
                let next = col.node(node).next().get();
                let Some(occupied) = col.position_of(node) else {
                    return nodes_moved;
                };

                if occupied > vacant {
                    let Some(moved) = col.ptr_at(vacant) else {
                        return nodes_moved;
                    };
                    col.fill_hole(vacant, occupied);

                    match prev {
                        Some(prev) => col.node_mut(prev).next_mut().set_some(moved),
                        None => col.ends_mut().set(HEAD, Some(moved)),
                    }
                    if col.ends().get(TAIL) == Some(node) {
                        col.ends_mut().set(TAIL, Some(moved));
                    }

                    nodes_moved = true;
                    prev = Some(moved);
                    current = next;
                    break;
                }

                prev = Some(node);
                current = next;
            }
        }

        nodes_moved
    }
}
