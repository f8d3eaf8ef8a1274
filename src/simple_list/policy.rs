use crate::{
    CoreCol, NodePtr, Storage,
    variant::{HEAD, Singly, TAIL},
};

type SinglyCore<T> = CoreCol<Singly<T>, Storage<Singly<T>>>;

/// Insertion policy of a [`SimpleLinkedList`](crate::SimpleLinkedList); the only thing in
/// which a queue differs from a stack.
pub trait SimpleLinkedPolicy {
    /// Links the freshly pushed `node` into the chain.
    ///
    /// Returns the head of the list after the insertion, and whether [`Self::item_added`]
    /// must run once the head is stored.
    fn add_item<T>(col: &mut SinglyCore<T>, node: NodePtr<Singly<T>>) -> (NodePtr<Singly<T>>, bool);

    /// Hook called after the head is updated, only if `add_item` asked for it.
    fn item_added<T>(_col: &mut SinglyCore<T>, _node: NodePtr<Singly<T>>) {}

    /// Returns the node which becomes the head once the current `head` is removed.
    fn remove_item<T>(col: &SinglyCore<T>, head: NodePtr<Singly<T>>) -> Option<NodePtr<Singly<T>>> {
        col.node(head).next().get()
    }
}

/// First-in-first-out policy: appends after the tail, removes from the head.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoPolicy;

impl SimpleLinkedPolicy for FifoPolicy {
    fn add_item<T>(col: &mut SinglyCore<T>, node: NodePtr<Singly<T>>) -> (NodePtr<Singly<T>>, bool) {
        match (col.ends().get(HEAD), col.ends().get(TAIL)) {
            (Some(head), Some(tail)) => {
                col.node_mut(tail).next_mut().set_some(node);
                col.ends_mut().set(TAIL, Some(node));
                (head, false)
            }
            // first insertion: the node is both the head and the tail
            _ => (node, true),
        }
    }

    fn item_added<T>(col: &mut SinglyCore<T>, node: NodePtr<Singly<T>>) {
        col.ends_mut().set(TAIL, Some(node));
    }
}

/// Last-in-first-out policy: the new node becomes the head pointing at the old head.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifoPolicy;

impl SimpleLinkedPolicy for LifoPolicy {
    fn add_item<T>(col: &mut SinglyCore<T>, node: NodePtr<Singly<T>>) -> (NodePtr<Singly<T>>, bool) {
        if let Some(old_head) = col.ends().get(HEAD) {
            col.node_mut(node).next_mut().set_some(old_head);
        }
        (node, false)
    }
}

