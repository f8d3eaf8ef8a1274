use crate::{RefsArray, RefsNone, RefsSingle};
use core::marker::PhantomData;

/// Shape of a linked collection: its element type and the links of its nodes.
pub trait Variant: Sized {
    /// Elements of the collection.
    type Item;

    /// Backward link of a node; [`RefsNone`] when nodes only link forward.
    type Prev: crate::Refs;

    /// Forward link of a node.
    type Next: crate::Refs;

    /// Ends of the collection, indexed by `HEAD` and `TAIL`.
    type Ends: crate::Refs;
}

/// Singly linked variant used by queues and stacks.
///
/// Ends are `[head, tail]`; a stack never sets the tail.
pub struct Singly<T>(PhantomData<T>);

impl<T> Variant for Singly<T> {
    type Item = T;

    type Prev = RefsNone;

    type Next = RefsSingle<Self>;

    type Ends = RefsArray<2, Self>;
}

/// Doubly linked variant used by the linked list.
///
/// Ends are `[first, last]`.
pub struct Doubly<T>(PhantomData<T>);

impl<T> Variant for Doubly<T> {
    type Item = T;

    type Prev = RefsSingle<Self>;

    type Next = RefsSingle<Self>;

    type Ends = RefsArray<2, Self>;
}

pub(crate) const HEAD: usize = 0;
pub(crate) const TAIL: usize = 1;
