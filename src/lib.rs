#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod references;

mod capabilities;
mod common_traits;
mod core_col;
mod enumerators;
mod error;
mod linked_list;
mod memory;
mod node;
mod selfref_col;
mod simple_list;
#[cfg(feature = "std")]
mod sync;
mod variant;

pub use capabilities::{
    Countable, Enumerable, Indexable, Peekable, QueueCapability, SimpleLinkedCollection,
    StackCapability,
};
pub use core_col::CoreCol;
pub use enumerators::{
    ArrayEnumerator, CountableEnumerator, EnumerationDirection, Enumerator, RecursiveEnumerable,
    RecursiveEnumerator,
};
pub use error::CollectionError;
pub use linked_list::{DefaultDoublyMemory, LinkedList, LinkedListEnumerator, ReadOnlyLinkedList};
pub use memory::{
    DoublyReclaimer, MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, MemoryReclaimer,
    MemoryState, SinglyReclaimer, Utilization,
};
pub use node::Node;
pub use references::{NodeIdx, NodePtr, Refs, RefsArray, RefsNone, RefsSingle};
pub use selfref_col::SelfRefCol;
pub use simple_list::{
    DefaultSinglyMemory, FifoPolicy, LifoPolicy, Queue, ReadOnlySimpleLinkedList,
    SimpleLinkedList, SimpleLinkedListEnumerator, SimpleLinkedPolicy, Stack,
};
#[cfg(feature = "std")]
pub use sync::{
    ReadOnlySynchronized, SynchronizedQueue, SynchronizedSimpleLinkedList, SynchronizedStack,
};
pub use variant::{Doubly, Singly, Variant};

/// Pinned vector storing the nodes of the collections of this crate.
pub type Storage<V> = orx_split_vec::SplitVec<Node<V>, orx_split_vec::Recursive>;
