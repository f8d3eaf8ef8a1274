//! Lock based wrappers sharing a singly linked collection among threads.

mod read_only;
mod synchronized;

pub use read_only::ReadOnlySynchronized;
pub use synchronized::{SynchronizedQueue, SynchronizedSimpleLinkedList, SynchronizedStack};
