mod array;
mod recursive;
mod state;

pub use array::ArrayEnumerator;
pub use recursive::{RecursiveEnumerable, RecursiveEnumerator};
pub(crate) use state::CursorState;

use crate::CollectionError;

/// Direction in which a bidirectional structure is enumerated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationDirection {
    /// From the first element forward; the order elements are dequeued from a queue.
    #[default]
    Fifo,
    /// From the last element backward.
    Lifo,
}

/// Stateful cursor implementing the two-phase iteration protocol.
///
/// An enumerator is created in the not-started state; `move_next` must be called before
/// the first `current`. After `dispose`, every method except `dispose` and `is_disposed`
/// fails with [`CollectionError::Disposed`]. Disposal is idempotent.
///
/// Enumerators of this crate also implement [`Iterator`].
pub trait Enumerator {
    /// Element yielded by the enumerator.
    type Item;

    /// Advances the cursor; returns false once the enumeration is exhausted.
    fn move_next(&mut self) -> Result<bool, CollectionError>;

    /// Element at the cursor; None before the first successful `move_next` and after the last one.
    fn current(&self) -> Result<Option<&Self::Item>, CollectionError>;

    /// Moves the cursor back to the not-started state.
    fn reset(&mut self) -> Result<(), CollectionError>;

    /// Releases the enumerated source.
    fn dispose(&mut self);

    /// Returns true if the enumerator is disposed.
    fn is_disposed(&self) -> bool;
}

/// An enumerator which knows the total number of elements it enumerates before it starts.
pub trait CountableEnumerator: Enumerator {
    /// Total number of elements of a full enumeration pass.
    fn item_count(&self) -> Result<usize, CollectionError>;
}
