use thiserror::Error;

/// Error kinds raised by the collections, node handles and enumerators of this crate.
///
/// Every kind is local and synchronous; the collection is never left partially mutated
/// when an operation fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A non-`try` removal or peek was called on a collection with no elements.
    #[error("the collection is empty")]
    EmptyCollection,

    /// A mutating operation was called on a read-only collection or view.
    #[error("the collection is read-only")]
    ReadOnly,

    /// An enumerator was used after it had been disposed.
    #[error("the enumerator is disposed")]
    Disposed,

    /// An enumerator over a source that cannot be replayed was reset after it had started.
    #[error("the enumerator cannot be reset once started")]
    ResetNotSupported,

    /// The value or a link of a node was accessed after the node had been removed
    /// from its collection.
    #[error("the node is cleared; it does not belong to the collection anymore")]
    ClearedNode,

    /// The node handle does not point into the storage of the collection;
    /// it was created by a different collection.
    #[error("the node handle does not point to a node of this collection")]
    NodeOutOfBounds,

    /// The collection compacted its storage since the node handle was created;
    /// every handle created before the compaction is invalid.
    #[error("the collection reorganized its nodes after the node handle was created")]
    ReorganizedCollection,

    /// An index or length argument is outside of its valid range.
    #[error("argument `{argument}` with value {value} is out of range; bound is {bound}")]
    ArgumentOutOfRange {
        /// Name of the offending argument.
        argument: &'static str,
        /// Value that was provided.
        value: usize,
        /// Bound that was violated.
        bound: usize,
    },
}

impl CollectionError {
    pub(crate) fn out_of_range(argument: &'static str, value: usize, bound: usize) -> Self {
        Self::ArgumentOutOfRange {
            argument,
            value,
            bound,
        }
    }
}
