//! Links among the nodes of a collection and the handles exposing nodes to callers.
//!
//! [`NodePtr`] links are internal; they are only followed by the collection owning the nodes.
//! [`NodeIdx`] is the public handle, validated against the collection on every use.

mod array;
mod node_idx;
mod node_ptr;
mod refs;

pub use array::RefsArray;
pub use node_idx::NodeIdx;
pub use node_ptr::NodePtr;
pub use refs::{Refs, RefsNone, RefsSingle};
