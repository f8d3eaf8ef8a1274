/// Storage use of a linked collection.
///
/// `num_active_nodes + num_closed_nodes` is the length of the pinned storage, which never
/// exceeds its `capacity`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Utilization {
    /// Allocated positions.
    pub capacity: usize,
    /// Nodes holding an element.
    pub num_active_nodes: usize,
    /// Removed nodes still occupying a position.
    pub num_closed_nodes: usize,
}

impl Utilization {
    /// Positions in use, active or closed.
    pub fn num_used_nodes(&self) -> usize {
        self.num_active_nodes + self.num_closed_nodes
    }
}
