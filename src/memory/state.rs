/// Memory state of a linked collection.
///
/// The state advances every time the collection compacts its storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self {
            id: self.id.wrapping_add(1),
        }
    }
}
