mod doubly;
mod on_threshold;
mod policy;
mod singly;
mod state;
mod utilization;

pub use doubly::DoublyReclaimer;
pub use on_threshold::MemoryReclaimOnThreshold;
pub use policy::{MemoryPolicy, MemoryReclaimNever, MemoryReclaimer};
pub use singly::SinglyReclaimer;
pub use state::MemoryState;
pub use utilization::Utilization;
