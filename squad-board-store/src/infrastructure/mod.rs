mod memory_store;
mod rest_store;
mod store_trait;

pub use memory_store::{CallCounts, MemoryPlayerStore};
pub use rest_store::RestPlayerStore;
pub use store_trait::PlayerStore;
