//! Snapshot persistence - the on-disk JSON array and its stores.

pub mod codec;
mod file;
mod memory;

pub use file::FileSnapshotStore;
pub use memory::InMemorySnapshotStore;
