//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod snapshot;

pub use snapshot::SnapshotStore;
