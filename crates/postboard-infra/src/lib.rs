//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`,
//! plus the shared post store that the HTTP layer drives.
//!
//! - `snapshot` - snapshot codec and file / in-memory snapshot stores
//! - `store` - the bounded, concurrently shared post log
//! - `form` - URL-encoded request body decoding

pub mod form;
pub mod snapshot;
pub mod store;

pub use form::decode_form;
pub use snapshot::{FileSnapshotStore, InMemorySnapshotStore};
pub use store::PostStore;
