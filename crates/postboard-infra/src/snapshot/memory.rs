//! In-memory snapshot store - used when no snapshot file is configured.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::ports::SnapshotStore;
use postboard_core::{Post, SnapshotError};

use super::codec;

/// Snapshot store keeping the last encoded snapshot in memory.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshot: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, as if `json` had been read from disk.
    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            snapshot: RwLock::new(Some(json.into())),
        }
    }

    /// The last saved snapshot, if any.
    pub async fn contents(&self) -> Option<String> {
        self.snapshot.read().await.clone()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Vec<Post>, SnapshotError> {
        match self.snapshot.read().await.as_deref() {
            Some(json) => codec::decode(json),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, posts: &[Post]) -> Result<(), SnapshotError> {
        let json = codec::encode(posts);
        *self.snapshot.write().await = Some(json);
        Ok(())
    }
}
