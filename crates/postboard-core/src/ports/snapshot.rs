use async_trait::async_trait;

use crate::domain::Post;
use crate::error::SnapshotError;

/// Snapshot store trait - abstraction over where the post log is persisted.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the persisted post log, newest first.
    ///
    /// A missing snapshot is not an error and yields an empty log.
    async fn load(&self) -> Result<Vec<Post>, SnapshotError>;

    /// Replace the persisted post log with `posts`, newest first.
    async fn save(&self, posts: &[Post]) -> Result<(), SnapshotError>;
}
