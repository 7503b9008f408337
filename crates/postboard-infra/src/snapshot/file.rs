//! File-backed snapshot store.
//!
//! Every save overwrites the whole file. With `atomic` set, the snapshot is
//! written to a sibling `.tmp` file and renamed over the target instead.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use postboard_core::ports::SnapshotStore;
use postboard_core::{Post, SnapshotError};

use super::codec;

/// Snapshot store writing the post log to a single JSON file.
pub struct FileSnapshotStore {
    path: PathBuf,
    atomic: bool,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic: false,
        }
    }

    /// Write through a temporary file and rename it into place.
    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Vec<Post>, SnapshotError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snapshot file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        codec::decode(&content)
    }

    async fn save(&self, posts: &[Post]) -> Result<(), SnapshotError> {
        let json = codec::encode(posts);

        if self.atomic {
            let tmp = self.tmp_path();
            tokio::fs::write(&tmp, json.as_bytes()).await?;
            tokio::fs::rename(&tmp, &self.path).await?;
        } else {
            tokio::fs::write(&self.path, json.as_bytes()).await?;
        }

        tracing::debug!(path = %self.path.display(), posts = posts.len(), "Snapshot written");
        Ok(())
    }
}
