//! Application state - shared across all handlers.

use std::path::PathBuf;
use std::sync::Arc;

use postboard_core::ports::SnapshotStore;
use postboard_infra::{FileSnapshotStore, InMemorySnapshotStore, PostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
    pub index_file: PathBuf,
}

impl AppState {
    pub fn new(posts: Arc<PostStore>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            posts,
            index_file: index_file.into(),
        }
    }

    /// Build the application state and load the persisted post log.
    pub async fn from_config(config: &AppConfig) -> Self {
        let snapshots: Arc<dyn SnapshotStore> = match &config.posts_file {
            Some(path) => {
                tracing::info!(
                    path = %path.display(),
                    atomic = config.atomic_snapshots,
                    "Persisting posts to snapshot file"
                );
                Arc::new(FileSnapshotStore::new(path).atomic(config.atomic_snapshots))
            }
            None => {
                tracing::warn!("POSTS_FILE is empty. Running without persistence (in-memory mode).");
                Arc::new(InMemorySnapshotStore::new())
            }
        };

        let posts = Arc::new(PostStore::new(snapshots));
        posts.load_from_snapshot().await;

        tracing::info!("Application state initialized");

        Self::new(posts, config.index_file.clone())
    }
}
