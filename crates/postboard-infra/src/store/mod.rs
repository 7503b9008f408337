//! The shared post log.
//!
//! Posts are kept newest-first behind a single async mutex and capped at
//! [`POST_LOG_CAPACITY`]. Every append takes a point-in-time copy of the log
//! inside the critical section and hands it to the [`SnapshotStore`] after
//! the lock is released, so disk I/O never blocks readers or other appends.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use postboard_core::ports::SnapshotStore;
use postboard_core::{POST_LOG_CAPACITY, Post, PostFields};

struct PostLog {
    posts: VecDeque<Post>,
    /// Bumped on every mutation; tags the copies handed to the writer.
    revision: u64,
}

/// Bounded, concurrently shared post log with snapshot persistence.
pub struct PostStore {
    log: Mutex<PostLog>,
    snapshots: Arc<dyn SnapshotStore>,
    /// Revision of the last snapshot successfully written.
    persisted: Mutex<u64>,
}

impl PostStore {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self {
            log: Mutex::new(PostLog {
                posts: VecDeque::with_capacity(POST_LOG_CAPACITY + 1),
                revision: 0,
            }),
            snapshots,
            persisted: Mutex::new(0),
        }
    }

    /// Append a post at the head of the log and persist a snapshot.
    ///
    /// A fresh id is assigned under `id`. Snapshot failures are logged and do
    /// not fail the append.
    pub async fn append(&self, fields: PostFields) -> Post {
        let post = Post::new(fields);

        let (snapshot, revision) = {
            let mut log = self.log.lock().await;
            log.posts.push_front(post.clone());

            let evicted = log.posts.len().saturating_sub(POST_LOG_CAPACITY);
            log.posts.truncate(POST_LOG_CAPACITY);
            log.revision += 1;

            tracing::debug!(
                post_id = %post.id(),
                size = log.posts.len(),
                evicted,
                "Post appended"
            );

            (log.posts.iter().cloned().collect::<Vec<_>>(), log.revision)
        };

        self.persist(&snapshot, revision).await;
        post
    }

    /// Copy of the log, oldest first.
    pub async fn list(&self) -> Vec<Post> {
        let log = self.log.lock().await;
        log.posts.iter().rev().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.log.lock().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Replace the log with the persisted snapshot.
    ///
    /// Load failures leave the log empty; the server starts regardless.
    pub async fn load_from_snapshot(&self) {
        let loaded = match self.snapshots.load().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Error loading posts: {}", e);
                Vec::new()
            }
        };

        let mut log = self.log.lock().await;
        log.posts = loaded.into_iter().take(POST_LOG_CAPACITY).collect();
        log.revision += 1;

        tracing::info!(posts = log.posts.len(), "Post log loaded from snapshot");
    }

    async fn persist(&self, posts: &[Post], revision: u64) {
        let mut persisted = self.persisted.lock().await;
        if *persisted >= revision {
            tracing::debug!(revision, "Skipping stale snapshot");
            return;
        }

        match self.snapshots.save(posts).await {
            Ok(()) => *persisted = revision,
            Err(e) => tracing::error!("Error saving posts: {}", e),
        }
    }
}
