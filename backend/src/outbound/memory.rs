//! In-memory comment store.
//!
//! Default adapter when no database is configured. Comments live in process
//! memory and are lost on restart, which matches local development needs.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentId, NewComment};

#[derive(Default)]
struct Store {
    // Kept sorted most recent first; ties break newest insert first.
    comments: Vec<Comment>,
    next_id: i64,
}

/// [`CommentRepository`] backed by a process-local vector.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    store: RwLock<Store>,
}

impl InMemoryCommentRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_comments(&self) -> Result<Vec<Comment>, CommentRepositoryError> {
        let store = self
            .store
            .read()
            .map_err(|_| CommentRepositoryError::query("comment store lock poisoned"))?;
        Ok(store.comments.clone())
    }

    async fn insert_comment(&self, draft: NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| CommentRepositoryError::query("comment store lock poisoned"))?;

        store.next_id += 1;
        let comment = Comment::new(
            CommentId::new(store.next_id),
            draft.author,
            draft.body,
            draft.created_at,
        );

        let position = store
            .comments
            .partition_point(|existing| existing.created_at() > comment.created_at());
        store.comments.insert(position, comment.clone());

        Ok(comment)
    }
}
