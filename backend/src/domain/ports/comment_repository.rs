//! Port for comment persistence.
//!
//! The store adapter has exactly two operations: an ordered read of every
//! comment and an insert that assigns the record identifier. Ordering and key
//! uniqueness are delegated to the backing store.

use async_trait::async_trait;

use crate::domain::{Comment, NewComment};

/// Errors raised by comment repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentRepositoryError {
    /// The backing store cannot be reached.
    #[error("comment store unreachable: {message}")]
    Connection {
        /// Adapter-supplied diagnostic.
        message: String,
    },
    /// A query or insert failed during execution.
    #[error("comment store query failed: {message}")]
    Query {
        /// Adapter-supplied diagnostic.
        message: String,
    },
}

impl CommentRepositoryError {
    /// Build a [`CommentRepositoryError::Connection`].
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`CommentRepositoryError::Query`].
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for comment storage and retrieval.
///
/// # Ordering
///
/// `list_comments` returns records sorted by `created_at` descending (most
/// recent first); ties break in store order. An empty store yields an empty
/// vector, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Return every stored comment, most recent first.
    async fn list_comments(&self) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Persist a new comment and return the stored record with its
    /// store-assigned identifier.
    async fn insert_comment(&self, draft: NewComment) -> Result<Comment, CommentRepositoryError>;
}

/// Fixture repository for tests that do not exercise storage behaviour.
///
/// Listings are always empty and inserts echo the draft back under a fixed
/// identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCommentRepository;

#[async_trait]
impl CommentRepository for FixtureCommentRepository {
    async fn list_comments(&self) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(Vec::new())
    }

    async fn insert_comment(&self, draft: NewComment) -> Result<Comment, CommentRepositoryError> {
        let NewComment {
            author,
            body,
            created_at,
        } = draft;
        Ok(Comment::new(
            crate::domain::CommentId::new(1),
            author,
            body,
            created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{AuthorName, CommentBody};

    #[tokio::test]
    async fn fixture_repository_lists_nothing() {
        let comments = FixtureCommentRepository
            .list_comments()
            .await
            .expect("listing succeeds");
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn fixture_repository_echoes_inserted_draft() {
        let draft = NewComment {
            author: AuthorName::new("Al").expect("author"),
            body: CommentBody::new("hi").expect("body"),
            created_at: 42,
        };

        let stored = FixtureCommentRepository
            .insert_comment(draft)
            .await
            .expect("insert succeeds");
        assert_eq!(stored.id().value(), 1);
        assert_eq!(stored.author().as_ref(), "Al");
        assert_eq!(stored.created_at(), 42);
    }

    #[test]
    fn error_constructors_accept_str() {
        let err = CommentRepositoryError::connection("refused");
        assert_eq!(err.to_string(), "comment store unreachable: refused");
        let err = CommentRepositoryError::query("syntax");
        assert_eq!(err.to_string(), "comment store query failed: syntax");
    }
}
