//! Comment service implementing the guestbook driving ports.
//!
//! This is the only orchestration in the system: a listing resolves the
//! caller, fetches the ordered comments, and applies the requested limit; a
//! posting trims and validates the submission, stamps it with the current
//! wall-clock time, and inserts it. Failures surface immediately; there are
//! no retries, caches, or transactions at this layer.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, GuestbookCommand, GuestbookQuery, IdentityProvider,
};
use crate::domain::{
    AuthorName, Caller, Comment, CommentBody, CommentSubmission, CommentValidationError, Error,
    FeedPage, ListingLimit, NewComment, SessionClaims,
};

/// Guestbook comment service with constructor-injected adapters.
#[derive(Clone)]
pub struct CommentService<R, I> {
    comments: Arc<R>,
    identity: Arc<I>,
    clock: Arc<dyn Clock>,
}

impl<R, I> CommentService<R, I> {
    /// Create a new service over the given store and identity adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use guestbook_backend::domain::CommentService;
    /// use guestbook_backend::domain::ports::{FixtureCommentRepository, FixtureIdentityProvider};
    /// use mockable::DefaultClock;
    ///
    /// let service = CommentService::new(
    ///     Arc::new(FixtureCommentRepository),
    ///     Arc::new(FixtureIdentityProvider),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _ = service;
    /// ```
    #[must_use]
    pub fn new(comments: Arc<R>, identity: Arc<I>, clock: Arc<dyn Clock>) -> Self {
        Self {
            comments,
            identity,
            clock,
        }
    }
}

fn map_repository_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => Error::service_unavailable(message),
        CommentRepositoryError::Query { message } => Error::internal(message),
    }
}

fn map_validation_error(error: CommentValidationError) -> Error {
    let (field, code) = match error {
        CommentValidationError::EmptyAuthor => ("name", "empty_author"),
        CommentValidationError::AuthorTooLong { .. } => ("name", "author_too_long"),
        CommentValidationError::EmptyBody => ("user-comment", "empty_body"),
        CommentValidationError::BodyTooLong { .. } => ("user-comment", "body_too_long"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

#[async_trait]
impl<R, I> GuestbookQuery for CommentService<R, I>
where
    R: CommentRepository,
    I: IdentityProvider,
{
    async fn list_feed(
        &self,
        claims: &SessionClaims,
        limit: ListingLimit,
    ) -> Result<FeedPage, Error> {
        // Identity gates the listing: anonymous callers never see comment
        // data, whatever the limit or store contents.
        let caller = match self.identity.current_caller(claims).await? {
            Caller::Anonymous { login_url } => {
                return Ok(FeedPage::LoginRequired { login_url });
            }
            Caller::Authenticated(identity) => identity,
        };

        let mut comments = self
            .comments
            .list_comments()
            .await
            .map_err(map_repository_error)?;
        let keep = limit.keep(comments.len());
        debug!(total = comments.len(), keep, "listing guestbook feed");
        comments.truncate(keep);

        Ok(FeedPage::Entries { caller, comments })
    }
}

#[async_trait]
impl<R, I> GuestbookCommand for CommentService<R, I>
where
    R: CommentRepository,
    I: IdentityProvider,
{
    async fn post_comment(&self, submission: CommentSubmission) -> Result<Comment, Error> {
        let author = AuthorName::new(&submission.author).map_err(map_validation_error)?;
        let body = CommentBody::new(&submission.body).map_err(map_validation_error)?;
        let created_at = self.clock.utc().timestamp_millis();

        let stored = self
            .comments
            .insert_comment(NewComment {
                author,
                body,
                created_at,
            })
            .await
            .map_err(map_repository_error)?;
        debug!(comment_id = %stored.id(), "stored guestbook comment");
        Ok(stored)
    }
}
