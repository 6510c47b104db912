//! Driving port for the comment posting use-case.

use async_trait::async_trait;

use crate::domain::{AuthorName, Comment, CommentBody, CommentId, CommentSubmission, Error};

/// Domain use-case port for accepting comment submissions.
///
/// Posting carries no identity gate: the original service stored submissions
/// without checking the session, and that behaviour is preserved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestbookCommand: Send + Sync {
    /// Validate, stamp, and persist a submission; return the stored comment.
    async fn post_comment(&self, submission: CommentSubmission) -> Result<Comment, Error>;
}

/// Fixture command that validates input and pretends to store it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGuestbookCommand;

#[async_trait]
impl GuestbookCommand for FixtureGuestbookCommand {
    async fn post_comment(&self, submission: CommentSubmission) -> Result<Comment, Error> {
        let author = AuthorName::new(&submission.author)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let body = CommentBody::new(&submission.body)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(Comment::new(CommentId::new(1), author, body, 0))
    }
}
