//! Domain primitives and the comment service.
//!
//! Purpose: define the strongly typed guestbook entities shared by the
//! inbound HTTP adapter and the outbound store/identity adapters. Types are
//! immutable and document their invariants and serde contracts in Rustdoc.
//!
//! Public surface:
//! - [`Comment`], [`NewComment`], [`CommentSubmission`] — comment aggregate.
//! - [`Caller`], [`CallerIdentity`], [`SessionClaims`] — transient identity.
//! - [`ListingLimit`], [`FeedPage`] — listing contract.
//! - [`Error`], [`ErrorCode`] — transport-agnostic error envelope.
//! - [`CommentService`] — the single orchestrating service.

mod caller;
mod comment;
mod comment_service;
mod error;
mod feed;
pub mod ports;

pub use self::caller::{Caller, CallerIdentity, SessionClaims};
pub use self::comment::{
    AUTHOR_NAME_MAX, AuthorName, COMMENT_BODY_MAX, Comment, CommentBody, CommentId,
    CommentSubmission, CommentValidationError, NewComment,
};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode};
pub use self::feed::{FeedPage, ListingLimit, ListingLimitParseError};

/// Path of the site's main page; submissions redirect here and identity URLs
/// use it as the post-auth destination.
pub const MAIN_PAGE_PATH: &str = "/MainPage.html";
