//! Domain ports and supporting types for the hexagonal boundary.

mod comment_repository;
mod guestbook_command;
mod guestbook_query;
mod identity_provider;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError, FixtureCommentRepository};
#[cfg(test)]
pub use guestbook_command::MockGuestbookCommand;
pub use guestbook_command::{FixtureGuestbookCommand, GuestbookCommand};
#[cfg(test)]
pub use guestbook_query::MockGuestbookQuery;
pub use guestbook_query::{FixtureGuestbookQuery, GuestbookQuery};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{
    AnonymousFixtureIdentityProvider, FixtureIdentityProvider, IdentityProvider,
};
