//! Driving port for the comment listing use-case.
//!
//! Inbound adapters (HTTP handlers) call this port to fetch the guestbook
//! feed without importing store or identity concerns. Handler tests
//! substitute a mock or fixture instead of wiring adapters.

use async_trait::async_trait;

use crate::domain::ports::FixtureIdentityProvider;
use crate::domain::{CallerIdentity, Error, FeedPage, ListingLimit, SessionClaims};

/// Domain use-case port for listing the guestbook feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestbookQuery: Send + Sync {
    /// Resolve the caller and return the limited feed page for them.
    async fn list_feed(
        &self,
        claims: &SessionClaims,
        limit: ListingLimit,
    ) -> Result<FeedPage, Error>;
}

/// Fixture query returning an empty feed for a fixed signed-in caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGuestbookQuery;

#[async_trait]
impl GuestbookQuery for FixtureGuestbookQuery {
    async fn list_feed(
        &self,
        _claims: &SessionClaims,
        _limit: ListingLimit,
    ) -> Result<FeedPage, Error> {
        Ok(FeedPage::Entries {
            caller: CallerIdentity {
                display_name: FixtureIdentityProvider::DISPLAY_NAME.to_owned(),
                stable_id: FixtureIdentityProvider::STABLE_ID.to_owned(),
                logout_url: FixtureIdentityProvider::LOGOUT_URL.to_owned(),
            },
            comments: Vec::new(),
        })
    }
}
