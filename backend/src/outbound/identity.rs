//! Session-claims identity adapter.
//!
//! The hosted identity layer in front of this service performs the actual
//! sign-in and writes the caller's stable identifier and display name into
//! the session cookie. This adapter only inspects those claims and builds the
//! login and logout redirect URLs, always returning the caller to the main
//! page afterwards.

use async_trait::async_trait;

use crate::domain::ports::IdentityProvider;
use crate::domain::{Caller, CallerIdentity, Error, MAIN_PAGE_PATH, SessionClaims};

/// Default login endpoint of the hosted identity layer.
pub const DEFAULT_LOGIN_URL: &str = "/auth/login";
/// Default logout endpoint of the hosted identity layer.
pub const DEFAULT_LOGOUT_URL: &str = "/auth/logout";

/// [`IdentityProvider`] backed by session claims.
#[derive(Debug, Clone)]
pub struct SessionIdentityProvider {
    login_url: String,
    logout_url: String,
}

impl Default for SessionIdentityProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_URL, DEFAULT_LOGOUT_URL)
    }
}

impl SessionIdentityProvider {
    /// Create a provider with the given identity-layer endpoints.
    #[must_use]
    pub fn new(login_url: impl Into<String>, logout_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
            logout_url: logout_url.into(),
        }
    }

    fn with_destination(base: &str) -> String {
        format!("{base}?destination={MAIN_PAGE_PATH}")
    }
}

#[async_trait]
impl IdentityProvider for SessionIdentityProvider {
    async fn current_caller(&self, claims: &SessionClaims) -> Result<Caller, Error> {
        let (Some(stable_id), Some(display_name)) = (&claims.stable_id, &claims.display_name)
        else {
            return Ok(Caller::Anonymous {
                login_url: Self::with_destination(&self.login_url),
            });
        };

        Ok(Caller::Authenticated(CallerIdentity {
            display_name: display_name.clone(),
            stable_id: stable_id.clone(),
            logout_url: Self::with_destination(&self.logout_url),
        }))
    }
}
