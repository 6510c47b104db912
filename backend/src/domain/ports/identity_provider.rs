//! Port for caller identity resolution.
//!
//! In hexagonal terms this is a driven port: the comment service asks it
//! whether the current caller is signed in without knowing how sessions or
//! the hosted identity layer work. Resolution is a pure read of the supplied
//! claims; no adapter performs side effects here.

use async_trait::async_trait;

use crate::domain::{Caller, CallerIdentity, Error, SessionClaims};

/// Port for resolving the current caller from session claims.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller. Anonymous callers receive a login redirect URL;
    /// authenticated callers receive display name, stable identifier, and a
    /// logout redirect URL.
    async fn current_caller(&self, claims: &SessionClaims) -> Result<Caller, Error>;
}

/// Fixture provider that treats every caller as the same signed-in user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityProvider;

impl FixtureIdentityProvider {
    /// Display name reported for every caller.
    pub const DISPLAY_NAME: &'static str = "Ada Lovelace";
    /// Stable identifier reported for every caller.
    pub const STABLE_ID: &'static str = "118214591182882";
    /// Logout URL reported for every caller.
    pub const LOGOUT_URL: &'static str = "/auth/logout?destination=/MainPage.html";
}

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn current_caller(&self, _claims: &SessionClaims) -> Result<Caller, Error> {
        Ok(Caller::Authenticated(CallerIdentity {
            display_name: Self::DISPLAY_NAME.to_owned(),
            stable_id: Self::STABLE_ID.to_owned(),
            logout_url: Self::LOGOUT_URL.to_owned(),
        }))
    }
}

/// Fixture provider that treats every caller as anonymous.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousFixtureIdentityProvider;

impl AnonymousFixtureIdentityProvider {
    /// Login URL reported for every caller.
    pub const LOGIN_URL: &'static str = "/auth/login?destination=/MainPage.html";
}

#[async_trait]
impl IdentityProvider for AnonymousFixtureIdentityProvider {
    async fn current_caller(&self, _claims: &SessionClaims) -> Result<Caller, Error> {
        Ok(Caller::Anonymous {
            login_url: Self::LOGIN_URL.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_provider_authenticates_every_caller() {
        let caller = FixtureIdentityProvider
            .current_caller(&SessionClaims::anonymous())
            .await
            .expect("resolution succeeds");
        match caller {
            Caller::Authenticated(identity) => {
                assert_eq!(identity.display_name, FixtureIdentityProvider::DISPLAY_NAME);
                assert_eq!(identity.stable_id, FixtureIdentityProvider::STABLE_ID);
            }
            Caller::Anonymous { .. } => panic!("fixture caller should be authenticated"),
        }
    }

    #[tokio::test]
    async fn anonymous_fixture_provider_reports_login_url() {
        let caller = AnonymousFixtureIdentityProvider
            .current_caller(&SessionClaims::authenticated("id", "name"))
            .await
            .expect("resolution succeeds");
        assert_eq!(
            caller,
            Caller::Anonymous {
                login_url: AnonymousFixtureIdentityProvider::LOGIN_URL.to_owned()
            }
        );
    }
}
