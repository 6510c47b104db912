//! Caller identity model.
//!
//! Identity is resolved transiently per request from the identity adapter and
//! never persisted. The caller-side UI relies on the identity payload being
//! the first element of the listing response; see the inbound HTTP adapter.

use serde::{Deserialize, Serialize};

/// Session claims extracted from the request context.
///
/// The hosted identity layer writes these into the session cookie after a
/// successful sign-in; this service only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClaims {
    /// Stable identifier assigned by the identity provider, if signed in.
    pub stable_id: Option<String>,
    /// Display name reported by the identity provider, if signed in.
    pub display_name: Option<String>,
}

impl SessionClaims {
    /// Claims for a signed-in caller.
    #[must_use]
    pub fn authenticated(stable_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            stable_id: Some(stable_id.into()),
            display_name: Some(display_name.into()),
        }
    }

    /// Claims for a caller without a session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            stable_id: None,
            display_name: None,
        }
    }
}

/// Identity payload attached to listing responses for authenticated callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    /// Display name shown in the UI.
    pub display_name: String,
    /// Stable identifier assigned by the identity provider.
    pub stable_id: String,
    /// URL that signs the caller out and returns them to the main page.
    pub logout_url: String,
}

/// Result of resolving the current caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No authenticated session; the caller should be sent to `login_url`.
    Anonymous {
        /// URL that signs the caller in and returns them to the main page.
        login_url: String,
    },
    /// Authenticated caller with resolved identity metadata.
    Authenticated(CallerIdentity),
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use serde_json::Value;

    #[test]
    fn identity_serializes_camel_case() {
        let identity = CallerIdentity {
            display_name: "Ada Lovelace".into(),
            stable_id: "118214591182882".into(),
            logout_url: "/auth/logout".into(),
        };
        let value = serde_json::to_value(&identity).expect("serialize identity");
        assert_eq!(
            value.get("displayName").and_then(Value::as_str),
            Some("Ada Lovelace")
        );
        assert_eq!(
            value.get("logoutUrl").and_then(Value::as_str),
            Some("/auth/logout")
        );
    }

    #[test]
    fn anonymous_claims_carry_no_identity() {
        let claims = SessionClaims::anonymous();
        assert!(claims.stable_id.is_none());
        assert!(claims.display_name.is_none());
    }

    #[test]
    fn authenticated_claims_carry_both_fields() {
        let claims = SessionClaims::authenticated("id-1", "Al");
        assert_eq!(claims.stable_id.as_deref(), Some("id-1"));
        assert_eq!(claims.display_name.as_deref(), Some("Al"));
    }
}
