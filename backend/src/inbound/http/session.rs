//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! The hosted identity layer writes the caller's stable id and display name
//! into the session cookie after sign-in; this wrapper exposes them as
//! [`SessionClaims`] so handlers and the identity adapter stay
//! framework-agnostic.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, SessionClaims};

pub(crate) const STABLE_ID_KEY: &str = "stable_id";
pub(crate) const DISPLAY_NAME_KEY: &str = "display_name";

/// Newtype wrapper exposing claim-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist identity claims into the session cookie.
    ///
    /// In production the sign-in flow owned by the identity layer calls this;
    /// tests use it to fabricate authenticated sessions.
    pub fn persist_claims(
        &self,
        stable_id: impl AsRef<str>,
        display_name: impl AsRef<str>,
    ) -> Result<(), Error> {
        self.0
            .insert(STABLE_ID_KEY, stable_id.as_ref())
            .and_then(|()| self.0.insert(DISPLAY_NAME_KEY, display_name.as_ref()))
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Read the current claims; both fields absent when not signed in.
    pub fn claims(&self) -> Result<SessionClaims, Error> {
        let stable_id = self
            .0
            .get::<String>(STABLE_ID_KEY)
            .map_err(|err| Error::internal(format!("failed to read session: {err}")))?;
        let display_name = self
            .0
            .get::<String>(DISPLAY_NAME_KEY)
            .map_err(|err| Error::internal(format!("failed to read session: {err}")))?;
        Ok(SessionClaims {
            stable_id,
            display_name,
        })
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().wrap(crate::inbound::http::test_utils::test_session_middleware())
    }

    #[actix_web::test]
    async fn round_trips_claims() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_claims("118214591182882", "Ada Lovelace")?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let claims = session.claims()?;
                        Ok::<_, Error>(
                            HttpResponse::Ok()
                                .body(claims.display_name.unwrap_or_default()),
                        )
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "Ada Lovelace");
    }

    #[actix_web::test]
    async fn missing_session_yields_empty_claims() {
        let app = test::init_service(session_test_app().route(
            "/get",
            web::get().to(|session: SessionContext| async move {
                let claims = session.claims()?;
                assert_eq!(claims, SessionClaims::anonymous());
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        ))
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
