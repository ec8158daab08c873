//! Bearer-token authentication for HTTP handlers.
//!
//! Handlers that need a login context take [`Authenticated`] as an argument;
//! the extractor reads `Authorization: Bearer <token>` and resolves it through
//! the [`LoginService`](crate::domain::ports::LoginService) held in
//! [`HttpState`]. Any missing, malformed or dead token is rejected with
//! `401 unauthenticated` before the handler body runs.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::{Error, LoginContext, SessionToken};
use crate::inbound::http::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer token out of a request, if one is present and well formed.
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<SessionToken> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header
        .get(..BEARER_PREFIX.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
        .and_then(|_| header.get(BEARER_PREFIX.len()..))?
        .trim();
    (!token.is_empty()).then(|| SessionToken::from_presented(token))
}

/// Live login context of the caller.
#[derive(Debug, Clone)]
pub struct Authenticated(pub LoginContext);

impl Authenticated {
    /// Consume the wrapper.
    pub fn into_inner(self) -> LoginContext {
        self.0
    }
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let Some(token) = token else {
                debug!("request without bearer token");
                return Err(Error::unauthenticated());
            };
            let state =
                state.ok_or_else(|| Error::internal("HTTP state missing from application"))?;
            state.login.resolve(&token).await.map(Authenticated)
        })
    }
}
