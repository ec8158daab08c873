//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials and to resolve bearer tokens without knowing the
//! backing session store. Handler tests can wire the in-memory adapters and
//! stay deterministic.

use async_trait::async_trait;

use crate::domain::{Error, LoginContext, LoginCredentials, SessionToken};

/// Domain use-case port for the session layer.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify credentials and issue a login context.
    ///
    /// Unknown usernames and wrong passwords both fail with
    /// [`Error::invalid_credentials`].
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginContext, Error>;

    /// Invalidate a token. Unknown tokens are ignored.
    async fn logout(&self, token: &SessionToken) -> Result<(), Error>;

    /// Resolve a token to its live login context.
    ///
    /// Fails with [`Error::unauthenticated`] for unknown, logged-out or
    /// expired tokens.
    async fn resolve(&self, token: &SessionToken) -> Result<LoginContext, Error>;
}
