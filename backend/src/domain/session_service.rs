//! Session layer: credential checks and login context lifecycle.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::account_service::map_account_repository_error;
use crate::domain::credential::verify_blocking;
use crate::domain::ports::{
    AccountRepository, LoginService, PasswordHasher, SessionRepository, SessionRepositoryError,
};
use crate::domain::{
    CredentialHash, Error, LoginContext, LoginCredentials, NeverExpires, Password,
    SessionExpiryPolicy, SessionToken, StoredSession,
};

// Derived once at construction; an unknown username is verified against it so
// both failure paths run exactly one verification.
const DECOY_PASSWORD: &str = "decoy-password";

fn map_session_repository_error(error: SessionRepositoryError) -> Error {
    match error {
        SessionRepositoryError::Storage { message } => {
            Error::internal(format!("session repository error: {message}"))
        }
    }
}

/// Session service implementing [`LoginService`].
#[derive(Clone)]
pub struct SessionService<A, S> {
    accounts: Arc<A>,
    sessions: Arc<S>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    expiry: Arc<dyn SessionExpiryPolicy>,
    decoy: CredentialHash,
}

impl<A, S> SessionService<A, S> {
    /// Create a service whose sessions never expire.
    pub fn new(
        accounts: Arc<A>,
        sessions: Arc<S>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let decoy = hasher.derive(&Password::unchecked(DECOY_PASSWORD));
        Self {
            accounts,
            sessions,
            hasher,
            clock,
            expiry: Arc::new(NeverExpires),
            decoy,
        }
    }

    /// Replace the expiry policy.
    #[must_use]
    pub fn with_expiry(mut self, expiry: Arc<dyn SessionExpiryPolicy>) -> Self {
        self.expiry = expiry;
        self
    }
}

#[async_trait]
impl<A, S> LoginService for SessionService<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginContext, Error> {
        let account = self
            .accounts
            .find_by_username(credentials.username())
            .await
            .map_err(map_account_repository_error)?;

        let stored = account
            .as_ref()
            .map_or(&self.decoy, |account| account.credential());
        let verified = verify_blocking(&self.hasher, credentials.password(), stored).await?;
        let Some(account) = account.filter(|_| verified) else {
            debug!("login rejected");
            return Err(Error::invalid_credentials());
        };

        let context = LoginContext::new(
            account.id(),
            account.name().clone(),
            account.username().clone(),
            SessionToken::generate(),
        );
        self.sessions
            .insert(&StoredSession {
                context: context.clone(),
                issued_at: self.clock.utc(),
            })
            .await
            .map_err(map_session_repository_error)?;

        info!(account_id = %context.account_id(), "login succeeded");
        Ok(context)
    }

    async fn logout(&self, token: &SessionToken) -> Result<(), Error> {
        let removed = self
            .sessions
            .remove(token)
            .await
            .map_err(map_session_repository_error)?;
        debug!(removed, "logout processed");
        Ok(())
    }

    async fn resolve(&self, token: &SessionToken) -> Result<LoginContext, Error> {
        let session = self
            .sessions
            .find(token)
            .await
            .map_err(map_session_repository_error)?
            .ok_or_else(Error::unauthenticated)?;

        if self.expiry.is_expired(session.issued_at, self.clock.utc()) {
            self.sessions
                .remove(token)
                .await
                .map_err(map_session_repository_error)?;
            debug!(account_id = %session.context.account_id(), "session expired");
            return Err(Error::unauthenticated());
        }

        Ok(session.context)
    }
}

#[cfg(test)]
#[path = "session_service_tests.rs"]
mod tests;
