//! Port abstraction for issued login sessions.

use async_trait::async_trait;

use crate::domain::{SessionToken, StoredSession};

use super::define_port_error;

define_port_error! {
    /// Errors raised by session repository adapters.
    pub enum SessionRepositoryError {
        /// The backing store failed.
        Storage { message: String } => "session repository storage failed: {message}",
    }
}

/// Driven port holding the sessions issued at login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Record a freshly issued session.
    async fn insert(&self, session: &StoredSession) -> Result<(), SessionRepositoryError>;

    /// Look up the session behind a token.
    async fn find(
        &self,
        token: &SessionToken,
    ) -> Result<Option<StoredSession>, SessionRepositoryError>;

    /// Forget a token. Returns whether it was present.
    async fn remove(&self, token: &SessionToken) -> Result<bool, SessionRepositoryError>;

    /// Forget every session.
    async fn clear(&self) -> Result<(), SessionRepositoryError>;
}
