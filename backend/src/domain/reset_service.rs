//! Store wipe behind the testing reset endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::Error;
use crate::domain::account_service::map_account_repository_error;
use crate::domain::ports::{AccountRepository, BlogRepository, SessionRepository, TestingReset};

/// Clears accounts, blogs and sessions.
#[derive(Clone)]
pub struct ResetService<A, B, S> {
    accounts: Arc<A>,
    blogs: Arc<B>,
    sessions: Arc<S>,
}

impl<A, B, S> ResetService<A, B, S> {
    /// Create a reset service over the three stores.
    pub fn new(accounts: Arc<A>, blogs: Arc<B>, sessions: Arc<S>) -> Self {
        Self {
            accounts,
            blogs,
            sessions,
        }
    }
}

#[async_trait]
impl<A, B, S> TestingReset for ResetService<A, B, S>
where
    A: AccountRepository,
    B: BlogRepository,
    S: SessionRepository,
{
    async fn reset(&self) -> Result<(), Error> {
        // Sessions first so nobody acts on a half-cleared store.
        self.sessions
            .clear()
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        self.blogs
            .clear()
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        self.accounts
            .clear()
            .await
            .map_err(map_account_repository_error)?;

        warn!("all stores reset");
        Ok(())
    }
}
