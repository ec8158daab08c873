//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Account, Error, Registration};

/// Domain use-case port for registering accounts.
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Register a new account.
    ///
    /// Fails with a `conflict` error tagged `duplicate_username` when the
    /// username is already taken.
    async fn register(&self, registration: &Registration) -> Result<Account, Error>;
}
