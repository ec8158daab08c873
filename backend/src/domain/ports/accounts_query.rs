//! Driving port for account lookups.
//!
//! Inbound adapters use this port to decorate blogs with their owner and to
//! render the users listing without importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, Error};

/// Domain use-case port for reading accounts.
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Fetch an account by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, Error>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, Error>;

    /// All accounts in registration order.
    async fn list_accounts(&self) -> Result<Vec<Account>, Error>;
}
