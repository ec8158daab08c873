//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Account, AccountId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Another account already holds the username.
        DuplicateUsername { username: String } =>
            "account repository rejected duplicate username: {username}",
        /// The backing store failed.
        Storage { message: String } => "account repository storage failed: {message}",
    }
}

/// Driven port for reading and registering accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account.
    ///
    /// The uniqueness check and the write happen atomically: of two
    /// concurrent inserts with the same username, exactly one succeeds.
    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError>;

    /// Fetch an account by exact, case-sensitive username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountRepositoryError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError>;

    /// All accounts in registration order.
    async fn list(&self) -> Result<Vec<Account>, AccountRepositoryError>;

    /// Remove every account.
    async fn clear(&self) -> Result<(), AccountRepositoryError>;
}
