//! Account store service.
//!
//! Implements registration and account lookups on top of an
//! [`AccountRepository`] and a [`PasswordHasher`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, AccountsCommand, AccountsQuery, PasswordHasher,
};
use crate::domain::credential::derive_blocking;
use crate::domain::{Account, AccountId, Error, Registration};

/// Map account repository failures to domain errors.
pub(crate) fn map_account_repository_error(error: AccountRepositoryError) -> Error {
    match error {
        AccountRepositoryError::DuplicateUsername { username } => {
            Error::duplicate_username(&username)
        }
        AccountRepositoryError::Storage { message } => {
            Error::internal(format!("account repository error: {message}"))
        }
    }
}

/// Account service implementing the account driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    accounts: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> AccountService<R> {
    /// Create a new service over the given repository and hasher.
    pub fn new(accounts: Arc<R>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }
}

#[async_trait]
impl<R> AccountsCommand for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, registration: &Registration) -> Result<Account, Error> {
        let credential = derive_blocking(&self.hasher, registration.password()).await?;
        let account = Account::new(
            AccountId::random(),
            registration.name().clone(),
            registration.username().clone(),
            credential,
        );

        // The repository enforces uniqueness atomically; no pre-check here.
        self.accounts
            .insert(&account)
            .await
            .map_err(map_account_repository_error)?;

        info!(account_id = %account.id(), username = %account.username(), "account registered");
        Ok(account)
    }
}

#[async_trait]
impl<R> AccountsQuery for AccountService<R>
where
    R: AccountRepository,
{
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, Error> {
        debug!(%username, "looking up account");
        self.accounts
            .find_by_username(username)
            .await
            .map_err(map_account_repository_error)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, Error> {
        self.accounts
            .find_by_id(id)
            .await
            .map_err(map_account_repository_error)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, Error> {
        self.accounts
            .list()
            .await
            .map_err(map_account_repository_error)
    }
}
