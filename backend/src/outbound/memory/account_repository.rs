//! In-memory account store.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId};

use super::POISONED;

/// Accounts kept in registration order.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepository {
    fn with_accounts<T>(
        &self,
        f: impl FnOnce(&mut Vec<Account>) -> Result<T, AccountRepositoryError>,
    ) -> Result<T, AccountRepositoryError> {
        let mut guard = self
            .accounts
            .lock()
            .map_err(|_| AccountRepositoryError::storage(POISONED))?;
        f(&mut guard)
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        self.with_accounts(|accounts| {
            if accounts.iter().any(|a| a.username() == account.username()) {
                debug!(username = %account.username(), "username already taken");
                return Err(AccountRepositoryError::duplicate_username(
                    account.username().as_ref(),
                ));
            }
            accounts.push(account.clone());
            Ok(())
        })
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        self.with_accounts(|accounts| {
            Ok(accounts
                .iter()
                .find(|a| a.username().as_ref() == username)
                .cloned())
        })
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError> {
        self.with_accounts(|accounts| Ok(accounts.iter().find(|a| a.id() == id).cloned()))
    }

    async fn list(&self) -> Result<Vec<Account>, AccountRepositoryError> {
        self.with_accounts(|accounts| Ok(accounts.clone()))
    }

    async fn clear(&self) -> Result<(), AccountRepositoryError> {
        self.with_accounts(|accounts| {
            accounts.clear();
            Ok(())
        })
    }
}
