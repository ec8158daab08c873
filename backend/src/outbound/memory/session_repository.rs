//! In-memory session store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{SessionRepository, SessionRepositoryError};
use crate::domain::{SessionToken, StoredSession};

use super::POISONED;

/// Issued sessions keyed by bearer token.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<SessionToken, StoredSession>>,
}

impl InMemorySessionRepository {
    fn with_sessions<T>(
        &self,
        f: impl FnOnce(&mut HashMap<SessionToken, StoredSession>) -> T,
    ) -> Result<T, SessionRepositoryError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| SessionRepositoryError::storage(POISONED))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: &StoredSession) -> Result<(), SessionRepositoryError> {
        self.with_sessions(|sessions| {
            sessions.insert(session.context.token().clone(), session.clone());
        })
    }

    async fn find(
        &self,
        token: &SessionToken,
    ) -> Result<Option<StoredSession>, SessionRepositoryError> {
        self.with_sessions(|sessions| sessions.get(token).cloned())
    }

    async fn remove(&self, token: &SessionToken) -> Result<bool, SessionRepositoryError> {
        self.with_sessions(|sessions| sessions.remove(token).is_some())
    }

    async fn clear(&self) -> Result<(), SessionRepositoryError> {
        self.with_sessions(HashMap::clear)
    }
}
