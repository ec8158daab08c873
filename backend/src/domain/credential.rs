//! Stored credential derivations.
//!
//! The derivation format belongs to whichever
//! [`PasswordHasher`](crate::domain::ports::PasswordHasher) produced it; the
//! domain treats it as an opaque string that must never be echoed.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::PasswordHasher;
use crate::domain::{Error, Password};

/// One-way derivation of an account password, as persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an encoded derivation produced by a hasher adapter.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded form, for the adapter that verifies it.
    pub fn encoded(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(..)")
    }
}

fn blocking_task_failed(err: &tokio::task::JoinError) -> Error {
    Error::internal(format!("credential task failed: {err}"))
}

/// Derive a credential on the blocking pool so key stretching never stalls
/// the request worker.
pub(crate) async fn derive_blocking(
    hasher: &Arc<dyn PasswordHasher>,
    password: &Password,
) -> Result<CredentialHash, Error> {
    let hasher = Arc::clone(hasher);
    let password = password.clone();
    tokio::task::spawn_blocking(move || hasher.derive(&password))
        .await
        .map_err(|err| blocking_task_failed(&err))
}

/// Verify a credential on the blocking pool.
pub(crate) async fn verify_blocking(
    hasher: &Arc<dyn PasswordHasher>,
    password: &Password,
    credential: &CredentialHash,
) -> Result<bool, Error> {
    let hasher = Arc::clone(hasher);
    let password = password.clone();
    let credential = credential.clone();
    tokio::task::spawn_blocking(move || hasher.verify(&password, &credential))
        .await
        .map_err(|err| blocking_task_failed(&err))
}
