//! Port for one-way credential derivation.
//!
//! The algorithm is an adapter choice; the domain only derives at
//! registration and verifies at login.

use crate::domain::{CredentialHash, Password};

/// Driven port deriving and checking stored credentials.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Derive a fresh, salted credential from a password.
    fn derive(&self, password: &Password) -> CredentialHash;

    /// Check a password against a stored derivation. Malformed derivations
    /// never verify.
    fn verify(&self, password: &Password, credential: &CredentialHash) -> bool;
}
