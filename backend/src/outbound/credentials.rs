//! Salted, iterated SHA-256 credential derivation.
//!
//! Stored form: `sha256$<rounds>$<salt-hex>$<digest-hex>`. The round count
//! travels with the credential so it can be raised later without
//! invalidating existing accounts.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::domain::ports::PasswordHasher;
use crate::domain::{CredentialHash, Password};

const SCHEME: &str = "sha256";
const SALT_BYTES: usize = 16;
const DEFAULT_ROUNDS: u32 = 10_000;

/// [`PasswordHasher`] backed by iterated SHA-256 with a random salt.
#[derive(Debug, Clone, Copy)]
pub struct Sha256PasswordHasher {
    rounds: u32,
}

impl Default for Sha256PasswordHasher {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Sha256PasswordHasher {
    /// Use a custom round count for new derivations. Zero is raised to one.
    pub fn with_rounds(rounds: u32) -> Self {
        Self {
            rounds: rounds.max(1),
        }
    }

    fn digest(rounds: u32, salt: &[u8], password: &str) -> Zeroizing<[u8; 32]> {
        let mut state: [u8; 32] = Sha256::new()
            .chain_update(salt)
            .chain_update(password.as_bytes())
            .finalize()
            .into();
        for _ in 1..rounds {
            state = Sha256::new()
                .chain_update(salt)
                .chain_update(state)
                .finalize()
                .into();
        }
        Zeroizing::new(state)
    }
}

struct Parsed {
    rounds: u32,
    salt: Vec<u8>,
    digest: Vec<u8>,
}

fn parse(encoded: &str) -> Option<Parsed> {
    let mut parts = encoded.split('$');
    if parts.next()? != SCHEME {
        return None;
    }
    let rounds: u32 = parts.next()?.parse().ok().filter(|r| *r > 0)?;
    let salt = hex::decode(parts.next()?).ok()?;
    let digest = hex::decode(parts.next()?).ok()?;
    if parts.next().is_some() || digest.len() != 32 {
        return None;
    }
    Some(Parsed {
        rounds,
        salt,
        digest,
    })
}

impl PasswordHasher for Sha256PasswordHasher {
    fn derive(&self, password: &Password) -> CredentialHash {
        let mut salt = [0_u8; SALT_BYTES];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = Self::digest(self.rounds, &salt, password.expose());
        CredentialHash::from_encoded(format!(
            "{SCHEME}${}${}${}",
            self.rounds,
            hex::encode(salt),
            hex::encode(digest.as_slice())
        ))
    }

    fn verify(&self, password: &Password, credential: &CredentialHash) -> bool {
        let Some(parsed) = parse(credential.encoded()) else {
            return false;
        };
        let candidate = Self::digest(parsed.rounds, &parsed.salt, password.expose());
        candidate.as_slice().ct_eq(&parsed.digest).into()
    }
}
