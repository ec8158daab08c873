//! Login contexts and the session expiry extension point.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use rand::RngCore;

use super::account::{AccountId, DisplayName, Username};

const TOKEN_BYTES: usize = 32;

/// Opaque bearer token identifying an issued login context.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Draw a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0_u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a token presented by a client. No format check is applied; an
    /// unknown token simply fails to resolve.
    pub fn from_presented(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token text handed to the client.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Authenticated identity attached to a client's subsequent requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginContext {
    account_id: AccountId,
    display_name: DisplayName,
    username: Username,
    token: SessionToken,
}

impl LoginContext {
    /// Assemble a context for a freshly authenticated account.
    pub fn new(
        account_id: AccountId,
        display_name: DisplayName,
        username: Username,
        token: SessionToken,
    ) -> Self {
        Self {
            account_id,
            display_name,
            username,
            token,
        }
    }

    /// Acting account.
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Login handle of the acting account.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Bearer token for this context.
    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}

/// Login context as held by a session repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub context: LoginContext,
    pub issued_at: DateTime<Utc>,
}

/// Decides whether an issued session is still usable.
pub trait SessionExpiryPolicy: fmt::Debug + Send + Sync {
    /// Return `true` once a session issued at `issued_at` must be rejected.
    fn is_expired(&self, issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool;
}

/// Sessions stay valid until logout or reset.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverExpires;

impl SessionExpiryPolicy for NeverExpires {
    fn is_expired(&self, _issued_at: DateTime<Utc>, _now: DateTime<Utc>) -> bool {
        false
    }
}

/// Sessions expire a fixed time after login.
#[derive(Debug, Clone, Copy)]
pub struct FixedLifetime(TimeDelta);

impl FixedLifetime {
    /// Expire sessions `ttl` after issue.
    pub fn new(ttl: TimeDelta) -> Self {
        Self(ttl)
    }

    /// Build from a second count, saturating absurdly large values.
    pub fn from_secs(secs: u64) -> Self {
        let secs = i64::try_from(secs).unwrap_or(i64::MAX);
        Self(TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::MAX))
    }
}

impl SessionExpiryPolicy for FixedLifetime {
    fn is_expired(&self, issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(issued_at) > self.0
    }
}
