//! Account data model.
//!
//! Accounts are registered once and never updated or deleted. The username is
//! the unique, case-sensitive login handle; the display name is what other
//! users see ("Michael Scott is logged in").

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::credential::CredentialHash;

/// Minimum number of characters in a username.
pub const USERNAME_MIN: usize = 3;
/// Minimum number of characters in a password.
pub const PASSWORD_MIN: usize = 3;

/// Validation errors returned when building account value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    InvalidId,
    EmptyUsername,
    UsernameTooShort { min: usize },
    UsernameContainsWhitespace,
    EmptyName,
    PasswordTooShort { min: usize },
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "account id must be a valid UUID"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooShort { min } => {
                write!(f, "username must be at least {min} characters")
            }
            Self::UsernameContainsWhitespace => {
                write!(f, "username must not contain whitespace")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Stable account identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Parse an identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(AccountValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| AccountValidationError::InvalidId)
    }

    /// Generate a new random [`AccountId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique login handle. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`]; surrounding whitespace is trimmed.
    pub fn new(username: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(AccountValidationError::UsernameContainsWhitespace);
        }
        if trimmed.chars().count() < USERNAME_MIN {
            return Err(AccountValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable name shown once an account is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`]; surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Raw password supplied at registration. Wiped from memory on drop.
///
/// Whitespace is preserved verbatim; only the length is checked.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate a password chosen at registration.
    pub fn new(password: &str) -> Result<Self, AccountValidationError> {
        if password.chars().count() < PASSWORD_MIN {
            return Err(AccountValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self::unchecked(password))
    }

    /// Wrap a password presented at login, where length rules do not apply.
    pub(crate) fn unchecked(password: &str) -> Self {
        Self(Zeroizing::new(password.to_owned()))
    }

    /// Expose the raw secret to a credential hasher.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct Registration {
    name: DisplayName,
    username: Username,
    password: Password,
}

impl Registration {
    /// Build a registration from validated parts.
    pub fn new(name: DisplayName, username: Username, password: Password) -> Self {
        Self {
            name,
            username,
            password,
        }
    }

    /// Validate raw string inputs.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::Registration;
    ///
    /// let registration =
    ///     Registration::try_from_parts("Michael Scott", "mscott", "dundermiflin").unwrap();
    /// assert_eq!(registration.username().as_ref(), "mscott");
    /// ```
    pub fn try_from_parts(
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self::new(
            DisplayName::new(name)?,
            Username::new(username)?,
            Password::new(password)?,
        ))
    }

    /// Display name for the new account.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Requested unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password to derive the stored credential from.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Registered account.
///
/// ## Invariants
/// - `id`, `name` and `username` never change after registration.
/// - `credential` is a one-way derivation; the raw password is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: DisplayName,
    username: Username,
    credential: CredentialHash,
}

impl Account {
    /// Assemble an account from validated components.
    pub fn new(
        id: AccountId,
        name: DisplayName,
        username: Username,
        credential: CredentialHash,
    ) -> Self {
        Self {
            id,
            name,
            username,
            credential,
        }
    }

    /// Stable account identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Display name shown to other users.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Unique login handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored credential derivation. Never leaves the domain.
    pub(crate) fn credential(&self) -> &CredentialHash {
        &self.credential
    }
}
