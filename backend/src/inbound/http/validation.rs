//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies declare their fields as `Option` so an absent field becomes
//! a structured `invalid_request` error naming the field rather than a bare
//! deserialisation failure.

use serde_json::json;

use crate::domain::{AccountValidationError, BlogId, BlogValidationError, Error};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: &str, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    field_error(field, "missing_field", format!("missing required field: {field}"))
}

/// Unwrap a required request field.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn map_account_validation_error(err: AccountValidationError) -> Error {
    let (field, code) = match err {
        AccountValidationError::InvalidId => ("id", "invalid_id"),
        AccountValidationError::EmptyUsername => ("username", "empty_username"),
        AccountValidationError::UsernameTooShort { .. } => ("username", "username_too_short"),
        AccountValidationError::UsernameContainsWhitespace => {
            ("username", "username_contains_whitespace")
        }
        AccountValidationError::EmptyName => ("name", "empty_name"),
        AccountValidationError::PasswordTooShort { .. } => ("password", "password_too_short"),
    };
    field_error(field, code, err.to_string())
}

pub(crate) fn map_blog_validation_error(err: BlogValidationError) -> Error {
    let code = match err {
        BlogValidationError::InvalidId => "invalid_id",
        BlogValidationError::EmptyTitle => "empty_title",
        BlogValidationError::EmptyAuthor => "empty_author",
        BlogValidationError::EmptyUrl => "empty_url",
    };
    field_error(err.field(), code, err.to_string())
}

/// Parse a blog id taken from the request path.
///
/// An id that cannot name any blog is reported exactly like a deleted one.
pub(crate) fn parse_blog_id(raw: &str) -> Result<BlogId, Error> {
    BlogId::new(raw).map_err(|_| Error::blog_not_found(raw))
}
