//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence adapters, plus the services implementing the driving ports.
//! Keep types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Account, Registration and friends: registered users and their input.
//! - Blog, BlogDraft, BlogId: stored blog posts.
//! - LoginContext, SessionToken: authenticated identity for later requests.
//! - Error, ErrorCode: API error payload and stable identifier.
//! - AccountService, SessionService, BlogService, ResetService: port
//!   implementations wired by the server.

mod account;
mod account_service;
mod auth;
pub mod authorization;
mod blog;
mod blog_service;
mod credential;
pub mod error;
pub mod ordering;
pub mod ports;
mod reset_service;
mod session;
mod session_service;
mod trace_id;

pub use self::account::{
    Account, AccountId, AccountValidationError, DisplayName, PASSWORD_MIN, Password,
    Registration, USERNAME_MIN, Username,
};
pub use self::account_service::AccountService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::blog::{Blog, BlogDraft, BlogId, BlogValidationError};
pub use self::blog_service::BlogService;
pub use self::credential::CredentialHash;
pub use self::error::{Error, ErrorCode, ErrorValidationError, WRONG_CREDENTIALS_MESSAGE};
pub use self::reset_service::ResetService;
pub use self::session::{
    FixedLifetime, LoginContext, NeverExpires, SessionExpiryPolicy, SessionToken, StoredSession,
};
pub use self::session_service::SessionService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bloglist::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
