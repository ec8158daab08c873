//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`, [`LoginService`], [`TestingReset`])
//! are implemented by domain services and called by inbound adapters. Driven
//! ports (`*Repository`, [`PasswordHasher`]) are implemented by outbound
//! adapters and called by domain services.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod accounts_command;
mod accounts_query;
mod blog_repository;
mod blogs_command;
mod blogs_query;
mod login_service;
mod password_hasher;
mod session_repository;
mod testing_reset;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
pub use accounts_command::AccountsCommand;
pub use accounts_query::AccountsQuery;
#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogRepositoryError};
pub use blogs_command::BlogsCommand;
pub use blogs_query::BlogsQuery;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::PasswordHasher;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
pub use session_repository::{SessionRepository, SessionRepositoryError};
pub use testing_reset::TestingReset;
