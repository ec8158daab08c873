//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! - **memory**: process-local repositories for accounts, blogs and sessions
//! - **credentials**: salted, iterated SHA-256 password hashing
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod credentials;
pub mod memory;
