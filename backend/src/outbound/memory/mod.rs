//! Process-local persistence adapters.
//!
//! Each store keeps its records behind a single mutex, so every port method
//! is atomic with respect to the others on the same store: usernames are
//! checked and claimed in one step, likes are never lost, and a removed blog
//! is invisible to any call that starts after the removal returns.
//!
//! No lock is held across an `.await`. A poisoned lock surfaces as a storage
//! error rather than a panic.

mod account_repository;
mod blog_repository;
mod session_repository;

pub use account_repository::InMemoryAccountRepository;
pub use blog_repository::InMemoryBlogRepository;
pub use session_repository::InMemorySessionRepository;

const POISONED: &str = "store lock poisoned";
