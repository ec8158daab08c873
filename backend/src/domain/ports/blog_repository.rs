//! Port abstraction for blog persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{AccountId, Blog, BlogId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by blog repository adapters.
    pub enum BlogRepositoryError {
        /// The backing store failed.
        Storage { message: String } => "blog repository storage failed: {message}",
    }
}

/// Driven port for blog storage.
///
/// Adapters must serialise mutations per blog: `increment_likes` never loses
/// an update, and once `remove` returns, later reads and likes of that id
/// observe it as missing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Store a newly created blog.
    async fn insert(&self, blog: &Blog) -> Result<(), BlogRepositoryError>;

    /// Fetch a blog by identifier.
    async fn find(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Atomically add one like, returning the updated blog or `None` if the
    /// blog does not exist.
    async fn increment_likes(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Remove a blog, returning it if it was present.
    async fn remove(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// All blogs in creation order.
    async fn list(&self) -> Result<Vec<Blog>, BlogRepositoryError>;

    /// Blogs owned by one account, in creation order.
    async fn list_by_owner(&self, owner: AccountId) -> Result<Vec<Blog>, BlogRepositoryError>;

    /// Remove every blog.
    async fn clear(&self) -> Result<(), BlogRepositoryError>;
}
