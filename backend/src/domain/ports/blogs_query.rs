//! Driving port for blog reads.

use async_trait::async_trait;

use crate::domain::{AccountId, Blog, BlogId, Error};

/// Domain use-case port for reading blogs.
#[async_trait]
pub trait BlogsQuery: Send + Sync {
    /// Every current blog, in no guaranteed order.
    async fn list(&self) -> Result<Vec<Blog>, Error>;

    /// Every current blog, most liked first, ties in creation order.
    ///
    /// Computed from current like counts on every call.
    async fn ordered_listing(&self) -> Result<Vec<Blog>, Error>;

    /// One blog by identifier.
    async fn get(&self, blog_id: BlogId) -> Result<Blog, Error>;

    /// Blogs created by one account, in creation order.
    async fn blogs_by_owner(&self, owner: AccountId) -> Result<Vec<Blog>, Error>;
}
