//! Driving port for blog mutations.

use async_trait::async_trait;

use crate::domain::{Blog, BlogDraft, BlogId, Error, LoginContext};

/// Domain use-case port for creating, liking and deleting blogs.
#[async_trait]
pub trait BlogsCommand: Send + Sync {
    /// Create a blog owned by the acting account.
    async fn create(&self, context: &LoginContext, draft: BlogDraft) -> Result<Blog, Error>;

    /// Add exactly one like. Open to every viewer.
    async fn like(&self, blog_id: BlogId) -> Result<Blog, Error>;

    /// Delete a blog. Only its owner may do so; the call is unconditional
    /// once made, so any confirmation prompt belongs to the client.
    async fn delete(&self, context: &LoginContext, blog_id: BlogId) -> Result<(), Error>;
}
