//! Blog store service.
//!
//! Creation and deletion re-check the caller's login context with the
//! session layer, so a context that has since been logged out (or has
//! expired) is rejected even if the caller still holds it. Likes are open to
//! everyone. Listings are ordered on every call from current like counts.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::authorization::can_delete;
use crate::domain::ordering::order_by_likes;
use crate::domain::ports::{
    BlogRepository, BlogRepositoryError, BlogsCommand, BlogsQuery, LoginService,
};
use crate::domain::{AccountId, Blog, BlogDraft, BlogId, Error, LoginContext};

fn map_blog_repository_error(error: BlogRepositoryError) -> Error {
    match error {
        BlogRepositoryError::Storage { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
    }
}

/// Blog service implementing the blog driving ports.
#[derive(Clone)]
pub struct BlogService<B> {
    blogs: Arc<B>,
    sessions: Arc<dyn LoginService>,
    clock: Arc<dyn Clock>,
}

impl<B> BlogService<B> {
    /// Create a new service.
    pub fn new(blogs: Arc<B>, sessions: Arc<dyn LoginService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            blogs,
            sessions,
            clock,
        }
    }

    async fn live_context(&self, context: &LoginContext) -> Result<LoginContext, Error> {
        self.sessions.resolve(context.token()).await
    }
}

#[async_trait]
impl<B> BlogsCommand for BlogService<B>
where
    B: BlogRepository,
{
    async fn create(&self, context: &LoginContext, draft: BlogDraft) -> Result<Blog, Error> {
        let context = self.live_context(context).await?;
        let blog = Blog::create(BlogId::random(), draft, context.account_id(), self.clock.utc());
        self.blogs
            .insert(&blog)
            .await
            .map_err(map_blog_repository_error)?;

        info!(blog_id = %blog.id(), owner_id = %blog.owner_id(), "blog created");
        Ok(blog)
    }

    async fn like(&self, blog_id: BlogId) -> Result<Blog, Error> {
        let blog = self
            .blogs
            .increment_likes(blog_id)
            .await
            .map_err(map_blog_repository_error)?
            .ok_or_else(|| Error::blog_not_found(blog_id))?;

        debug!(%blog_id, likes = blog.likes(), "blog liked");
        Ok(blog)
    }

    async fn delete(&self, context: &LoginContext, blog_id: BlogId) -> Result<(), Error> {
        let context = self.live_context(context).await?;
        let blog = self
            .blogs
            .find(blog_id)
            .await
            .map_err(map_blog_repository_error)?
            .ok_or_else(|| Error::blog_not_found(blog_id))?;

        if !can_delete(Some(&context), &blog) {
            warn!(%blog_id, account_id = %context.account_id(), "delete refused: not the owner");
            return Err(Error::not_blog_owner());
        }

        // Ownership never changes, so the check above still holds; a
        // concurrent delete may have won the race, though.
        self.blogs
            .remove(blog_id)
            .await
            .map_err(map_blog_repository_error)?
            .ok_or_else(|| Error::blog_not_found(blog_id))?;

        info!(%blog_id, "blog deleted");
        Ok(())
    }
}

#[async_trait]
impl<B> BlogsQuery for BlogService<B>
where
    B: BlogRepository,
{
    async fn list(&self) -> Result<Vec<Blog>, Error> {
        self.blogs.list().await.map_err(map_blog_repository_error)
    }

    async fn ordered_listing(&self) -> Result<Vec<Blog>, Error> {
        let blogs = self.list().await?;
        Ok(order_by_likes(blogs))
    }

    async fn get(&self, blog_id: BlogId) -> Result<Blog, Error> {
        self.blogs
            .find(blog_id)
            .await
            .map_err(map_blog_repository_error)?
            .ok_or_else(|| Error::blog_not_found(blog_id))
    }

    async fn blogs_by_owner(&self, owner: AccountId) -> Result<Vec<Blog>, Error> {
        self.blogs
            .list_by_owner(owner)
            .await
            .map_err(map_blog_repository_error)
    }
}

#[cfg(test)]
#[path = "blog_service_tests.rs"]
mod tests;
