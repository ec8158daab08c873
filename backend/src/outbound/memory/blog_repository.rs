//! In-memory blog store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{BlogRepository, BlogRepositoryError};
use crate::domain::{AccountId, Blog, BlogId};

use super::POISONED;

/// Blogs kept in creation order.
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    blogs: Mutex<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    fn with_blogs<T>(&self, f: impl FnOnce(&mut Vec<Blog>) -> T) -> Result<T, BlogRepositoryError> {
        let mut guard = self
            .blogs
            .lock()
            .map_err(|_| BlogRepositoryError::storage(POISONED))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, blog: &Blog) -> Result<(), BlogRepositoryError> {
        self.with_blogs(|blogs| blogs.push(blog.clone()))
    }

    async fn find(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        self.with_blogs(|blogs| blogs.iter().find(|b| b.id() == id).cloned())
    }

    async fn increment_likes(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        self.with_blogs(|blogs| {
            blogs.iter_mut().find(|b| b.id() == id).map(|blog| {
                blog.record_like();
                blog.clone()
            })
        })
    }

    async fn remove(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        self.with_blogs(|blogs| {
            blogs
                .iter()
                .position(|b| b.id() == id)
                .map(|index| blogs.remove(index))
        })
    }

    async fn list(&self) -> Result<Vec<Blog>, BlogRepositoryError> {
        self.with_blogs(|blogs| blogs.clone())
    }

    async fn list_by_owner(&self, owner: AccountId) -> Result<Vec<Blog>, BlogRepositoryError> {
        self.with_blogs(|blogs| {
            blogs
                .iter()
                .filter(|b| b.owner_id() == owner)
                .cloned()
                .collect()
        })
    }

    async fn clear(&self) -> Result<(), BlogRepositoryError> {
        self.with_blogs(Vec::clear)
    }
}
