//! Display ordering for blog listings.

use super::blog::Blog;

/// Sort blogs by likes, most liked first.
///
/// The sort is stable: blogs with equal likes keep the order they were given
/// in, which for repository listings is creation order.
///
/// # Examples
/// ```
/// use bloglist::domain::ordering::order_by_likes;
///
/// let ordered = order_by_likes(Vec::new());
/// assert!(ordered.is_empty());
/// ```
pub fn order_by_likes(mut blogs: Vec<Blog>) -> Vec<Blog> {
    blogs.sort_by(|a, b| b.likes().cmp(&a.likes()));
    blogs
}
