//! Ownership checks for blog mutations.
//!
//! Decisions here are pure: no lookups, no side effects. Callers resolve the
//! login context and load the blog first, then ask.

use super::blog::Blog;
use super::session::LoginContext;

/// Return `true` iff `context` is present and belongs to the blog's owner.
///
/// Liking is intentionally not gated: any viewer may like any blog.
///
/// # Examples
/// ```
/// use bloglist::domain::authorization::can_delete;
/// # use bloglist::domain::{AccountId, Blog, BlogDraft, BlogId};
/// # let draft = BlogDraft::try_from_parts("t", "a", "u").unwrap();
/// # let blog = Blog::create(BlogId::random(), draft, AccountId::random(), chrono::Utc::now());
///
/// assert!(!can_delete(None, &blog));
/// ```
pub fn can_delete(context: Option<&LoginContext>, blog: &Blog) -> bool {
    context.is_some_and(|ctx| ctx.account_id() == blog.owner_id())
}
