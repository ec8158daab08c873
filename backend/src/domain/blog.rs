//! Blog data model.
//!
//! A blog is owned by exactly one account, fixed at creation. Only the like
//! counter ever changes afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::account::AccountId;

/// Validation errors returned by [`BlogDraft::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    InvalidId,
    EmptyTitle,
    EmptyAuthor,
    EmptyUrl,
}

impl BlogValidationError {
    /// Name of the offending input field, for error details.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyTitle => "title",
            Self::EmptyAuthor => "author",
            Self::EmptyUrl => "url",
        }
    }
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "blog id must be a valid UUID"),
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyAuthor => write!(f, "author must not be empty"),
            Self::EmptyUrl => write!(f, "url must not be empty"),
        }
    }
}

impl std::error::Error for BlogValidationError {}

/// Stable blog identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Parse an identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BlogValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
    }

    /// Generate a new random [`BlogId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn required(value: &str, error: BlogValidationError) -> Result<String, BlogValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Validated user input for a new blog.
///
/// # Examples
/// ```
/// use bloglist::domain::BlogDraft;
///
/// let draft =
///     BlogDraft::try_from_parts("How to sell paper", "Michael Scott", "http://myblogs.com")
///         .unwrap();
/// assert_eq!(draft.title(), "How to sell paper");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: String,
    url: String,
}

impl BlogDraft {
    /// Validate raw inputs; each field must be non-empty once trimmed.
    pub fn try_from_parts(
        title: &str,
        author: &str,
        url: &str,
    ) -> Result<Self, BlogValidationError> {
        Ok(Self {
            title: required(title, BlogValidationError::EmptyTitle)?,
            author: required(author, BlogValidationError::EmptyAuthor)?,
            url: required(url, BlogValidationError::EmptyUrl)?,
        })
    }

    /// Blog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Blog author as typed by the creator.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link to the blog.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Stored blog post.
///
/// ## Invariants
/// - `owner_id` is set at creation and never reassigned.
/// - `likes` starts at zero and only ever increases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    id: BlogId,
    title: String,
    author: String,
    url: String,
    likes: u64,
    owner_id: AccountId,
    created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a fresh blog with zero likes.
    pub fn create(
        id: BlogId,
        draft: BlogDraft,
        owner_id: AccountId,
        created_at: DateTime<Utc>,
    ) -> Self {
        let BlogDraft { title, author, url } = draft;
        Self {
            id,
            title,
            author,
            url,
            likes: 0,
            owner_id,
            created_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> BlogId {
        self.id
    }

    /// Blog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Blog author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link to the blog.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current like count.
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Account that created the blog.
    pub fn owner_id(&self) -> AccountId {
        self.owner_id
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Listing heading, `"<title> - <author>"`.
    pub fn heading(&self) -> String {
        format!("{} - {}", self.title, self.author)
    }

    /// Visible like counter, `"Likes: <n>"`.
    pub fn likes_label(&self) -> String {
        format!("Likes: {}", self.likes)
    }

    /// Add exactly one like. Saturates instead of wrapping.
    pub(crate) fn record_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}
