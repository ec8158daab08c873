//! Blog HTTP handlers.
//!
//! ```text
//! GET    /api/blogs
//! GET    /api/blogs/{id}
//! POST   /api/blogs            (Authorization: Bearer <token>)
//! POST   /api/blogs/{id}/like
//! DELETE /api/blogs/{id}       (Authorization: Bearer <token>)
//! ```
//!
//! Every blog is returned with its creator embedded under `user`, which is
//! what clients use to decide whether to offer the remove button.

use std::collections::HashMap;

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountId, Blog, BlogDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::AccountResponse;
use crate::inbound::http::validation::{
    FieldName, map_blog_validation_error, parse_blog_id, require,
};

/// Request payload for `POST /api/blogs`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[schema(example = "How to sell paper")]
    pub title: Option<String>,
    #[schema(example = "Michael Scott")]
    pub author: Option<String>,
    #[schema(example = "http://myblogs.com")]
    pub url: Option<String>,
}

/// Blog as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "How to sell paper")]
    pub title: String,
    #[schema(example = "Michael Scott")]
    pub author: String,
    #[schema(example = "http://myblogs.com")]
    pub url: String,
    pub likes: u64,
    /// Creator of the blog; absent only if the account vanished mid-reset.
    pub user: Option<AccountResponse>,
}

impl BlogResponse {
    fn new(blog: &Blog, owner: Option<&Account>) -> Self {
        Self {
            id: blog.id().to_string(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
            likes: blog.likes(),
            user: owner.map(AccountResponse::from),
        }
    }
}

async fn present(state: &HttpState, blog: &Blog) -> ApiResult<BlogResponse> {
    let owner = state.accounts_query.find_by_id(blog.owner_id()).await?;
    Ok(BlogResponse::new(blog, owner.as_ref()))
}

async fn present_all(state: &HttpState, blogs: &[Blog]) -> ApiResult<Vec<BlogResponse>> {
    let owners: HashMap<AccountId, Account> = state
        .accounts_query
        .list_accounts()
        .await?
        .into_iter()
        .map(|account| (account.id(), account))
        .collect();
    Ok(blogs
        .iter()
        .map(|blog| BlogResponse::new(blog, owners.get(&blog.owner_id())))
        .collect())
}

fn parse_draft(payload: CreateBlogRequest) -> ApiResult<BlogDraft> {
    let title = require(payload.title, FieldName::new("title"))?;
    let author = require(payload.author, FieldName::new("author"))?;
    let url = require(payload.url, FieldName::new("url"))?;
    BlogDraft::try_from_parts(&title, &author, &url).map_err(map_blog_validation_error)
}

/// List blogs ordered by likes, most liked first.
///
/// Blogs with equal likes keep their creation order.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Ordered blogs", body = [BlogResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let blogs = state.blogs_query.ordered_listing().await?;
    Ok(web::Json(present_all(&state, &blogs).await?))
}

/// Fetch one blog.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Blog", body = BlogResponse),
        (status = 404, description = "Blog not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "getBlog",
    security([])
)]
#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BlogResponse>> {
    let blog_id = parse_blog_id(&path)?;
    let blog = state.blogs_query.get(blog_id).await?;
    Ok(web::Json(present(&state, &blog).await?))
}

/// Create a blog owned by the caller.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthenticated", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "createBlog",
    security(("bearer" = []))
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    caller: Authenticated,
    payload: web::Json<CreateBlogRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(payload.into_inner())?;
    let blog = state.blogs.create(&caller.0, draft).await?;
    Ok(HttpResponse::Created().json(present(&state, &blog).await?))
}

/// Add one like. No login is needed.
#[utoipa::path(
    post,
    path = "/api/blogs/{id}/like",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Updated blog", body = BlogResponse),
        (status = 404, description = "Blog not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "likeBlog",
    security([])
)]
#[post("/blogs/{id}/like")]
pub async fn like_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BlogResponse>> {
    let blog_id = parse_blog_id(&path)?;
    let blog = state.blogs.like(blog_id).await?;
    Ok(web::Json(present(&state, &blog).await?))
}

/// Delete a blog. Only its creator may do so.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorSchema),
        (status = 403, description = "Not the creator", body = ErrorSchema),
        (status = 404, description = "Blog not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog",
    security(("bearer" = []))
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    caller: Authenticated,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let blog_id = parse_blog_id(&path)?;
    state.blogs.delete(&caller.0, blog_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "blogs_tests.rs"]
mod tests;
