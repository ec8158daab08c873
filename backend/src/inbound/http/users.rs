//! Account HTTP handlers.
//!
//! ```text
//! POST /api/users {"name":"Michael Scott","username":"mscott","password":"dundermiflin"}
//! GET /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, Blog, Registration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, map_account_validation_error, require};

/// Registration request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "Michael Scott")]
    pub name: Option<String>,
    #[schema(example = "mscott")]
    pub username: Option<String>,
    #[schema(example = "dundermiflin")]
    pub password: Option<String>,
}

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Michael Scott")]
    pub name: String,
    #[schema(example = "mscott")]
    pub username: String,
}

impl From<&Account> for AccountResponse {
    fn from(value: &Account) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            username: value.username().to_string(),
        }
    }
}

/// Blog summary nested under its owner in the users listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnedBlogResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

impl From<&Blog> for OwnedBlogResponse {
    fn from(value: &Blog) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().to_owned(),
            author: value.author().to_owned(),
            url: value.url().to_owned(),
            likes: value.likes(),
        }
    }
}

/// Account together with the blogs it created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithBlogsResponse {
    #[serde(flatten)]
    pub account: AccountResponse,
    pub blogs: Vec<OwnedBlogResponse>,
}

fn parse_registration(payload: RegisterRequest) -> ApiResult<Registration> {
    let name = require(payload.name, FieldName::new("name"))?;
    let username = require(payload.username, FieldName::new("username"))?;
    let password = require(payload.password, FieldName::new("password"))?;
    Registration::try_from_parts(&name, &username, &password).map_err(map_account_validation_error)
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerAccount",
    security([])
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = parse_registration(payload.into_inner())?;
    let account = state.accounts.register(&registration).await?;
    Ok(HttpResponse::Created().json(AccountResponse::from(&account)))
}

/// List accounts with the blogs each one created.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Accounts", body = [AccountWithBlogsResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listAccounts",
    security([])
)]
#[get("/users")]
pub async fn list_accounts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AccountWithBlogsResponse>>> {
    let accounts = state.accounts_query.list_accounts().await?;
    let mut data = Vec::with_capacity(accounts.len());
    for account in &accounts {
        let blogs = state.blogs_query.blogs_by_owner(account.id()).await?;
        data.push(AccountWithBlogsResponse {
            account: AccountResponse::from(account),
            blogs: blogs.iter().map(OwnedBlogResponse::from).collect(),
        });
    }
    Ok(web::Json(data))
}
