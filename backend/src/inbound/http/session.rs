//! Login and logout handlers.
//!
//! ```text
//! POST /api/login {"username":"mscott","password":"dundermiflin"}
//! POST /api/logout   (Authorization: Bearer <token>)
//! ```
//!
//! A successful login hands back the bearer token together with the name to
//! greet the user with; the client keeps it for subsequent requests.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LoginContext, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Login request body for `POST /api/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "mscott")]
    pub username: Option<String>,
    #[schema(example = "dundermiflin")]
    pub password: Option<String>,
}

/// Issued login context as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    #[schema(example = "mscott")]
    pub username: String,
    /// Display name, as in "Michael Scott is logged in".
    #[schema(example = "Michael Scott")]
    pub name: String,
}

impl From<&LoginContext> for LoginResponse {
    fn from(value: &LoginContext) -> Self {
        Self {
            token: value.token().as_str().to_owned(),
            username: value.username().to_string(),
            name: value.display_name().to_string(),
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

fn parse_login(payload: LoginRequest) -> ApiResult<LoginCredentials> {
    let username = require(payload.username, FieldName::new("username"))?;
    let password = require(payload.password, FieldName::new("password"))?;
    LoginCredentials::try_from_parts(&username, &password).map_err(map_login_validation_error)
}

/// Authenticate and issue a login context.
///
/// Unknown usernames and wrong passwords both answer `401` with the message
/// `Wrong credentials`.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Wrong credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = parse_login(payload.into_inner())?;
    let context = state.login.login(&credentials).await?;
    Ok(web::Json(LoginResponse::from(&context)))
}

/// Discard the caller's login context.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Unauthenticated", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "logout",
    security(("bearer" = []))
)]
#[post("/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    caller: Authenticated,
) -> ApiResult<HttpResponse> {
    state.login.logout(caller.0.token()).await?;
    Ok(HttpResponse::NoContent().finish())
}
