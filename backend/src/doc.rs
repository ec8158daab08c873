//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer
//! - **Schemas**: request and response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep utoipa out of the domain
//! - **Security**: the bearer token issued by `POST /api/login`
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::blogs::{BlogResponse, CreateBlogRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::session::{LoginRequest, LoginResponse};
use crate::inbound::http::users::{
    AccountResponse, AccountWithBlogsResponse, OwnedBlogResponse, RegisterRequest,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Login token issued by POST /api/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Blog list API",
        description = "Register, log in, share blogs, like them, and delete your own."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::list_accounts,
        crate::inbound::http::session::login,
        crate::inbound::http::session::logout,
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::get_blog,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::like_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::testing::reset,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RegisterRequest,
        AccountResponse,
        AccountWithBlogsResponse,
        OwnedBlogResponse,
        LoginRequest,
        LoginResponse,
        CreateBlogRequest,
        BlogResponse,
    )),
    tags(
        (name = "users", description = "Account registration and listing"),
        (name = "session", description = "Login and logout"),
        (name = "blogs", description = "Shared blog links"),
        (name = "testing", description = "Store reset for end-to-end suites"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
