//! Store reset endpoint for end-to-end test runs.
//!
//! ```text
//! POST /api/testing/reset
//! ```
//!
//! Only registered when the server runs with testing endpoints enabled.

use actix_web::{HttpResponse, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Wipe every account, blog and session.
#[utoipa::path(
    post,
    path = "/api/testing/reset",
    responses(
        (status = 204, description = "Stores cleared"),
        (status = 404, description = "Testing endpoints disabled"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["testing"],
    operation_id = "resetStores",
    security([])
)]
#[post("/testing/reset")]
pub async fn reset(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.reset.reset().await?;
    Ok(HttpResponse::NoContent().finish())
}
