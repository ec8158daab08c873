//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

pub mod auth;
pub mod blogs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod testing;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("request body is not valid JSON: {err}"))
            .with_details(json!({ "code": "invalid_json" }))
            .into()
    })
}

/// Register the `/api` routes.
///
/// The reset endpoint is only mounted when `testing_endpoints` is set, so in
/// every other deployment `POST /api/testing/reset` is a plain 404.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::configure;
///
/// let _app = App::new().configure(|cfg| configure(cfg, false));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, testing_endpoints: bool) {
    let mut api = web::scope("/api")
        .app_data(json_config())
        .service(users::register)
        .service(users::list_accounts)
        .service(session::login)
        .service(session::logout)
        .service(blogs::list_blogs)
        .service(blogs::create_blog)
        .service(blogs::get_blog)
        .service(blogs::like_blog)
        .service(blogs::delete_blog);
    if testing_endpoints {
        api = api.service(testing::reset);
    }
    cfg.service(api);
}
