//! Test helpers for inbound HTTP components.
//!
//! [`TestApi`] wires the real domain services over the in-memory adapters so
//! handler tests exercise the same code paths as the server, without I/O.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use mockable::DefaultClock;
use serde_json::json;

use crate::Trace;
use crate::domain::ports::LoginService;
use crate::domain::{AccountService, BlogService, ResetService, SessionService};
use crate::inbound::http::blogs::BlogResponse;
use crate::inbound::http::configure;
use crate::inbound::http::session::LoginResponse;
use crate::inbound::http::state::HttpState;
use crate::outbound::credentials::Sha256PasswordHasher;
use crate::outbound::memory::{
    InMemoryAccountRepository, InMemoryBlogRepository, InMemorySessionRepository,
};

// Low round count keeps handler tests fast; the format is unchanged.
const TEST_HASH_ROUNDS: u32 = 8;

/// In-process API over fresh in-memory stores.
pub struct TestApi {
    state: web::Data<HttpState>,
    testing_endpoints: bool,
}

impl TestApi {
    pub fn new() -> Self {
        let accounts = Arc::new(InMemoryAccountRepository::default());
        let blogs = Arc::new(InMemoryBlogRepository::default());
        let sessions = Arc::new(InMemorySessionRepository::default());
        let hasher = Arc::new(Sha256PasswordHasher::with_rounds(TEST_HASH_ROUNDS));
        let clock = Arc::new(DefaultClock);

        let account_service = Arc::new(AccountService::new(accounts.clone(), hasher.clone()));
        let login: Arc<dyn LoginService> = Arc::new(SessionService::new(
            accounts.clone(),
            sessions.clone(),
            hasher,
            clock.clone(),
        ));
        let blog_service = Arc::new(BlogService::new(blogs.clone(), login.clone(), clock));

        Self {
            state: web::Data::new(HttpState {
                accounts: account_service.clone(),
                accounts_query: account_service,
                login,
                blogs: blog_service.clone(),
                blogs_query: blog_service,
                reset: Arc::new(ResetService::new(accounts, blogs, sessions)),
            }),
            testing_endpoints: false,
        }
    }

    pub fn with_testing_endpoints() -> Self {
        Self {
            testing_endpoints: true,
            ..Self::new()
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let testing = self.testing_endpoints;
        App::new()
            .app_data(self.state.clone())
            .wrap(Trace)
            .configure(|cfg| configure(cfg, testing))
    }
}

/// Register an account, asserting success.
pub async fn register<S>(app: &S, name: &str, username: &str, password: &str)
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": name, "username": username, "password": password}))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert!(
        response.status().is_success(),
        "registration of {username} failed: {}",
        response.status()
    );
}

/// Log in, asserting success, and return the bearer token.
pub async fn login<S>(app: &S, username: &str, password: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": username, "password": password}))
        .to_request();
    let body: LoginResponse = actix_test::call_and_read_body_json(app, request).await;
    body.token
}

/// Create a blog as the token's owner, asserting success.
pub async fn create_blog<S>(app: &S, token: &str, title: &str) -> BlogResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"title": title, "author": "Michael Scott", "url": "http://myblogs.com"}))
        .to_request();
    actix_test::call_and_read_body_json(app, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn initialised_app_outlives_its_builder() {
        let app = {
            let api = TestApi::new();
            actix_test::init_service(api.app()).await
        };

        let request = actix_test::TestRequest::get().uri("/api/blogs").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
