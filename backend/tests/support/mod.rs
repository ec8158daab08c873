//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the in-process app is assembled here from the public library surface,
//! exactly as the server binary does it.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::{Arc, Mutex};

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use bloglist::Trace;
use bloglist::domain::ports::LoginService;
use bloglist::domain::{
    AccountService, BlogService, ResetService, SessionExpiryPolicy, SessionService,
};
use bloglist::inbound::http::configure;
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::credentials::Sha256PasswordHasher;
use bloglist::outbound::memory::{
    InMemoryAccountRepository, InMemoryBlogRepository, InMemorySessionRepository,
};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

/// Clock that only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn starting_now() -> Self {
        Self(Mutex::new(Utc::now()))
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.0.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().expect("clock lock")
    }
}

/// Knobs for [`build_state`].
pub struct Wiring {
    pub clock: Arc<dyn Clock>,
    pub expiry: Option<Arc<dyn SessionExpiryPolicy>>,
}

impl Default for Wiring {
    fn default() -> Self {
        Self {
            clock: Arc::new(DefaultClock),
            expiry: None,
        }
    }
}

/// Wire every service over fresh in-memory stores.
pub fn build_state(wiring: Wiring) -> web::Data<HttpState> {
    let accounts = Arc::new(InMemoryAccountRepository::default());
    let blogs = Arc::new(InMemoryBlogRepository::default());
    let sessions = Arc::new(InMemorySessionRepository::default());
    let hasher = Arc::new(Sha256PasswordHasher::with_rounds(8));

    let account_service = Arc::new(AccountService::new(accounts.clone(), hasher.clone()));
    let mut session_service =
        SessionService::new(accounts.clone(), sessions.clone(), hasher, wiring.clock.clone());
    if let Some(expiry) = wiring.expiry {
        session_service = session_service.with_expiry(expiry);
    }
    let login: Arc<dyn LoginService> = Arc::new(session_service);
    let blog_service = Arc::new(BlogService::new(blogs.clone(), login.clone(), wiring.clock));

    web::Data::new(HttpState {
        accounts: account_service.clone(),
        accounts_query: account_service,
        login,
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        reset: Arc::new(ResetService::new(accounts, blogs, sessions)),
    })
}

/// Build the full route table around `state`.
pub fn app(
    state: web::Data<HttpState>,
    testing_endpoints: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .configure(move |cfg| configure(cfg, testing_endpoints))
}

/// Send a JSON request and return the status with the decoded body, if any.
pub async fn send<S>(
    app: &S,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let mut request = match method {
        "GET" => actix_test::TestRequest::get(),
        "POST" => actix_test::TestRequest::post(),
        "DELETE" => actix_test::TestRequest::delete(),
        other => panic!("unsupported method {other}"),
    }
    .uri(uri);
    if let Some(token) = token {
        request = request.insert_header(("Authorization", format!("Bearer {token}")));
    }
    if let Some(body) = body {
        request = request.set_json(body);
    }

    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status().as_u16();
    let bytes = actix_test::read_body(response).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, value)
}

pub async fn register<S>(app: &S, name: &str, username: &str, password: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let body = json!({"name": name, "username": username, "password": password});
    let (status, value) = send(app, "POST", "/api/users", None, Some(body)).await;
    assert_eq!(status, 201, "registration of {username} failed: {value}");
    value
}

pub async fn login<S>(app: &S, username: &str, password: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let body = json!({"username": username, "password": password});
    let (status, value) = send(app, "POST", "/api/login", None, Some(body)).await;
    assert_eq!(status, 200, "login of {username} failed: {value}");
    value["token"].as_str().expect("token").to_owned()
}

pub async fn create_blog<S>(app: &S, token: &str, title: &str, author: &str, url: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let body = json!({"title": title, "author": author, "url": url});
    let (status, value) = send(app, "POST", "/api/blogs", Some(token), Some(body)).await;
    assert_eq!(status, 201, "creating {title} failed: {value}");
    value
}
