//! Builders wiring domain services over the in-memory stores.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use bloglist::domain::ports::LoginService;
use bloglist::domain::{AccountService, BlogService, ResetService, SessionService};
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::credentials::Sha256PasswordHasher;
use bloglist::outbound::memory::{
    InMemoryAccountRepository, InMemoryBlogRepository, InMemorySessionRepository,
};

use super::ServerConfig;

/// Build the shared HTTP state.
///
/// Every worker receives a clone of the returned handle, so all workers see
/// the same stores.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let accounts = Arc::new(InMemoryAccountRepository::default());
    let blogs = Arc::new(InMemoryBlogRepository::default());
    let sessions = Arc::new(InMemorySessionRepository::default());
    let hasher = Arc::new(Sha256PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let account_service = Arc::new(AccountService::new(accounts.clone(), hasher.clone()));
    let login: Arc<dyn LoginService> = Arc::new(
        SessionService::new(accounts.clone(), sessions.clone(), hasher, clock.clone())
            .with_expiry(config.session_expiry.clone()),
    );
    let blog_service = Arc::new(BlogService::new(blogs.clone(), login.clone(), clock));

    web::Data::new(HttpState {
        accounts: account_service.clone(),
        accounts_query: account_service,
        login,
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        reset: Arc::new(ResetService::new(accounts, blogs, sessions)),
    })
}
