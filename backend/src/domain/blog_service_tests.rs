//! Tests for the blog service.

use chrono::{DateTime, Local, TimeZone, Utc};
use futures::future::join_all;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{AccountsCommand, MockBlogRepository};
use crate::domain::{
    AccountService, ErrorCode, LoginCredentials, Registration, SessionService, SessionToken,
};
use crate::outbound::credentials::Sha256PasswordHasher;
use crate::outbound::memory::{
    InMemoryAccountRepository, InMemoryBlogRepository, InMemorySessionRepository,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_clock() -> Arc<dyn Clock> {
    let now = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    Arc::new(FixedClock(now))
}

struct Harness {
    accounts: AccountService<InMemoryAccountRepository>,
    sessions: Arc<dyn LoginService>,
    blogs: Arc<BlogService<InMemoryBlogRepository>>,
}

#[fixture]
fn harness() -> Harness {
    let repo = Arc::new(InMemoryAccountRepository::default());
    let hasher = Arc::new(Sha256PasswordHasher::default());
    let clock = fixed_clock();
    let sessions: Arc<dyn LoginService> = Arc::new(SessionService::new(
        repo.clone(),
        Arc::new(InMemorySessionRepository::default()),
        hasher.clone(),
        clock.clone(),
    ));
    Harness {
        accounts: AccountService::new(repo, hasher),
        sessions: sessions.clone(),
        blogs: Arc::new(BlogService::new(
            Arc::new(InMemoryBlogRepository::default()),
            sessions,
            clock,
        )),
    }
}

impl Harness {
    async fn login_as(&self, name: &str, username: &str, password: &str) -> LoginContext {
        let registration =
            Registration::try_from_parts(name, username, password).expect("valid registration");
        self.accounts
            .register(&registration)
            .await
            .expect("registration succeeds");
        let credentials =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        self.sessions
            .login(&credentials)
            .await
            .expect("login succeeds")
    }

    async fn michael(&self) -> LoginContext {
        self.login_as("Michael Scott", "mscott", "dundermiflin").await
    }

    async fn dwight(&self) -> LoginContext {
        self.login_as("Dwight Schrute", "dschrute", "ihatejim").await
    }

    async fn create(&self, context: &LoginContext, title: &str) -> Blog {
        let draft = BlogDraft::try_from_parts(title, "Michael Scott", "http://myblogs.com")
            .expect("valid draft");
        self.blogs
            .create(context, draft)
            .await
            .expect("creation succeeds")
    }

    async fn like_times(&self, blog_id: BlogId, times: usize) {
        for _ in 0..times {
            self.blogs.like(blog_id).await.expect("like succeeds");
        }
    }
}

#[rstest]
#[tokio::test]
async fn created_blog_is_owned_by_the_creator(harness: Harness) {
    let michael = harness.michael().await;

    let blog = harness.create(&michael, "How to sell paper").await;

    assert_eq!(blog.owner_id(), michael.account_id());
    assert_eq!(blog.likes(), 0);
    let listed = harness.blogs.list().await.expect("list");
    assert_eq!(listed, vec![blog]);
}

#[rstest]
#[tokio::test]
async fn create_rejects_logged_out_context(harness: Harness) {
    let michael = harness.michael().await;
    harness
        .sessions
        .logout(michael.token())
        .await
        .expect("logout");

    let draft =
        BlogDraft::try_from_parts("Stale", "Nobody", "http://stale.example").expect("valid draft");
    let err = harness
        .blogs
        .create(&michael, draft)
        .await
        .expect_err("stale context must fail");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.detail_code(), Some("unauthenticated"));
    assert!(harness.blogs.list().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn like_adds_exactly_one(harness: Harness) {
    let michael = harness.michael().await;
    let blog = harness.create(&michael, "How to sell paper").await;

    let liked = harness.blogs.like(blog.id()).await.expect("like");
    assert_eq!(liked.likes(), 1);
    let liked = harness.blogs.like(blog.id()).await.expect("like");
    assert_eq!(liked.likes(), 2);
}

#[rstest]
#[tokio::test]
async fn like_of_unknown_blog_is_not_found(harness: Harness) {
    let err = harness
        .blogs
        .like(BlogId::random())
        .await
        .expect_err("missing blog");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.detail_code(), Some("blog_not_found"));
}

#[rstest]
#[tokio::test]
async fn concurrent_likes_are_all_counted(harness: Harness) {
    let michael = harness.michael().await;
    let blog = harness.create(&michael, "How to sell paper").await;

    let results = join_all((0..50).map(|_| harness.blogs.like(blog.id()))).await;
    assert!(results.iter().all(Result::is_ok));

    let stored = harness.blogs.get(blog.id()).await.expect("get");
    assert_eq!(stored.likes(), 50);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_likes_are_all_counted(harness: Harness) {
    let michael = harness.michael().await;
    let blog = harness.create(&michael, "How to sell paper").await;

    let tasks: Vec<_> = (0..200)
        .map(|_| {
            let blogs = Arc::clone(&harness.blogs);
            let id = blog.id();
            tokio::spawn(async move { blogs.like(id).await })
        })
        .collect();
    for task in tasks {
        task.await.expect("like task").expect("like succeeds");
    }

    let stored = harness.blogs.get(blog.id()).await.expect("get");
    assert_eq!(stored.likes(), 200);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn likes_racing_a_delete_either_land_or_miss(harness: Harness) {
    let michael = harness.michael().await;
    let blog = harness.create(&michael, "How to sell paper").await;

    let likes: Vec<_> = (0..100)
        .map(|_| {
            let blogs = Arc::clone(&harness.blogs);
            let id = blog.id();
            tokio::spawn(async move { blogs.like(id).await })
        })
        .collect();
    let delete = {
        let blogs = Arc::clone(&harness.blogs);
        let context = michael.clone();
        let id = blog.id();
        tokio::spawn(async move { blogs.delete(&context, id).await })
    };

    delete.await.expect("delete task").expect("owner delete succeeds");
    for like in likes {
        match like.await.expect("like task") {
            Ok(liked) => assert!(liked.likes() <= 100),
            Err(err) => assert_eq!(err.detail_code(), Some("blog_not_found")),
        }
    }
    let err = harness
        .blogs
        .like(blog.id())
        .await
        .expect_err("deleted blog stays gone");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(harness.blogs.list().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn repeated_listings_without_mutation_are_identical(harness: Harness) {
    let michael = harness.michael().await;
    let first = harness.create(&michael, "first").await;
    harness.create(&michael, "second").await;
    let third = harness.create(&michael, "third").await;
    harness.create(&michael, "fourth").await;
    harness.like_times(first.id(), 2).await;
    harness.like_times(third.id(), 2).await;

    let ordered_once = harness.blogs.ordered_listing().await.expect("listing");
    let ordered_twice = harness.blogs.ordered_listing().await.expect("listing");
    assert_eq!(ordered_once, ordered_twice);
    let titles: Vec<&str> = ordered_once.iter().map(Blog::title).collect();
    assert_eq!(titles, ["first", "third", "second", "fourth"]);

    let listed_once = harness.blogs.list().await.expect("list");
    let listed_twice = harness.blogs.list().await.expect("list");
    assert_eq!(listed_once, listed_twice);
}

#[rstest]
#[tokio::test]
async fn ordered_listing_sorts_by_likes_and_keeps_creation_order_on_ties(harness: Harness) {
    let michael = harness.michael().await;
    harness.create(&michael, "first").await;
    let second = harness.create(&michael, "second").await;
    let third = harness.create(&michael, "third").await;
    let fourth = harness.create(&michael, "fourth").await;
    harness.like_times(third.id(), 2).await;
    harness.like_times(second.id(), 1).await;
    harness.like_times(fourth.id(), 1).await;

    let titles: Vec<String> = harness
        .blogs
        .ordered_listing()
        .await
        .expect("ordered listing")
        .iter()
        .map(|blog| blog.title().to_owned())
        .collect();

    assert_eq!(titles, ["third", "second", "fourth", "first"]);
}

#[rstest]
#[tokio::test]
async fn owner_deletes_their_blog(harness: Harness) {
    let michael = harness.michael().await;
    let blog = harness.create(&michael, "How to sell paper").await;

    harness
        .blogs
        .delete(&michael, blog.id())
        .await
        .expect("owner may delete");

    let err = harness.blogs.get(blog.id()).await.expect_err("gone");
    assert_eq!(err.code(), ErrorCode::NotFound);
    let err = harness.blogs.like(blog.id()).await.expect_err("gone");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn non_owner_cannot_delete(harness: Harness) {
    let michael = harness.michael().await;
    let dwight = harness.dwight().await;
    let blog = harness.create(&michael, "How to sell paper").await;

    let err = harness
        .blogs
        .delete(&dwight, blog.id())
        .await
        .expect_err("non-owner must be refused");

    assert_eq!(err.code(), ErrorCode::Forbidden);
    assert_eq!(err.detail_code(), Some("not_blog_owner"));
    assert_eq!(harness.blogs.list().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn deleting_a_missing_blog_is_not_found(harness: Harness) {
    let michael = harness.michael().await;
    let err = harness
        .blogs
        .delete(&michael, BlogId::random())
        .await
        .expect_err("missing blog");
    assert_eq!(err.detail_code(), Some("blog_not_found"));
}

#[rstest]
#[tokio::test]
async fn forged_context_cannot_delete(harness: Harness) {
    let michael = harness.michael().await;
    let blog = harness.create(&michael, "How to sell paper").await;
    let forged = LoginContext::new(
        michael.account_id(),
        michael.display_name().clone(),
        michael.username().clone(),
        SessionToken::from_presented("forged"),
    );

    let err = harness
        .blogs
        .delete(&forged, blog.id())
        .await
        .expect_err("forged token must fail");
    assert_eq!(err.detail_code(), Some("unauthenticated"));
}

#[rstest]
#[tokio::test]
async fn blogs_by_owner_filters_on_the_creator(harness: Harness) {
    let michael = harness.michael().await;
    let dwight = harness.dwight().await;
    harness.create(&michael, "paper").await;
    harness.create(&dwight, "beets").await;
    harness.create(&michael, "improv").await;

    let titles: Vec<String> = harness
        .blogs
        .blogs_by_owner(michael.account_id())
        .await
        .expect("owner listing")
        .iter()
        .map(|blog| blog.title().to_owned())
        .collect();
    assert_eq!(titles, ["paper", "improv"]);
}

#[rstest]
#[tokio::test]
async fn blog_storage_failures_are_internal() {
    let mut repo = MockBlogRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(BlogRepositoryError::storage("unavailable")));
    let sessions: Arc<dyn LoginService> = Arc::new(SessionService::new(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(InMemorySessionRepository::default()),
        Arc::new(Sha256PasswordHasher::default()),
        fixed_clock(),
    ));
    let service = BlogService::new(Arc::new(repo), sessions, fixed_clock());

    let err = service
        .ordered_listing()
        .await
        .expect_err("storage failure");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
