//! Tests for blog HTTP handlers.

use super::*;
use crate::domain::ErrorCode;
use crate::inbound::http::test_utils::{TestApi, create_blog, login, register};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[rstest]
fn parse_draft_rejects_missing_fields() {
    let payload = CreateBlogRequest {
        title: Some("How to sell paper".to_owned()),
        author: None,
        url: Some("http://myblogs.com".to_owned()),
    };

    let err = parse_draft(payload).expect_err("missing author");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details().and_then(|d| d.get("field")),
        Some(&json!("author"))
    );
}

#[rstest]
fn parse_draft_rejects_blank_fields() {
    let payload = CreateBlogRequest {
        title: Some("   ".to_owned()),
        author: Some("Michael Scott".to_owned()),
        url: Some("http://myblogs.com".to_owned()),
    };

    let err = parse_draft(payload).expect_err("blank title");
    assert_eq!(err.detail_code(), Some("empty_title"));
}

#[rstest]
#[actix_web::test]
async fn created_blog_embeds_its_creator() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    register(&app, "Michael Scott", "mscott", "dundermiflin").await;
    let token = login(&app, "mscott", "dundermiflin").await;

    let blog = create_blog(&app, &token, "How to sell paper").await;

    assert_eq!(blog.likes, 0);
    let user = blog.user.expect("creator embedded");
    assert_eq!(user.username, "mscott");
    assert_eq!(user.name, "Michael Scott");
}

#[rstest]
#[actix_web::test]
async fn create_requires_a_live_token() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    let payload = json!({"title": "t", "author": "a", "url": "u"});

    let anonymous = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(&payload)
        .to_request();
    let response = actix_test::call_service(&app, anonymous).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let forged = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer("not-a-real-token"))
        .set_json(&payload)
        .to_request();
    let response = actix_test::call_service(&app, forged).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("unauthenticated")
    );
}

#[rstest]
#[actix_web::test]
async fn logged_out_token_cannot_create() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    register(&app, "Michael Scott", "mscott", "dundermiflin").await;
    let token = login(&app, "mscott", "dundermiflin").await;

    let logout = actix_test::TestRequest::post()
        .uri("/api/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, logout).await.status(),
        StatusCode::NO_CONTENT
    );

    let request = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "t", "author": "a", "url": "u"}))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, request).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[rstest]
#[actix_web::test]
async fn like_needs_no_login_and_counts_once() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    register(&app, "Michael Scott", "mscott", "dundermiflin").await;
    let token = login(&app, "mscott", "dundermiflin").await;
    let blog = create_blog(&app, &token, "How to sell paper").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/blogs/{}/like", blog.id))
        .to_request();
    let liked: BlogResponse = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(liked.likes, 1);
}

#[rstest]
#[case("/api/blogs/not-a-uuid")]
#[case("/api/blogs/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[actix_web::test]
async fn unknown_blogs_are_not_found(#[case] uri: &str) {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("blog_not_found")
    );
}

#[rstest]
#[actix_web::test]
async fn only_the_creator_may_delete() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    register(&app, "Michael Scott", "mscott", "dundermiflin").await;
    register(&app, "Dwight Schrute", "dschrute", "ihatejim").await;
    let michael = login(&app, "mscott", "dundermiflin").await;
    let dwight = login(&app, "dschrute", "ihatejim").await;
    let blog = create_blog(&app, &michael, "How to sell paper").await;
    let uri = format!("/api/blogs/{}", blog.id);

    let request = actix_test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&dwight))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let request = actix_test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&michael))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = actix_test::TestRequest::get().uri(&uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn listing_is_ordered_by_likes() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    register(&app, "Michael Scott", "mscott", "dundermiflin").await;
    let token = login(&app, "mscott", "dundermiflin").await;
    create_blog(&app, &token, "first").await;
    let second = create_blog(&app, &token, "second").await;
    for _ in 0..2 {
        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/blogs/{}/like", second.id))
            .to_request();
        actix_test::call_service(&app, request).await;
    }

    let request = actix_test::TestRequest::get().uri("/api/blogs").to_request();
    let blogs: Vec<BlogResponse> = actix_test::call_and_read_body_json(&app, request).await;

    let titles: Vec<&str> = blogs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["second", "first"]);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request() {
    let api = TestApi::new();
    let app = actix_test::init_service(api.app()).await;
    register(&app, "Michael Scott", "mscott", "dundermiflin").await;
    let token = login(&app, "mscott", "dundermiflin").await;

    let request = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("invalid_json")
    );
}
