//! Post API integration tests
//!
//! Tests for creating, listing, reading and updating posts, including the
//! cover upload side effects.

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::multipart::MultipartForm;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    cover_part, create_test_post, create_test_user, post_form, TestApp, COVER_BYTES,
};

fn cover_file_name(post: &Value) -> String {
    post["cover"]
        .as_str()
        .unwrap()
        .strip_prefix("uploads/")
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_post_success() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(post_form("Hello"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let post: Value = response.json();
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["summary"], "Hello summary");
    assert_eq!(post["content"], "<p>Hello content</p>");
    assert_eq!(post["author"], alice.id.to_string());

    let cover = post["cover"].as_str().unwrap();
    assert!(cover.starts_with("uploads/"), "{}", cover);
    assert!(cover.ends_with(".png"), "{}", cover);
    assert_eq!(app.uploaded_files(), vec![cover_file_name(&post)]);
}

#[tokio::test]
async fn test_create_post_keeps_whitespace_text() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "   ")
        .add_text("summary", "s")
        .add_text("content", "c")
        .add_part("cover", cover_part("cover.png", "image/png", COVER_BYTES));
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["title"], "   ");
}

#[tokio::test]
async fn test_cover_is_served() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let post = create_test_post(&app, &alice, "Served").await;

    let uri = format!("/{}", post["cover"].as_str().unwrap());
    let response = app.server.get(&uri).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), COVER_BYTES);
}

#[tokio::test]
async fn test_cover_without_extension() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "t")
        .add_text("summary", "s")
        .add_text("content", "c")
        .add_part("cover", cover_part("cover", "application/octet-stream", b"raw".to_vec()));
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    response.assert_status(StatusCode::CREATED);

    let post: Value = response.json();
    assert!(!cover_file_name(&post).contains('.'));
}

#[tokio::test]
async fn test_create_post_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/post").multipart(post_form("Nope")).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_create_post_with_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/post")
        .add_cookie(Cookie::new("token", "forged"))
        .multipart(post_form("Nope"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_create_post_without_cover() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "t")
        .add_text("summary", "s")
        .add_text("content", "c");
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "No file uploaded.");
}

#[tokio::test]
async fn test_create_post_with_empty_file_name() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "t")
        .add_text("summary", "s")
        .add_text("content", "c")
        .add_part("cover", cover_part("", "application/octet-stream", Vec::<u8>::new()));
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_create_post_missing_field_discards_cover() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "t")
        .add_text("content", "c")
        .add_part("cover", cover_part("cover.png", "image/png", b"bytes".to_vec()));
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_create_post_rejects_second_cover() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = post_form("Two covers")
        .add_part("cover", cover_part("other.jpg", "image/jpeg", b"jpeg".to_vec()));
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_oversized_cover_is_rejected_and_removed() {
    let app = TestApp::with_config(|config| config.max_upload_bytes = 1024).await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "Too big")
        .add_text("summary", "s")
        .add_text("content", "c")
        .add_part("cover", cover_part("huge.png", "image/png", vec![0u8; 64 * 1024]));
    let response = app
        .server
        .post("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = response.json();
    assert_eq!(body["status"], 413);
    assert!(app.uploaded_files().is_empty());

    let listing: Value = app.server.get("/api/post").await.json();
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn test_list_posts_empty() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/post").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_posts_newest_first_and_limited() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    for i in 0..22 {
        create_test_post(&app, &alice, &format!("post-{:02}", i)).await;
    }

    let response = app.server.get("/api/post").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let posts: Vec<Value> = response.json();
    assert_eq!(posts.len(), 20);
    assert_eq!(posts[0]["title"], "post-21");
    assert_eq!(posts[19]["title"], "post-02");

    for post in &posts {
        assert_eq!(post["author"]["username"], "alice");
        assert_eq!(post["author"]["id"], alice.id.to_string());
    }
}

#[tokio::test]
async fn test_get_post() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let created = create_test_post(&app, &alice, "Readable").await;

    let uri = format!("/api/post/{}", created["id"].as_str().unwrap());
    let response = app.server.get(&uri).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let post: Value = response.json();
    assert_eq!(post["id"], created["id"]);
    assert_eq!(post["title"], "Readable");
    assert_eq!(post["cover"], created["cover"]);
    assert_eq!(post["author"]["username"], "alice");
}

#[tokio::test]
async fn test_get_unknown_post() {
    let app = TestApp::new().await;

    let uri = format!("/api/post/{}", Uuid::new_v4());
    let response = app.server.get(&uri).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Post not found");
}

#[tokio::test]
async fn test_get_malformed_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/post/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_by_author_changes_only_supplied_fields() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let created = create_test_post(&app, &alice, "Draft").await;

    let form = MultipartForm::new()
        .add_text("id", created["id"].as_str().unwrap())
        .add_text("title", "Final");
    let response = app
        .server
        .put("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    response.assert_status_ok();

    let post: Value = response.json();
    assert_eq!(post["title"], "Final");
    assert_eq!(post["summary"], created["summary"]);
    assert_eq!(post["content"], created["content"]);
    assert_eq!(post["cover"], created["cover"]);
    assert_eq!(post["created_at"], created["created_at"]);
    assert_eq!(post["author"]["id"], alice.id.to_string());
}

#[tokio::test]
async fn test_update_with_new_cover_keeps_old_file() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let created = create_test_post(&app, &alice, "Draft").await;

    let form = MultipartForm::new()
        .add_text("id", created["id"].as_str().unwrap())
        .add_part("cover", cover_part("new.jpg", "image/jpeg", b"jpeg bytes".to_vec()));
    let response = app
        .server
        .put("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    response.assert_status_ok();

    let post: Value = response.json();
    let cover = post["cover"].as_str().unwrap();
    assert_ne!(post["cover"], created["cover"]);
    assert!(cover.ends_with(".jpg"), "{}", cover);
    assert_eq!(post["title"], "Draft");
    assert_eq!(app.uploaded_files().len(), 2);
}

#[tokio::test]
async fn test_update_by_other_user_is_forbidden() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let created = create_test_post(&app, &alice, "Mine").await;

    let form = MultipartForm::new()
        .add_text("id", created["id"].as_str().unwrap())
        .add_text("title", "Hijacked")
        .add_part("cover", cover_part("evil.png", "image/png", b"evil".to_vec()));
    let response = app
        .server
        .put("/api/post")
        .add_cookie(bob.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["message"],
        "You are not the author and cannot edit this post."
    );

    // Bob's upload was discarded; only alice's cover remains
    assert_eq!(app.uploaded_files(), vec![cover_file_name(&created)]);

    let uri = format!("/api/post/{}", created["id"].as_str().unwrap());
    let post: Value = app.server.get(&uri).await.json();
    assert_eq!(post["title"], "Mine");
    assert_eq!(post["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn test_update_unknown_post() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("id", Uuid::new_v4())
        .add_text("title", "Ghost");
    let response = app
        .server
        .put("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_id() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let form = MultipartForm::new()
        .add_text("title", "No id")
        .add_part("cover", cover_part("c.png", "image/png", b"png".to_vec()));
    let response = app
        .server
        .put("/api/post")
        .add_cookie(alice.cookie.clone())
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_update_unauthenticated() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let created = create_test_post(&app, &alice, "Locked").await;

    let form = MultipartForm::new()
        .add_text("id", created["id"].as_str().unwrap())
        .add_text("title", "Anonymous edit");
    let response = app.server.put("/api/post").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
