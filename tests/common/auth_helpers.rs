//! Authentication test helpers
//!
//! Register and log in through the real endpoints, returning what the
//! tests need to act as that user.

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};
use uuid::Uuid;

use super::app::TestApp;

/// Bytes of the cover attached by `post_form`
pub const COVER_BYTES: &[u8] = b"\x89PNG fake image bytes";

/// A registered, logged-in user
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    /// Session cookie from the login response
    pub cookie: Cookie<'static>,
}

/// Register `username`, expecting 201
pub async fn register(app: &TestApp, username: &str, password: &str) -> Uuid {
    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    body["id"].as_str().unwrap().parse().unwrap()
}

/// Log in, expecting 200, and return the session cookie
pub async fn login(app: &TestApp, username: &str, password: &str) -> Cookie<'static> {
    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();

    response.cookie("token")
}

/// Register and log in a user
pub async fn create_test_user(app: &TestApp, username: &str) -> TestUser {
    let password = format!("{}-password", username);
    let id = register(app, username, &password).await;
    let cookie = login(app, username, &password).await;

    TestUser {
        id,
        username: username.to_string(),
        password,
        cookie,
    }
}

/// A file part for the `cover` field
pub fn cover_part(file_name: &str, mime_type: &str, bytes: impl Into<bytes::Bytes>) -> Part {
    Part::bytes(bytes).file_name(file_name).mime_type(mime_type)
}

/// Multipart form for a complete new post with a PNG cover
pub fn post_form(title: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title)
        .add_text("summary", format!("{} summary", title))
        .add_text("content", format!("<p>{} content</p>", title))
        .add_part("cover", cover_part("cover.png", "image/png", COVER_BYTES))
}

/// Create a post as `user`, expecting 201, and return its JSON
pub async fn create_test_post(app: &TestApp, user: &TestUser, title: &str) -> Value {
    let response = app
        .server
        .post("/api/post")
        .add_cookie(user.cookie.clone())
        .multipart(post_form(title))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}
