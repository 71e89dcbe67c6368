/**
 * Logout Handler
 *
 * POST /api/logout
 *
 * Tells the browser to drop the session cookie. There is no server-side
 * session to invalidate; a copied token stays valid until it expires.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::removal_cookie;
use crate::backend::server::state::AppState;

pub async fn logout(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.add(removal_cookie(&app_state.config.cookie));
    (jar, Json(serde_json::json!({ "message": "Logged out" })))
}
