/**
 * Profile Handler
 *
 * GET /api/profile
 *
 * Returns the decoded claims of the caller's session token. No database
 * lookup happens here: the token is the whole answer.
 */

use axum::response::Json;

use crate::backend::auth::sessions::Claims;
use crate::backend::middleware::AuthUser;

/// Profile handler
///
/// Rejected with `401` by the `AuthUser` extractor when the cookie is
/// missing or the token does not verify.
pub async fn profile(AuthUser(claims): AuthUser) -> Json<Claims> {
    Json(claims)
}
