/*
 * Responsibility
 * - GET /me: return the authenticated user
 * - Token verification and user resolution already happened in the
 *   middleware; this handler only shapes the response DTO
 */
use axum::Json;

use crate::api::v1::dto::users::UserResponse;
use crate::api::v1::extractors::AuthCtxExtractor;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<UserResponse> {
    let user = ctx.user;

    Json(UserResponse {
        id: user.id,
        user_name: user.user_name,
        email: user.email,
        image_url: user.image_url,
        created_at: user.created_at,
    })
}
