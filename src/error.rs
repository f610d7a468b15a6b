/*
 * Responsibility
 * - App-wide error type + IntoResponse (HTTP status / JSON error body)
 * - Authentication failures map to the two client-facing 401 messages;
 *   everything else is collapsed into a client-safe 500
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// No credential presented: missing header, missing token segment,
    /// or unknown scheme.
    #[error("access token required")]
    MissingToken,
    /// Credential presented but unverifiable, or verified but no matching
    /// user. Expired, forged and malformed tokens all land here.
    #[error("invalid token")]
    InvalidToken,
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, "Access token required"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        let body = ErrorResponse {
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
