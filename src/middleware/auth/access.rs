//! Bearer access-token middleware: verify JWT → resolve user → AuthCtx.
//!
//! Applied to the protected subtree of the router. On success the resolved
//! user is attached to request extensions for handlers to extract; on any
//! failure the request is answered with 401 and the inner service never runs.
//!
//! Failure mapping (deliberately coarse, see error.rs):
//! - no credential presented            → "Access token required"
//! - expired / forged / malformed token → "Invalid token"
//! - token subject not in the store     → "Invalid token"
//! - store backend failure              → 500, not an auth failure

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Apply bearer-token authentication to a router subtree.
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

/// Extract the token from an Authorization header value.
///
/// Expects `Bearer <token>` — the token is the second whitespace-delimited
/// field, and the scheme is matched case-insensitively (RFC 6750).
fn bearer_token(header_value: &str) -> Option<&str> {
    let mut fields = header_value.split_whitespace();

    if !fields.next()?.eq_ignore_ascii_case("bearer") {
        return None;
    }

    fields.next()
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    let token = bearer_token(auth).ok_or(AppError::MissingToken)?;

    // Signature/expiry/claim checks live in AuthService. Everything it can
    // report collapses into one client-facing 401 here; the variant only
    // reaches the log.
    let claims = match state.auth.verify_verified(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = ?err, "access token verification failed");
            return Err(AppError::InvalidToken);
        }
    };

    // One read-only lookup per request; the store projects credential
    // fields out. A store outage is a 500, not an auth failure.
    let user = match state.users.find_by_id(claims.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(user_id = %claims.user_id, "token subject does not exist");
            return Err(AppError::InvalidToken);
        }
        Err(err) => {
            tracing::error!(error = ?err, "user store lookup failed");
            return Err(AppError::Internal);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(user));

    Ok(next.run(req).await)
}
