/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - everything returned here is mounted behind the bearer-auth middleware
 *   (applied in app.rs); public routes like /health live outside v1
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::me::me;

pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
