/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Provide handlers with the authenticated context (AuthCtx)
 * - axum-specific code stays in core; the plain type lives in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
